//! Drawable objects that can be rasterized onto images.

use crate::pixel::OverlayMode;
use crate::{Image, Pixel};

/// An object that can be drawn onto an image.
pub trait Draw<P: Pixel> {
    /// Draws the object to the given image.
    fn draw(&self, image: &mut Image<P>);
}

/// Represents whether a border is inset, outset, or if it lays in the center.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderPosition {
    /// An inset border. May overlap the contents inside of the shape.
    Inset,
    /// A border that is balanced between the inside and outside of the shape.
    Center,
    /// An outset border. May overlap the contents outside of the shape. This
    /// is the default.
    #[default]
    Outset,
}

/// A shape border.
#[derive(Clone, Debug, Default)]
pub struct Border<P: Pixel> {
    /// The color of the border.
    pub color: P,
    /// The thickness of the border, in pixels.
    pub thickness: u32,
    /// The position of the border.
    pub position: BorderPosition,
}

impl<P: Pixel> Border<P> {
    /// Creates a new border with the given color and thickness.
    ///
    /// # Panics
    /// * The thickness is zero.
    pub fn new(color: P, thickness: u32) -> Self {
        assert_ne!(thickness, 0, "border thickness cannot be 0");

        Self {
            color,
            thickness,
            position: BorderPosition::default(),
        }
    }

    #[must_use]
    pub const fn with_color(mut self, color: P) -> Self {
        self.color = color;
        self
    }

    /// # Panics
    /// * The thickness is zero.
    #[must_use]
    pub fn with_thickness(mut self, thickness: u32) -> Self {
        assert_ne!(thickness, 0, "border thickness cannot be 0");
        self.thickness = thickness;
        self
    }

    #[must_use]
    pub const fn with_position(mut self, position: BorderPosition) -> Self {
        self.position = position;
        self
    }

    /// The thickness distributed to the inside and outside of the shape edge.
    const fn widths(&self) -> (u32, u32) {
        match self.position {
            BorderPosition::Outset => (0, self.thickness),
            BorderPosition::Inset => (self.thickness, 0),
            BorderPosition::Center => {
                let inner = self.thickness / 2;
                (inner, self.thickness - inner)
            }
        }
    }
}

/// An axis-aligned rectangle, optionally filled and/or bordered.
#[derive(Clone, Debug, Default)]
pub struct Rectangle<P: Pixel> {
    /// The position of the top-left corner.
    pub position: (u32, u32),
    /// The dimensions of the rectangle.
    pub size: (u32, u32),
    /// The border of the rectangle, if any.
    pub border: Option<Border<P>>,
    /// The fill color of the rectangle, if any.
    pub fill: Option<P>,
    /// The overlay mode to composite with, defaulting to the image's.
    pub overlay: Option<OverlayMode>,
}

impl<P: Pixel> Rectangle<P> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rectangle spanning the two corner points, inclusive.
    ///
    /// # Panics
    /// * The second point lies above or to the left of the first.
    #[must_use]
    pub fn from_bounding_box(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        assert!(x2 >= x1 && y2 >= y1, "invalid bounding box");

        Self::default()
            .with_position(x1, y1)
            .with_size(x2 - x1 + 1, y2 - y1 + 1)
    }

    #[must_use]
    pub const fn with_position(mut self, x: u32, y: u32) -> Self {
        self.position = (x, y);
        self
    }

    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    #[must_use]
    pub const fn with_border(mut self, border: Border<P>) -> Self {
        self.border = Some(border);
        self
    }

    #[must_use]
    pub const fn with_fill(mut self, fill: P) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub const fn with_overlay_mode(mut self, mode: OverlayMode) -> Self {
        self.overlay = Some(mode);
        self
    }
}

fn fill_region<P: Pixel>(
    image: &mut Image<P>,
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
    color: P,
    overlay: OverlayMode,
) {
    let x1 = x1.max(0);
    let y1 = y1.max(0);
    let x2 = x2.min(i64::from(image.width()) - 1);
    let y2 = y2.min(i64::from(image.height()) - 1);

    for y in y1..=y2 {
        for x in x1..=x2 {
            let current = *image.pixel(x as u32, y as u32);
            image.set_pixel(x as u32, y as u32, current.overlay(color, overlay));
        }
    }
}

impl<P: Pixel> Draw<P> for Rectangle<P> {
    fn draw(&self, image: &mut Image<P>) {
        assert!(
            self.fill.is_some() || self.border.is_some(),
            "must provide at least one of fill or border"
        );

        let (x1, y1) = (i64::from(self.position.0), i64::from(self.position.1));
        let (w, h) = (i64::from(self.size.0), i64::from(self.size.1));
        let (x2, y2) = (x1 + w - 1, y1 + h - 1);
        let overlay = self.overlay.unwrap_or_else(|| image.overlay_mode());

        if let Some(fill) = self.fill {
            fill_region(image, x1, y1, x2, y2, fill, overlay);
        }

        if let Some(border) = &self.border {
            let (inner, outer) = border.widths();
            let (inner, outer) = (i64::from(inner), i64::from(outer));

            // Top, bottom, then the left/right strips between them
            fill_region(
                image,
                x1 - outer,
                y1 - outer,
                x2 + outer,
                y1 + inner - 1,
                border.color,
                overlay,
            );
            fill_region(
                image,
                x1 - outer,
                y2 - inner + 1,
                x2 + outer,
                y2 + outer,
                border.color,
                overlay,
            );
            fill_region(
                image,
                x1 - outer,
                y1 + inner,
                x1 + inner - 1,
                y2 - inner,
                border.color,
                overlay,
            );
            fill_region(
                image,
                x2 - inner + 1,
                y1 + inner,
                x2 + outer,
                y2 - inner,
                border.color,
                overlay,
            );
        }
    }
}

/// An axis-aligned ellipse, optionally filled and/or bordered.
#[derive(Clone, Debug, Default)]
pub struct Ellipse<P: Pixel> {
    /// The center of the ellipse.
    pub position: (u32, u32),
    /// The horizontal and vertical radii.
    pub radii: (u32, u32),
    /// The border of the ellipse, if any.
    pub border: Option<Border<P>>,
    /// The fill color of the ellipse, if any.
    pub fill: Option<P>,
    /// The overlay mode to composite with, defaulting to the image's.
    pub overlay: Option<OverlayMode>,
}

impl<P: Pixel> Ellipse<P> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an ellipse inscribed in the given bounding box.
    ///
    /// # Panics
    /// * The second point lies above or to the left of the first.
    #[must_use]
    pub fn from_bounding_box(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        assert!(x2 >= x1 && y2 >= y1, "invalid bounding box");

        Self::default()
            .with_position((x1 + x2) / 2, (y1 + y2) / 2)
            .with_radii((x2 - x1) / 2, (y2 - y1) / 2)
    }

    /// Creates a circle with the given center and radius.
    #[must_use]
    pub fn circle(x: u32, y: u32, radius: u32) -> Self {
        Self::default()
            .with_position(x, y)
            .with_radii(radius, radius)
    }

    #[must_use]
    pub const fn with_position(mut self, x: u32, y: u32) -> Self {
        self.position = (x, y);
        self
    }

    #[must_use]
    pub const fn with_radii(mut self, horizontal: u32, vertical: u32) -> Self {
        self.radii = (horizontal, vertical);
        self
    }

    #[must_use]
    pub const fn with_border(mut self, border: Border<P>) -> Self {
        self.border = Some(border);
        self
    }

    #[must_use]
    pub const fn with_fill(mut self, fill: P) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub const fn with_overlay_mode(mut self, mode: OverlayMode) -> Self {
        self.overlay = Some(mode);
        self
    }

    /// Rasterizes the ellipse with the given radii by scanning its bounding
    /// box and testing the standard ellipse inequality.
    fn rasterize<P2: Pixel>(
        image: &mut Image<P2>,
        center: (u32, u32),
        radii: (f64, f64),
        inner: Option<(f64, f64)>,
        color: P2,
        overlay: OverlayMode,
    ) {
        let (cx, cy) = (i64::from(center.0), i64::from(center.1));
        let (a, b) = radii;
        if a <= 0.0 || b <= 0.0 {
            return;
        }

        let x1 = (cx - a.ceil() as i64).max(0);
        let x2 = (cx + a.ceil() as i64).min(i64::from(image.width()) - 1);
        let y1 = (cy - b.ceil() as i64).max(0);
        let y2 = (cy + b.ceil() as i64).min(i64::from(image.height()) - 1);

        for y in y1..=y2 {
            let dy = (y - cy) as f64;
            for x in x1..=x2 {
                let dx = (x - cx) as f64;

                let outside = (dx / a).powi(2) + (dy / b).powi(2) > 1.0;
                let in_hole = inner.map_or(false, |(ia, ib)| {
                    ia > 0.0 && ib > 0.0 && (dx / ia).powi(2) + (dy / ib).powi(2) <= 1.0
                });

                if !outside && !in_hole {
                    let current = *image.pixel(x as u32, y as u32);
                    image.set_pixel(x as u32, y as u32, current.overlay(color, overlay));
                }
            }
        }
    }
}

impl<P: Pixel> Draw<P> for Ellipse<P> {
    fn draw(&self, image: &mut Image<P>) {
        assert!(
            self.fill.is_some() || self.border.is_some(),
            "must provide at least one of fill or border"
        );

        let (a, b) = (f64::from(self.radii.0), f64::from(self.radii.1));
        let overlay = self.overlay.unwrap_or_else(|| image.overlay_mode());

        if let Some(fill) = self.fill {
            Self::rasterize(image, self.position, (a, b), None, fill, overlay);
        }

        if let Some(border) = &self.border {
            let (inner, outer) = border.widths();

            Self::rasterize(
                image,
                self.position,
                (a + f64::from(outer), b + f64::from(outer)),
                Some((a - f64::from(inner), b - f64::from(inner))),
                border.color,
                overlay,
            );
        }
    }
}

/// A straight line segment between two points.
#[derive(Clone, Debug)]
pub struct Line<P: Pixel> {
    /// The starting point of the line.
    pub start: (u32, u32),
    /// The ending point of the line.
    pub end: (u32, u32),
    /// The color of the line.
    pub color: P,
    /// The thickness of the line, in pixels.
    pub thickness: u32,
    /// The overlay mode to composite with, defaulting to the image's.
    pub overlay: Option<OverlayMode>,
}

impl<P: Pixel> Default for Line<P> {
    fn default() -> Self {
        Self {
            start: (0, 0),
            end: (0, 0),
            color: P::default(),
            thickness: 1,
            overlay: None,
        }
    }
}

impl<P: Pixel> Line<P> {
    #[must_use]
    pub fn new(start: (u32, u32), end: (u32, u32), color: P) -> Self {
        Self {
            start,
            end,
            color,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_color(mut self, color: P) -> Self {
        self.color = color;
        self
    }

    /// # Panics
    /// * The thickness is zero.
    #[must_use]
    pub fn with_thickness(mut self, thickness: u32) -> Self {
        assert_ne!(thickness, 0, "line thickness cannot be 0");
        self.thickness = thickness;
        self
    }

    #[must_use]
    pub const fn with_overlay_mode(mut self, mode: OverlayMode) -> Self {
        self.overlay = Some(mode);
        self
    }
}

impl<P: Pixel> Draw<P> for Line<P> {
    fn draw(&self, image: &mut Image<P>) {
        let overlay = self.overlay.unwrap_or_else(|| image.overlay_mode());

        // Bresenham. Thicker lines stamp a square brush at each step.
        let (mut x, mut y) = (i64::from(self.start.0), i64::from(self.start.1));
        let (x2, y2) = (i64::from(self.end.0), i64::from(self.end.1));

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        let reach = i64::from(self.thickness - 1);
        let (lo, hi) = (-(reach / 2), reach - reach / 2);

        loop {
            for by in lo..=hi {
                for bx in lo..=hi {
                    let (px, py) = (x + bx, y + by);
                    if px >= 0 && py >= 0 {
                        let (px, py) = (px as u32, py as u32);
                        if let Some(&current) = image.get_pixel(px, py) {
                            image.set_pixel(px, py, current.overlay(self.color, overlay));
                        }
                    }
                }
            }

            if x == x2 && y == y2 {
                break;
            }

            let e2 = err * 2;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgba;

    #[test]
    fn rectangle_fill_and_border() {
        let mut image = Image::new(10, 10, Rgba::transparent());
        image.draw(
            &Rectangle::from_bounding_box(2, 2, 7, 7)
                .with_fill(Rgba::white())
                .with_border(Border::new(Rgba::black(), 1).with_position(BorderPosition::Inset)),
        );

        assert_eq!(*image.pixel(0, 0), Rgba::transparent());
        assert_eq!(*image.pixel(2, 2), Rgba::black());
        assert_eq!(*image.pixel(4, 4), Rgba::white());
        assert_eq!(*image.pixel(7, 7), Rgba::black());
    }

    #[test]
    fn line_endpoints() {
        let mut image = Image::new(8, 8, Rgba::transparent());
        image.draw(&Line::new((0, 0), (7, 7), Rgba::white()));

        assert_eq!(*image.pixel(0, 0), Rgba::white());
        assert_eq!(*image.pixel(3, 3), Rgba::white());
        assert_eq!(*image.pixel(7, 7), Rgba::white());
        assert_eq!(*image.pixel(0, 7), Rgba::transparent());
    }

    #[test]
    fn circle_contains_center() {
        let mut image = Image::new(9, 9, Rgba::transparent());
        image.draw(&Ellipse::circle(4, 4, 3).with_fill(Rgba::white()));

        assert_eq!(*image.pixel(4, 4), Rgba::white());
        assert_eq!(*image.pixel(4, 1), Rgba::white());
        assert_eq!(*image.pixel(0, 0), Rgba::transparent());
    }
}
