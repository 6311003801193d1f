use crate::encodings::{ColorType, PixelData};
use crate::error::Result;

/// The method used to composite a pixel on top of another pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlayMode {
    /// Replace the destination pixel outright, alpha included.
    Replace,
    /// Blend the source pixel over the destination pixel using standard
    /// source-over alpha compositing. This is the default behavior.
    #[default]
    Merge,
}

/// Represents any type of pixel in an image.
///
/// All compositing, filtering and codec plumbing funnels through [`Rgba`],
/// the common truecolor domain, via [`Pixel::as_rgba`] and [`Pixel::from_rgba`].
pub trait Pixel: Copy + Clone + Default + PartialEq {
    /// The native color type of this pixel, used when encoding images.
    const COLOR_TYPE: ColorType;

    /// Returns the alpha, or opacity level of the pixel.
    ///
    /// This is a value between 0 and 255.
    /// 0 is completely transparent, and 255 is completely opaque.
    fn alpha(&self) -> u8;

    /// Returns the inverted value of this pixel.
    ///
    /// This does not invert the alpha value: for translucent pixels the
    /// expected behavior is to invert only the visible color, and fully opaque
    /// pixels turning fully transparent is almost never what is wanted.
    fn inverted(&self) -> Self;

    /// The perceived brightness of the pixel, weighted per Rec. 601.
    fn luminance(&self) -> u8 {
        let Rgba { r, g, b, .. } = self.as_rgba();

        ((f32::from(r) * 0.299) + (f32::from(g) * 0.587) + (f32::from(b) * 0.114)) as u8
    }

    /// Expands the pixel into the common RGBA color domain.
    fn as_rgba(&self) -> Rgba;

    /// Creates a pixel of this type from an RGBA value, discarding any
    /// channels this pixel type cannot represent.
    fn from_rgba(rgba: Rgba) -> Self;

    /// Creates a pixel of this type from raw decoded channel data.
    ///
    /// # Errors
    /// * The color type of the data cannot be represented by this pixel type.
    fn from_pixel_data(data: PixelData) -> Result<Self>;

    /// Returns the raw channel data of this pixel, used when encoding.
    fn as_pixel_data(&self) -> PixelData;

    /// Composites `other` on top of this pixel with the given overlay mode.
    #[must_use]
    fn overlay(self, other: Self, mode: OverlayMode) -> Self {
        match mode {
            OverlayMode::Replace => other,
            OverlayMode::Merge => Self::from_rgba(self.as_rgba().merge(other.as_rgba())),
        }
    }
}

/// Represents an L, or luminance pixel that is stored as only one single
/// number representing how bright, or intense, the pixel is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct L(
    /// The luminance value of the pixel, between 0 and 255.
    pub u8,
);

impl L {
    /// Creates a new L pixel with the given luminance value.
    #[must_use]
    pub const fn new(l: u8) -> Self {
        Self(l)
    }

    /// Returns the luminance value of the pixel.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Pixel for L {
    const COLOR_TYPE: ColorType = ColorType::L;

    fn alpha(&self) -> u8 {
        255
    }

    fn inverted(&self) -> Self {
        Self(255 - self.0)
    }

    fn luminance(&self) -> u8 {
        self.0
    }

    fn as_rgba(&self) -> Rgba {
        Rgba::new(self.0, self.0, self.0, 255)
    }

    fn from_rgba(rgba: Rgba) -> Self {
        Self(rgba.luminance())
    }

    fn from_pixel_data(data: PixelData) -> Result<Self> {
        match data {
            PixelData::L(l) | PixelData::La(l, _) => Ok(Self(l)),
            PixelData::Rgb(r, g, b) => Ok(Self::from_rgba(Rgba::new(r, g, b, 255))),
            PixelData::Rgba(r, g, b, a) => Ok(Self::from_rgba(Rgba::new(r, g, b, a))),
        }
    }

    fn as_pixel_data(&self) -> PixelData {
        PixelData::L(self.0)
    }
}

/// Represents an RGB pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// The red component of the pixel.
    pub r: u8,
    /// The green component of the pixel.
    pub g: u8,
    /// The blue component of the pixel.
    pub b: u8,
}

impl Rgb {
    /// Creates a new RGB pixel.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a completely black pixel.
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Creates a completely white pixel.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }
}

impl Pixel for Rgb {
    const COLOR_TYPE: ColorType = ColorType::Rgb;

    fn alpha(&self) -> u8 {
        255
    }

    fn inverted(&self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    fn as_rgba(&self) -> Rgba {
        Rgba::new(self.r, self.g, self.b, 255)
    }

    fn from_rgba(rgba: Rgba) -> Self {
        Self::new(rgba.r, rgba.g, rgba.b)
    }

    fn from_pixel_data(data: PixelData) -> Result<Self> {
        match data {
            PixelData::L(l) | PixelData::La(l, _) => Ok(Self::new(l, l, l)),
            PixelData::Rgb(r, g, b) | PixelData::Rgba(r, g, b, _) => Ok(Self::new(r, g, b)),
        }
    }

    fn as_pixel_data(&self) -> PixelData {
        PixelData::Rgb(self.r, self.g, self.b)
    }
}

/// Represents an RGBA pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// The red component of the pixel.
    pub r: u8,
    /// The green component of the pixel.
    pub g: u8,
    /// The blue component of the pixel.
    pub b: u8,
    /// The alpha component of the pixel. 0 is transparent, 255 is opaque.
    pub a: u8,
}

impl Rgba {
    /// Creates a new RGBA pixel.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque pixel from an RGB pixel.
    #[must_use]
    pub const fn from_rgb(Rgb { r, g, b }: Rgb) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Creates a completely transparent pixel.
    #[must_use]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Creates an opaque black pixel.
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Creates an opaque white pixel.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Source-over composites `other` on top of this pixel.
    ///
    /// Channels are straight (not premultiplied); the merged color is the
    /// alpha-weighted average of the two colors.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let fg_a = f32::from(other.a) / 255.0;
        let bg_a = f32::from(self.a) / 255.0;
        let out_a = fg_a + bg_a * (1.0 - fg_a);

        if out_a <= f32::EPSILON {
            return Self::transparent();
        }

        let blend = |fg: u8, bg: u8| {
            let fg = f32::from(fg) * fg_a;
            let bg = f32::from(bg) * bg_a * (1.0 - fg_a);

            ((fg + bg) / out_a).round() as u8
        };

        Self::new(
            blend(other.r, self.r),
            blend(other.g, self.g),
            blend(other.b, self.b),
            (out_a * 255.0).round() as u8,
        )
    }

    /// Returns this pixel with the given alpha value.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }
}

impl Pixel for Rgba {
    const COLOR_TYPE: ColorType = ColorType::Rgba;

    fn alpha(&self) -> u8 {
        self.a
    }

    fn inverted(&self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b, self.a)
    }

    fn as_rgba(&self) -> Rgba {
        *self
    }

    fn from_rgba(rgba: Rgba) -> Self {
        rgba
    }

    fn from_pixel_data(data: PixelData) -> Result<Self> {
        match data {
            PixelData::L(l) => Ok(Self::new(l, l, l, 255)),
            PixelData::La(l, a) => Ok(Self::new(l, l, l, a)),
            PixelData::Rgb(r, g, b) => Ok(Self::new(r, g, b, 255)),
            PixelData::Rgba(r, g, b, a) => Ok(Self::new(r, g, b, a)),
        }
    }

    fn as_pixel_data(&self) -> PixelData {
        PixelData::Rgba(self.r, self.g, self.b, self.a)
    }
}

impl From<L> for Rgb {
    fn from(L(l): L) -> Self {
        Self::new(l, l, l)
    }
}

impl From<Rgb> for L {
    fn from(rgb: Rgb) -> Self {
        Self(rgb.luminance())
    }
}

impl From<Rgba> for Rgb {
    fn from(Rgba { r, g, b, .. }: Rgba) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgba> for L {
    fn from(rgba: Rgba) -> Self {
        Self(rgba.luminance())
    }
}

impl From<L> for Rgba {
    fn from(L(l): L) -> Self {
        Self::new(l, l, l, 255)
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_opaque_replaces_color() {
        let merged = Rgba::black().merge(Rgba::new(10, 20, 30, 255));
        assert_eq!(merged, Rgba::new(10, 20, 30, 255));
    }

    #[test]
    fn merge_transparent_keeps_background() {
        let merged = Rgba::new(10, 20, 30, 255).merge(Rgba::transparent());
        assert_eq!(merged, Rgba::new(10, 20, 30, 255));
    }

    #[test]
    fn merge_half_alpha_averages() {
        let merged = Rgba::black().merge(Rgba::new(255, 255, 255, 128));
        // 128/255 coverage over opaque black
        assert_eq!(merged.a, 255);
        assert!(merged.r > 125 && merged.r < 131);
    }

    #[test]
    fn inverted_preserves_alpha() {
        let inverted = Rgba::new(0, 128, 255, 77).inverted();
        assert_eq!(inverted, Rgba::new(255, 127, 0, 77));
    }
}
