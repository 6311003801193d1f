//! Filter effects that transform whole images.
//!
//! All filters run through the RGBA domain, so they are generic over the pixel
//! type. Alpha is carried through untouched unless documented otherwise.

use crate::error::{Error, Result};
use crate::pixel::{Pixel, Rgba};
use crate::Image;

/// A filter effect that can be applied to an image.
pub trait Filter<P: Pixel> {
    /// Applies this filter to the given image.
    fn apply(&self, image: Image<P>) -> Image<P>;
}

impl<P: Pixel> Image<P> {
    /// Returns the image with the given filter applied.
    #[must_use]
    pub fn filtered(self, filter: &impl Filter<P>) -> Self {
        filter.apply(self)
    }

    /// Applies the given filter to the image in place.
    pub fn filter_in_place(&mut self, filter: &impl Filter<P>) {
        let image = std::mem::replace(self, Self::new(1, 1, P::default()));
        *self = filter.apply(image);
    }
}

/// Validates a percentage level in `[-100, 100]` and scales it to `[-1, 1]`.
fn parse_level(level: f64) -> Result<f64> {
    if !(-100.0..=100.0).contains(&level) {
        return Err(Error::InvalidLevel {
            level,
            min: -100.0,
            max: 100.0,
        });
    }

    Ok(level / 100.0)
}

/// Inverts every pixel's color channels, leaving alpha untouched.
#[derive(Copy, Clone, Debug, Default)]
pub struct Invert;

impl<P: Pixel> Filter<P> for Invert {
    fn apply(&self, image: Image<P>) -> Image<P> {
        image.map_pixels(|pixel| pixel.inverted())
    }
}

/// Converts the image to grayscale using Rec. 601 luminance weights.
#[derive(Copy, Clone, Debug, Default)]
pub struct Desaturate;

impl<P: Pixel> Filter<P> for Desaturate {
    fn apply(&self, image: Image<P>) -> Image<P> {
        image.map_pixels(|pixel| {
            let luma = pixel.luminance();
            P::from_rgba(Rgba::new(luma, luma, luma, pixel.alpha()))
        })
    }
}

/// Brightens or darkens the image.
///
/// The factor lies in `[-1, 1]`; each color channel is shifted by
/// `factor * 255` and clamped.
#[derive(Copy, Clone, Debug, Default)]
pub struct Brightness {
    pub factor: f64,
}

impl Brightness {
    #[must_use]
    pub const fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// Creates the filter from a percentage level in `[-100, 100]`.
    ///
    /// # Errors
    /// * The level is out of range.
    pub fn from_level(level: f64) -> Result<Self> {
        parse_level(level).map(Self::new)
    }
}

impl<P: Pixel> Filter<P> for Brightness {
    fn apply(&self, image: Image<P>) -> Image<P> {
        let shift = self.factor * 255.0;
        let adjust = move |c: u8| (f64::from(c) + shift).clamp(0.0, 255.0).round() as u8;

        image.map_pixels(|pixel| {
            let rgba = pixel.as_rgba();
            P::from_rgba(Rgba::new(
                adjust(rgba.r),
                adjust(rgba.g),
                adjust(rgba.b),
                rgba.a,
            ))
        })
    }
}

/// Increases or decreases the contrast of the image.
///
/// The factor lies in `[-1, 1]`; positive values increase contrast. Channels
/// are scaled around the midpoint by `(1 + factor)^2`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Contrast {
    pub factor: f64,
}

impl Contrast {
    #[must_use]
    pub const fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// Creates the filter from a percentage level in `[-100, 100]`.
    ///
    /// # Errors
    /// * The level is out of range.
    pub fn from_level(level: f64) -> Result<Self> {
        parse_level(level).map(Self::new)
    }
}

impl<P: Pixel> Filter<P> for Contrast {
    fn apply(&self, image: Image<P>) -> Image<P> {
        let scale = (1.0 + self.factor).powi(2);
        let adjust = move |c: u8| {
            (((f64::from(c) / 255.0 - 0.5) * scale + 0.5).clamp(0.0, 1.0) * 255.0).round() as u8
        };

        image.map_pixels(|pixel| {
            let rgba = pixel.as_rgba();
            P::from_rgba(Rgba::new(
                adjust(rgba.r),
                adjust(rgba.g),
                adjust(rgba.b),
                rgba.a,
            ))
        })
    }
}

/// Shifts each color channel by a signed amount, clamped to `[0, 255]`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Colorize {
    pub r: i16,
    pub g: i16,
    pub b: i16,
}

impl Colorize {
    #[must_use]
    pub const fn new(r: i16, g: i16, b: i16) -> Self {
        Self { r, g, b }
    }
}

impl<P: Pixel> Filter<P> for Colorize {
    fn apply(&self, image: Image<P>) -> Image<P> {
        let adjust = |c: u8, shift: i16| (i16::from(c) + shift).clamp(0, 255) as u8;

        image.map_pixels(|pixel| {
            let rgba = pixel.as_rgba();
            P::from_rgba(Rgba::new(
                adjust(rgba.r, self.r),
                adjust(rgba.g, self.g),
                adjust(rgba.b, self.b),
                rgba.a,
            ))
        })
    }
}

/// A 3x3 convolution over the color channels.
///
/// Sampling at the image edges is clamped to the image bounds, and each output
/// pixel keeps the alpha of its source pixel.
#[derive(Copy, Clone, Debug)]
pub struct Convolution {
    /// The 3x3 kernel, in row-major order.
    pub kernel: [f64; 9],
    /// The value the weighted sum is divided by. A zero divisor is treated
    /// as 1.
    pub divisor: f64,
    /// The value added to each channel after division.
    pub offset: f64,
}

impl Convolution {
    #[must_use]
    pub const fn new(kernel: [f64; 9]) -> Self {
        Self {
            kernel,
            divisor: 1.0,
            offset: 0.0,
        }
    }

    #[must_use]
    pub const fn with_divisor(mut self, divisor: f64) -> Self {
        self.divisor = divisor;
        self
    }

    #[must_use]
    pub const fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}

impl<P: Pixel> Filter<P> for Convolution {
    fn apply(&self, image: Image<P>) -> Image<P> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return image;
        }

        let source = image.data().iter().map(Pixel::as_rgba).collect::<Vec<_>>();
        let divisor = if self.divisor == 0.0 { 1.0 } else { self.divisor };

        image.map_pixels_with_coords(|x, y, pixel| {
            let mut acc = [0.0_f64; 3];

            for (i, weight) in self.kernel.iter().enumerate() {
                let sx = (i64::from(x) + i as i64 % 3 - 1).clamp(0, i64::from(width) - 1);
                let sy = (i64::from(y) + i as i64 / 3 - 1).clamp(0, i64::from(height) - 1);
                let sample = source[(sy as u32 * width + sx as u32) as usize];

                acc[0] += f64::from(sample.r) * weight;
                acc[1] += f64::from(sample.g) * weight;
                acc[2] += f64::from(sample.b) * weight;
            }

            let channel = |sum: f64| (sum / divisor + self.offset).clamp(0.0, 255.0).round() as u8;

            P::from_rgba(Rgba::new(
                channel(acc[0]),
                channel(acc[1]),
                channel(acc[2]),
                pixel.alpha(),
            ))
        })
    }
}

/// Highlights edges against a mid-gray background.
#[derive(Copy, Clone, Debug, Default)]
pub struct EdgeDetect;

impl<P: Pixel> Filter<P> for EdgeDetect {
    fn apply(&self, image: Image<P>) -> Image<P> {
        Convolution::new([-1.0, 0.0, -1.0, 0.0, 4.0, 0.0, -1.0, 0.0, -1.0])
            .with_offset(127.0)
            .apply(image)
    }
}

/// Gives the image an embossed, chiseled look.
#[derive(Copy, Clone, Debug, Default)]
pub struct Emboss;

impl<P: Pixel> Filter<P> for Emboss {
    fn apply(&self, image: Image<P>) -> Image<P> {
        Convolution::new([1.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.5])
            .with_offset(127.0)
            .apply(image)
    }
}

/// Sharpens the image by removing the local mean, producing a sketchy look.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sketch;

impl<P: Pixel> Filter<P> for Sketch {
    fn apply(&self, image: Image<P>) -> Image<P> {
        Convolution::new([-1.0, -1.0, -1.0, -1.0, 9.0, -1.0, -1.0, -1.0, -1.0]).apply(image)
    }
}

/// Smooths the image by averaging each pixel with its neighbors.
///
/// The weight controls how strongly the center pixel resists its neighbors;
/// higher weights smooth less.
#[derive(Copy, Clone, Debug)]
pub struct Smooth {
    pub weight: f64,
}

impl Default for Smooth {
    fn default() -> Self {
        Self { weight: 4.0 }
    }
}

impl Smooth {
    #[must_use]
    pub const fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl<P: Pixel> Filter<P> for Smooth {
    fn apply(&self, image: Image<P>) -> Image<P> {
        Convolution::new([1.0, 1.0, 1.0, 1.0, self.weight, 1.0, 1.0, 1.0, 1.0])
            .with_divisor(self.weight + 8.0)
            .apply(image)
    }
}

/// Applies one or more passes of a 3x3 gaussian blur.
#[derive(Copy, Clone, Debug)]
pub struct Blur {
    pub passes: u32,
}

impl Default for Blur {
    fn default() -> Self {
        Self { passes: 1 }
    }
}

impl Blur {
    #[must_use]
    pub const fn new(passes: u32) -> Self {
        Self { passes }
    }
}

impl<P: Pixel> Filter<P> for Blur {
    fn apply(&self, mut image: Image<P>) -> Image<P> {
        let kernel = Convolution::new([1.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0])
            .with_divisor(16.0);

        for _ in 0..self.passes {
            image = kernel.apply(image);
        }

        image
    }
}

/// Replaces square blocks of pixels with a single color.
#[derive(Copy, Clone, Debug)]
pub struct Pixelate {
    /// The side length of each block, in pixels.
    pub block_size: u32,
    /// Whether blocks take the mean color of their pixels instead of the color
    /// of their top-left pixel.
    pub average: bool,
}

impl Default for Pixelate {
    fn default() -> Self {
        Self {
            block_size: 2,
            average: false,
        }
    }
}

impl Pixelate {
    #[must_use]
    pub const fn new(block_size: u32) -> Self {
        Self {
            block_size,
            average: false,
        }
    }

    #[must_use]
    pub const fn with_average(mut self, average: bool) -> Self {
        self.average = average;
        self
    }
}

impl<P: Pixel> Filter<P> for Pixelate {
    fn apply(&self, mut image: Image<P>) -> Image<P> {
        let size = self.block_size;
        if size <= 1 || image.is_empty() {
            return image;
        }

        let (width, height) = image.dimensions();

        for by in (0..height).step_by(size as usize) {
            for bx in (0..width).step_by(size as usize) {
                let block_width = size.min(width - bx);
                let block_height = size.min(height - by);

                let color = if self.average {
                    let mut acc = [0_u64; 4];
                    for y in by..by + block_height {
                        for x in bx..bx + block_width {
                            let rgba = image.pixel(x, y).as_rgba();
                            acc[0] += u64::from(rgba.r);
                            acc[1] += u64::from(rgba.g);
                            acc[2] += u64::from(rgba.b);
                            acc[3] += u64::from(rgba.a);
                        }
                    }

                    let count = u64::from(block_width) * u64::from(block_height);
                    P::from_rgba(Rgba::new(
                        (acc[0] / count) as u8,
                        (acc[1] / count) as u8,
                        (acc[2] / count) as u8,
                        (acc[3] / count) as u8,
                    ))
                } else {
                    *image.pixel(bx, by)
                };

                for y in by..by + block_height {
                    for x in bx..bx + block_width {
                        image.set_pixel(x, y, color);
                    }
                }
            }
        }

        image
    }
}

/// Applies a classic sepia tone.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sepia;

impl<P: Pixel> Filter<P> for Sepia {
    fn apply(&self, image: Image<P>) -> Image<P> {
        image.map_pixels(|pixel| {
            let rgba = pixel.as_rgba();
            let (r, g, b) = (f64::from(rgba.r), f64::from(rgba.g), f64::from(rgba.b));

            let tone = |weighted: f64, norm: f64| (weighted / norm).clamp(0.0, 255.0).round() as u8;

            P::from_rgba(Rgba::new(
                tone(0.393 * r + 0.769 * g + 0.189 * b, 1.351),
                tone(0.349 * r + 0.686 * g + 0.168 * b, 1.203),
                tone(0.272 * r + 0.534 * g + 0.131 * b, 2.140),
                rgba.a,
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgba;

    #[test]
    fn brightness_shifts_and_clamps() {
        let image = Image::new(1, 1, Rgba::new(100, 200, 0, 255));
        let image = image.filtered(&Brightness::new(0.5));

        assert_eq!(*image.pixel(0, 0), Rgba::new(228, 255, 128, 255));
    }

    #[test]
    fn level_out_of_range() {
        assert!(Brightness::from_level(150.0).is_err());
        assert!(Contrast::from_level(-100.0).is_ok());
    }

    #[test]
    fn desaturate_is_gray() {
        let image = Image::new(1, 1, Rgba::new(255, 0, 0, 200));
        let image = image.filtered(&Desaturate);
        let pixel = *image.pixel(0, 0);

        assert_eq!(pixel.r, pixel.g);
        assert_eq!(pixel.g, pixel.b);
        assert_eq!(pixel.a, 200);
    }

    #[test]
    fn pixelate_top_left_sample() {
        let mut image = Image::new(4, 4, Rgba::black());
        image.set_pixel(0, 0, Rgba::white());

        let image = image.filtered(&Pixelate::new(2));
        assert_eq!(*image.pixel(1, 1), Rgba::white());
        assert_eq!(*image.pixel(2, 2), Rgba::black());
    }

    #[test]
    fn blur_preserves_flat_color() {
        let image = Image::new(5, 5, Rgba::new(90, 90, 90, 255));
        let image = image.filtered(&Blur::new(2));

        assert_eq!(*image.pixel(2, 2), Rgba::new(90, 90, 90, 255));
    }
}
