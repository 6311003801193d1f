//! An interfacing layer between fast_image_resize and this crate.

use crate::{Error, Image, Pixel, Result};
use fast_image_resize::{
    FilterType as ResizeFilterType, Image as ResizeImage, MulDiv, PixelType, ResizeAlg, Resizer,
};
use std::num::NonZeroU32;

/// A filtering algorithm that is used to resize an image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterType {
    /// A simple nearest neighbor algorithm. Although the fastest, this gives the lowest quality
    /// resizings.
    Nearest,
    /// A box filter algorithm. Equivalent to the [`Nearest`][Self::Nearest] filter if you are
    /// upscaling.
    Box,
    /// A bilinear filter. Calculates output pixel value using linear interpolation on all pixels.
    Bilinear,
    /// While having similar performance as the [`Bilinear`][Self::Bilinear] filter, this produces
    /// a sharper and usually considered better quality image than the bilinear filter, but
    /// **only** when downscaling. This may give worse results than bilinear when upscaling.
    Hamming,
    /// A Catmull-Rom bicubic filter, which is the most common bicubic filtering algorithm. Just
    /// like all cubic filters, it uses cubic interpolation on all pixels to calculate output
    /// pixels. This is the default.
    #[default]
    Bicubic,
    /// A Mitchell-Netravali bicubic filter. Just like all cubic filters, it uses cubic
    /// interpolation on all pixels to calculate output pixels.
    Mitchell,
    /// A Lanczos filter with a window of 3. Calculates output pixel value using a high-quality
    /// Lanczos filter on all pixels.
    Lanczos3,
}

impl From<FilterType> for ResizeAlg {
    fn from(f: FilterType) -> Self {
        type F = ResizeFilterType;

        Self::Convolution(match f {
            FilterType::Nearest => return Self::Nearest,
            FilterType::Box => F::Box,
            FilterType::Bilinear => F::Bilinear,
            FilterType::Hamming => F::Hamming,
            FilterType::Bicubic => F::CatmullRom,
            FilterType::Mitchell => F::Mitchell,
            FilterType::Lanczos3 => F::Lanczos3,
        })
    }
}

/// Resamples the image to the exact target dimensions.
///
/// The image is expanded into RGBA, alpha-premultiplied around the
/// convolution, and converted back into its native pixel type.
pub(crate) fn resample<P: Pixel>(
    image: &Image<P>,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Image<P>> {
    if width == image.width() && height == image.height() {
        return Ok(image.clone());
    }

    let src_width = NonZeroU32::new(image.width()).ok_or(Error::EmptyImageError)?;
    let src_height = NonZeroU32::new(image.height()).ok_or(Error::EmptyImageError)?;
    let dst_width = NonZeroU32::new(width).ok_or(Error::EmptyImageError)?;
    let dst_height = NonZeroU32::new(height).ok_or(Error::EmptyImageError)?;

    let mut bytes = Vec::with_capacity(image.data().len() * 4);
    for pixel in image.data() {
        let rgba = pixel.as_rgba();
        bytes.extend_from_slice(&[rgba.r, rgba.g, rgba.b, rgba.a]);
    }

    let mut src = ResizeImage::from_vec_u8(src_width, src_height, bytes, PixelType::U8x4)?;
    let mut dst = ResizeImage::new(dst_width, dst_height, PixelType::U8x4);

    let mul_div = MulDiv::default();
    mul_div.multiply_alpha_inplace(&mut src.view_mut())?;

    let mut resizer = Resizer::new(filter.into());
    resizer.resize(&src.view(), &mut dst.view_mut())?;

    mul_div.divide_alpha_inplace(&mut dst.view_mut())?;

    let data = dst
        .buffer()
        .chunks_exact(4)
        .map(|chunk| {
            P::from_rgba(crate::Rgba::new(chunk[0], chunk[1], chunk[2], chunk[3]))
        })
        .collect();

    Ok(image.with_data(width, height, data))
}
