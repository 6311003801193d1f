use super::PixelData;
use crate::encode::{Decoder, Encoder};
use crate::pixel::OverlayMode;
use crate::{Error, Image, ImageFormat, Pixel, Result};

use std::io::{Read, Write};
use std::marker::PhantomData;

/// A GIF encoder interface over [`gif::Encoder`].
///
/// Color quantization down to the GIF palette is performed by the `gif` crate.
pub struct GifEncoder<P, W> {
    /// The quantization speed, between 1 (best quality) and 30 (fastest).
    pub speed: i32,
    _marker: PhantomData<(P, W)>,
}

impl<P, W> Default for GifEncoder<P, W> {
    fn default() -> Self {
        Self {
            speed: 10,
            _marker: PhantomData,
        }
    }
}

impl<P, W> GifEncoder<P, W> {
    /// Creates a new encoder with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantization speed, between 1 (best quality) and 30 (fastest).
    #[must_use]
    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }
}

impl<P: Pixel, W: Write> Encoder<P, W> for GifEncoder<P, W> {
    fn encode(&mut self, image: &Image<P>, dest: W) -> Result<()> {
        if image.is_empty() {
            return Err(Error::EmptyImageError);
        }

        let width = u16::try_from(image.width())
            .map_err(|_| Error::EncodingError("image is too wide for GIF".to_string()))?;
        let height = u16::try_from(image.height())
            .map_err(|_| Error::EncodingError("image is too tall for GIF".to_string()))?;

        let mut data = Vec::with_capacity(image.data().len() * 4);
        for pixel in image.data() {
            let rgba = pixel.as_rgba();
            data.extend_from_slice(&[rgba.r, rgba.g, rgba.b, rgba.a]);
        }

        let mut encoder = gif::Encoder::new(dest, width, height, &[])?;
        let frame = gif::Frame::from_rgba_speed(width, height, &mut data, self.speed);
        encoder.write_frame(&frame)?;

        Ok(())
    }
}

/// A GIF decoder interface over [`gif::Decoder`].
///
/// Animated GIFs decode to their first frame, composited onto a transparent
/// canvas the size of the logical screen.
pub struct GifDecoder<P, R> {
    _marker: PhantomData<(P, R)>,
}

impl<P, R> Default for GifDecoder<P, R> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<P, R> GifDecoder<P, R> {
    /// Creates a new decoder with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Pixel, R: Read> Decoder<P, R> for GifDecoder<P, R> {
    fn decode(&mut self, stream: R) -> Result<Image<P>> {
        let mut options = gif::DecodeOptions::new();
        options.set_color_output(gif::ColorOutput::RGBA);

        let mut decoder = options.read_info(stream)?;
        let (width, height) = (u32::from(decoder.width()), u32::from(decoder.height()));

        let frame = decoder
            .read_next_frame()?
            .ok_or_else(|| Error::DecodingError("GIF contains no frames".to_string()))?;

        // Frames may cover only part of the logical screen
        let mut canvas = vec![PixelData::Rgba(0, 0, 0, 0); (width * height) as usize];
        let (left, top) = (u32::from(frame.left), u32::from(frame.top));

        for (i, chunk) in frame.buffer.chunks_exact(4).enumerate() {
            let x = left + i as u32 % u32::from(frame.width);
            let y = top + i as u32 / u32::from(frame.width);

            if x < width && y < height {
                canvas[(y * width + x) as usize] =
                    PixelData::Rgba(chunk[0], chunk[1], chunk[2], chunk[3]);
            }
        }

        let data = canvas
            .into_iter()
            .map(P::from_pixel_data)
            .collect::<Result<Vec<_>>>()?;

        Ok(Image {
            width,
            height,
            data,
            format: ImageFormat::Gif,
            overlay: OverlayMode::default(),
        })
    }
}
