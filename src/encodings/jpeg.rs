use super::PixelData;
use crate::encode::{Decoder, Encoder};
use crate::pixel::OverlayMode;
use crate::{Error, Image, ImageFormat, Pixel, Result};

use std::io::{Read, Write};
use std::marker::PhantomData;

/// A JPEG encoder interface over [`jpeg_encoder::Encoder`].
pub struct JpegEncoder<P, W> {
    /// The quality to encode with, between 1 and 100.
    pub quality: u8,
    _marker: PhantomData<(P, W)>,
}

impl<P, W> Default for JpegEncoder<P, W> {
    fn default() -> Self {
        Self {
            quality: 90,
            _marker: PhantomData,
        }
    }
}

impl<P, W> JpegEncoder<P, W> {
    /// Creates a new encoder with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quality to encode with.
    #[must_use]
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }
}

impl<P: Pixel, W: Write> Encoder<P, W> for JpegEncoder<P, W> {
    fn encode(&mut self, image: &Image<P>, dest: W) -> Result<()> {
        if image.is_empty() {
            return Err(Error::EmptyImageError);
        }

        let width = u16::try_from(image.width())
            .map_err(|_| Error::EncodingError("image is too wide for JPEG".to_string()))?;
        let height = u16::try_from(image.height())
            .map_err(|_| Error::EncodingError("image is too tall for JPEG".to_string()))?;

        let encoder = jpeg_encoder::Encoder::new(dest, self.quality);

        // JPEG has no alpha; anything with color is flattened to RGB
        if P::COLOR_TYPE.channels() <= 2 {
            let data = image
                .data()
                .iter()
                .map(Pixel::luminance)
                .collect::<Vec<_>>();

            encoder.encode(&data, width, height, jpeg_encoder::ColorType::Luma)?;
        } else {
            let mut data = Vec::with_capacity(image.data().len() * 3);
            for pixel in image.data() {
                let rgba = pixel.as_rgba();
                data.extend_from_slice(&[rgba.r, rgba.g, rgba.b]);
            }

            encoder.encode(&data, width, height, jpeg_encoder::ColorType::Rgb)?;
        }

        Ok(())
    }
}

/// A JPEG decoder interface over [`jpeg_decoder::Decoder`].
pub struct JpegDecoder<P, R> {
    _marker: PhantomData<(P, R)>,
}

impl<P, R> Default for JpegDecoder<P, R> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<P, R> JpegDecoder<P, R> {
    /// Creates a new decoder with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Pixel, R: Read> Decoder<P, R> for JpegDecoder<P, R> {
    fn decode(&mut self, stream: R) -> Result<Image<P>> {
        let mut decoder = jpeg_decoder::Decoder::new(stream);
        let data = decoder.decode()?;
        let info = decoder
            .info()
            .ok_or_else(|| Error::DecodingError("missing JPEG frame info".to_string()))?;

        let bytes_per_pixel = info.pixel_format.pixel_bytes();
        let data = data
            .chunks_exact(bytes_per_pixel)
            .map(|chunk| {
                let data = match info.pixel_format {
                    jpeg_decoder::PixelFormat::L8 => PixelData::L(chunk[0]),
                    // Strip 16-bit luminance down to its high byte
                    jpeg_decoder::PixelFormat::L16 => PixelData::L(chunk[0]),
                    jpeg_decoder::PixelFormat::RGB24 => {
                        PixelData::Rgb(chunk[0], chunk[1], chunk[2])
                    }
                    jpeg_decoder::PixelFormat::CMYK32 => {
                        let c = f32::from(chunk[0]) / 255.0;
                        let m = f32::from(chunk[1]) / 255.0;
                        let y = f32::from(chunk[2]) / 255.0;
                        let k = f32::from(chunk[3]) / 255.0;

                        PixelData::Rgb(
                            (255.0 * (1.0 - c) * (1.0 - k)).round() as u8,
                            (255.0 * (1.0 - m) * (1.0 - k)).round() as u8,
                            (255.0 * (1.0 - y) * (1.0 - k)).round() as u8,
                        )
                    }
                };

                P::from_pixel_data(data)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Image {
            width: u32::from(info.width),
            height: u32::from(info.height),
            data,
            format: ImageFormat::Jpeg,
            overlay: OverlayMode::default(),
        })
    }
}
