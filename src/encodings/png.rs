use super::{ColorType, PixelData};
use crate::encode::{Decoder, Encoder};
use crate::pixel::OverlayMode;
use crate::{Error, Image, ImageFormat, Pixel, Result};

use std::io::{Read, Write};
use std::marker::PhantomData;

impl From<ColorType> for png::ColorType {
    fn from(value: ColorType) -> Self {
        match value {
            ColorType::L => Self::Grayscale,
            ColorType::La => Self::GrayscaleAlpha,
            ColorType::Rgb => Self::Rgb,
            ColorType::Rgba => Self::Rgba,
        }
    }
}

/// A PNG encoder interface over [`png::Encoder`].
pub struct PngEncoder<P, W> {
    /// The compression level to encode with.
    pub compression: png::Compression,
    _marker: PhantomData<(P, W)>,
}

impl<P, W> Default for PngEncoder<P, W> {
    fn default() -> Self {
        Self {
            compression: png::Compression::Default,
            _marker: PhantomData,
        }
    }
}

impl<P, W> PngEncoder<P, W> {
    /// Creates a new encoder with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression level to encode with.
    #[must_use]
    pub fn with_compression(mut self, compression: png::Compression) -> Self {
        self.compression = compression;
        self
    }
}

impl<P: Pixel, W: Write> Encoder<P, W> for PngEncoder<P, W> {
    fn encode(&mut self, image: &Image<P>, dest: W) -> Result<()> {
        if image.is_empty() {
            return Err(Error::EmptyImageError);
        }

        let mut encoder = png::Encoder::new(dest, image.width(), image.height());
        encoder.set_color(P::COLOR_TYPE.into());
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(self.compression);

        let mut data = Vec::with_capacity(image.data().len() * P::COLOR_TYPE.channels());
        for pixel in image.data() {
            pixel.as_pixel_data().write(&mut data);
        }

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        writer.finish()?;

        Ok(())
    }
}

/// A PNG decoder interface over [`png::Decoder`].
///
/// Paletted and sub-8-bit images are normalized to 8-bit channel data during
/// decoding; 16-bit channels are stripped down to 8 bits.
pub struct PngDecoder<P, R> {
    _marker: PhantomData<(P, R)>,
}

impl<P, R> Default for PngDecoder<P, R> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<P, R> PngDecoder<P, R> {
    /// Creates a new decoder with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Pixel, R: Read> Decoder<P, R> for PngDecoder<P, R> {
    fn decode(&mut self, stream: R) -> Result<Image<P>> {
        let mut decoder = png::Decoder::new(stream);
        decoder.set_transformations(png::Transformations::normalize_to_color8());

        let mut reader = decoder.read_info()?;
        let mut buffer = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buffer)?;

        let color_type = match info.color_type {
            png::ColorType::Grayscale => ColorType::L,
            png::ColorType::GrayscaleAlpha => ColorType::La,
            png::ColorType::Rgb => ColorType::Rgb,
            png::ColorType::Rgba => ColorType::Rgba,
            // EXPAND transforms palettes into RGB(A)
            png::ColorType::Indexed => return Err(Error::UnsupportedColorType),
        };

        let data = buffer[..info.buffer_size()]
            .chunks_exact(color_type.channels())
            .map(|chunk| PixelData::from_raw(color_type, chunk).and_then(P::from_pixel_data))
            .collect::<Result<Vec<_>>>()?;

        Ok(Image {
            width: info.width,
            height: info.height,
            data,
            format: ImageFormat::Png,
            overlay: OverlayMode::default(),
        })
    }
}
