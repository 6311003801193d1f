use crate::error::{Error::InvalidExtension, Result};
use crate::{Image, Pixel};
use std::{
    ffi::OsStr,
    fmt,
    io::{Read, Write},
    path::Path,
};

#[cfg(feature = "gif")]
use crate::encodings::gif;
#[cfg(feature = "jpeg")]
use crate::encodings::jpeg;
#[cfg(feature = "png")]
use crate::encodings::png;
#[cfg(any(feature = "png", feature = "jpeg", feature = "gif"))]
use crate::{Decoder, Encoder};

/// Represents the underlying encoding format of an image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// No known encoding is known for the image.
    ///
    /// This is usually because the image was created manually. See
    /// [`Image::set_format`] to manually set the encoding format.
    #[default]
    Unknown,

    /// The image is encoded in the PNG format.
    Png,

    /// The image is encoded in the JPEG format.
    Jpeg,

    /// The image is encoded in the GIF format.
    Gif,
}

impl ImageFormat {
    /// Returns whether the format is unknown.
    #[inline]
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self == &Self::Unknown
    }

    /// Parses the given extension and returns the corresponding image format.
    ///
    /// If the extension is an unknown extension, `Ok(`[`ImageFormat::Unknown`]`)` is returned.
    ///
    /// # Errors
    /// * The extension is completely invalid and failed to be converted into a `&str`.
    pub fn from_extension(ext: impl AsRef<OsStr>) -> Result<Self> {
        let extension = ext.as_ref().to_str();

        Ok(
            match extension
                .ok_or_else(|| InvalidExtension(ext.as_ref().to_os_string()))?
                .to_ascii_lowercase()
                .as_str()
            {
                "png" => Self::Png,
                "jpg" | "jpeg" => Self::Jpeg,
                "gif" => Self::Gif,
                _ => Self::Unknown,
            },
        )
    }

    /// Returns the format specified by the given path.
    ///
    /// This uses [`ImageFormat::from_extension`] to parse the extension. See
    /// [`ImageFormat::infer_encoding`] for an implementation that resolves the
    /// format from the data itself.
    ///
    /// # Errors
    /// * No extension can be resolved from the path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        path.as_ref()
            .extension()
            .ok_or_else(|| InvalidExtension(path.as_ref().into()))
            .and_then(Self::from_extension)
    }

    /// Returns the format specified by the given MIME type.
    pub fn from_mime_type(mime: impl AsRef<str>) -> Self {
        match mime.as_ref() {
            "image/png" => Self::Png,
            "image/jpeg" => Self::Jpeg,
            "image/gif" => Self::Gif,
            _ => Self::Unknown,
        }
    }

    /// The MIME type of this format, if it is known.
    #[must_use]
    pub const fn mime_type(&self) -> Option<&'static str> {
        match self {
            Self::Png => Some("image/png"),
            Self::Jpeg => Some("image/jpeg"),
            Self::Gif => Some("image/gif"),
            Self::Unknown => None,
        }
    }

    /// Infers the encoding format from the leading magic bytes of the data.
    #[must_use]
    pub fn infer_encoding(sample: &[u8]) -> Self {
        if sample.starts_with(b"\x89PNG\x0D\x0A\x1A\x0A") {
            Self::Png
        } else if sample.starts_with(b"\xFF\xD8\xFF") {
            Self::Jpeg
        } else if sample.starts_with(b"GIF") {
            Self::Gif
        } else {
            Self::Unknown
        }
    }

    /// Encodes the `Image` into the given writer using this format's encoder
    /// with default settings.
    ///
    /// # Errors
    /// * An error occured while encoding.
    /// * No encoder is available for this format. Did you forget to enable the
    ///   feature?
    #[cfg_attr(
        not(any(feature = "png", feature = "jpeg", feature = "gif")),
        allow(unused_variables)
    )]
    pub fn run_encoder<P: Pixel>(&self, image: &Image<P>, dest: impl Write) -> Result<()> {
        match self {
            #[cfg(feature = "png")]
            Self::Png => png::PngEncoder::default().encode(image, dest),
            #[cfg(feature = "jpeg")]
            Self::Jpeg => jpeg::JpegEncoder::default().encode(image, dest),
            #[cfg(feature = "gif")]
            Self::Gif => gif::GifEncoder::default().encode(image, dest),
            _ => Err(crate::Error::UnknownEncodingFormat),
        }
    }

    /// Decodes an image in this format from the given stream.
    ///
    /// # Errors
    /// * An error occured while decoding.
    /// * No decoder is available for this format. Did you forget to enable the
    ///   feature?
    #[cfg_attr(
        not(any(feature = "png", feature = "jpeg", feature = "gif")),
        allow(unused_variables)
    )]
    pub fn run_decoder<P: Pixel>(&self, stream: impl Read) -> Result<Image<P>> {
        match self {
            #[cfg(feature = "png")]
            Self::Png => png::PngDecoder::default().decode(stream),
            #[cfg(feature = "jpeg")]
            Self::Jpeg => jpeg::JpegDecoder::default().decode(stream),
            #[cfg(feature = "gif")]
            Self::Gif => gif::GifDecoder::default().decode(stream),
            _ => Err(crate::Error::UnknownEncodingFormat),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Png => "png",
                Self::Jpeg => "jpeg",
                Self::Gif => "gif",
                Self::Unknown => "",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_resolution() {
        assert_eq!(ImageFormat::from_extension("PNG").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension("jpg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(
            ImageFormat::from_extension("tga").unwrap(),
            ImageFormat::Unknown
        );
        assert_eq!(
            ImageFormat::from_path("photos/cat.jpeg").unwrap(),
            ImageFormat::Jpeg
        );
        assert!(ImageFormat::from_path("no_extension").is_err());
    }

    #[test]
    fn magic_byte_sniffing() {
        assert_eq!(
            ImageFormat::infer_encoding(b"\x89PNG\x0D\x0A\x1A\x0A...."),
            ImageFormat::Png
        );
        assert_eq!(
            ImageFormat::infer_encoding(b"GIF89a...."),
            ImageFormat::Gif
        );
        assert_eq!(
            ImageFormat::infer_encoding(b"\xFF\xD8\xFF\xE0"),
            ImageFormat::Jpeg
        );
        assert_eq!(ImageFormat::infer_encoding(b"BM...."), ImageFormat::Unknown);
    }
}
