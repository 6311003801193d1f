//! Common error types.

use std::ffi::OsString;
use std::fmt;

/// A shortcut type equivalent to `Result<T, pictor::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error that occurs within the crate.
#[derive(Debug)]
pub enum Error {
    /// A color string failed to parse. The inner value is the offending input.
    ///
    /// Accepted forms are short/long hex codes with an optional leading alpha
    /// component, and `rgb(..)`/`rgba(..)` functional notation.
    InvalidColor(String),

    /// A relative dimension string (e.g. `"-20"`, `"150%"`) failed to parse.
    InvalidDimension(String),

    /// An anchor position string failed to parse.
    InvalidAnchor(String),

    /// A filter level was out of its accepted range.
    InvalidLevel {
        /// The level that was provided.
        level: f64,
        /// The minimum accepted level.
        min: f64,
        /// The maximum accepted level.
        max: f64,
    },

    /// An invalid extension was provided when trying to resolve an image's encoding format
    /// from a file extension.
    ///
    /// # Note
    /// This is **not** an error that occurs when the file extension is not recognized, or
    /// is an unknown image extension. This occurs if the OsStr fails conversion to a native
    /// &str. In the case of this, [`ImageFormat::Unknown`][crate::ImageFormat::Unknown] is
    /// used instead.
    InvalidExtension(OsString),

    /// Failed to encode an image.
    EncodingError(String),

    /// Invalid data was encountered when decoding an image, usually because it is corrupted.
    ///
    /// Errors can differ across encodings, so the inner `String` here is nothing more than
    /// an error message.
    DecodingError(String),

    /// An error occured while resampling an image.
    #[cfg(feature = "resize")]
    ResizeError(String),

    /// An error occured while trying to load or rasterize a font.
    #[cfg(feature = "text")]
    FontError(&'static str),

    /// No encoding format could be inferred for the given image.
    UnknownEncodingFormat,

    /// An image received data incompatible with the image's dimensions.
    IncompatibleImageData {
        width: u32,
        height: u32,
        received: usize,
    },

    /// Two images were expected to share dimensions but did not, for example when applying
    /// an alpha mask.
    MismatchedDimensions {
        expected: (u32, u32),
        received: (u32, u32),
    },

    /// Received an unsupported color type when trying to create a pixel from raw data.
    UnsupportedColorType,

    /// An error occured when trying to read a file or when trying to write to a file.
    IoError(std::io::Error),

    /// Tried to create or encode an empty image, or an operation produced an image
    /// without any pixels.
    EmptyImageError,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidColor(color) => write!(f, "Invalid color: {color}"),
            Self::InvalidDimension(dim) => write!(f, "Invalid dimension: {dim}"),
            Self::InvalidAnchor(anchor) => write!(f, "Invalid anchor position: {anchor}"),
            Self::InvalidLevel { level, min, max } => {
                write!(
                    f,
                    "Level {level} is out of range, must be between {min} and {max}"
                )
            }
            Self::InvalidExtension(ext) => {
                write!(f, "Invalid extension: {}", ext.to_string_lossy())
            }
            Self::EncodingError(msg) => write!(f, "Encoding error: {msg}"),
            Self::DecodingError(msg) => write!(f, "Decoding error: {msg}"),
            #[cfg(feature = "resize")]
            Self::ResizeError(msg) => write!(f, "Resize error: {msg}"),
            #[cfg(feature = "text")]
            Self::FontError(msg) => write!(f, "Font error: {msg}"),
            Self::UnknownEncodingFormat => write!(f, "Could not infer encoding format"),
            Self::IncompatibleImageData {
                width,
                height,
                received,
            } => write!(
                f,
                "An image with dimensions {width}x{height} should have {} pixels, received {received} instead",
                width * height,
            ),
            Self::MismatchedDimensions { expected, received } => write!(
                f,
                "Expected an image with dimensions {}x{}, received {}x{}",
                expected.0, expected.1, received.0, received.1,
            ),
            Self::UnsupportedColorType => write!(f, "Unsupported color type"),
            Self::IoError(error) => write!(f, "IO error: {error}"),
            Self::EmptyImageError => write!(f, "Image has no pixels"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}

#[cfg(feature = "png")]
impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        match err {
            png::EncodingError::IoError(err) => Self::IoError(err),
            png::EncodingError::Format(err) => Self::EncodingError(err.to_string()),
            png::EncodingError::LimitsExceeded => {
                Self::EncodingError("limits exceeded".to_string())
            }
            png::EncodingError::Parameter(err) => Self::EncodingError(err.to_string()),
        }
    }
}

#[cfg(feature = "png")]
impl From<png::DecodingError> for Error {
    fn from(err: png::DecodingError) -> Self {
        match err {
            png::DecodingError::IoError(err) => Self::IoError(err),
            png::DecodingError::Format(err) => Self::DecodingError(err.to_string()),
            png::DecodingError::LimitsExceeded => {
                Self::DecodingError("limits exceeded".to_string())
            }
            png::DecodingError::Parameter(err) => Self::DecodingError(err.to_string()),
        }
    }
}

#[cfg(feature = "jpeg")]
impl From<jpeg_decoder::Error> for Error {
    fn from(err: jpeg_decoder::Error) -> Self {
        match err {
            jpeg_decoder::Error::Io(err) => Self::IoError(err),
            err => Self::DecodingError(err.to_string()),
        }
    }
}

#[cfg(feature = "jpeg")]
impl From<jpeg_encoder::EncodingError> for Error {
    fn from(err: jpeg_encoder::EncodingError) -> Self {
        match err {
            jpeg_encoder::EncodingError::IoError(err) => Self::IoError(err),
            err => Self::EncodingError(err.to_string()),
        }
    }
}

#[cfg(feature = "gif")]
impl From<gif::EncodingError> for Error {
    fn from(err: gif::EncodingError) -> Self {
        match err {
            gif::EncodingError::Io(err) => Self::IoError(err),
            gif::EncodingError::Format(err) => Self::EncodingError(err.to_string()),
        }
    }
}

#[cfg(feature = "gif")]
impl From<gif::DecodingError> for Error {
    fn from(err: gif::DecodingError) -> Self {
        match err {
            gif::DecodingError::Io(err) => Self::IoError(err),
            gif::DecodingError::Format(err) => Self::DecodingError(err.to_string()),
        }
    }
}

#[cfg(feature = "resize")]
impl From<fast_image_resize::ImageBufferError> for Error {
    fn from(err: fast_image_resize::ImageBufferError) -> Self {
        Self::ResizeError(err.to_string())
    }
}

#[cfg(feature = "resize")]
impl From<fast_image_resize::DifferentTypesOfPixelsError> for Error {
    fn from(err: fast_image_resize::DifferentTypesOfPixelsError) -> Self {
        Self::ResizeError(err.to_string())
    }
}

#[cfg(feature = "resize")]
impl From<fast_image_resize::MulDivImageError> for Error {
    fn from(err: fast_image_resize::MulDivImageError) -> Self {
        Self::ResizeError(err.to_string())
    }
}

#[cfg(feature = "resize")]
impl From<fast_image_resize::MulDivImagesError> for Error {
    fn from(err: fast_image_resize::MulDivImagesError) -> Self {
        Self::ResizeError(err.to_string())
    }
}
