//! Houses the low-level Encoder and Decoder traits.

use crate::{Image, Pixel, Result};
use std::io::{Read, Write};

/// Low-level encoder interface around an image format.
///
/// Encoders are option structs: construct one, adjust its settings with the
/// builder methods it exposes, then call [`encode`][Encoder::encode]. All
/// encoders implement [`Default`] with sensible settings, which is what
/// [`ImageFormat::run_encoder`][crate::ImageFormat::run_encoder] uses.
pub trait Encoder<P: Pixel, W: Write>: Default {
    /// Encodes the image into the given writer.
    ///
    /// # Errors
    /// * An error occured during encoding or writing.
    /// * The image is empty.
    fn encode(&mut self, image: &Image<P>, dest: W) -> Result<()>;
}

/// Low-level decoder interface around an image format.
pub trait Decoder<P: Pixel, R: Read>: Default {
    /// Decodes the given stream into an image.
    ///
    /// For multi-frame sources such as animated GIFs, only the first frame is
    /// decoded.
    ///
    /// # Errors
    /// * An error occured during decoding.
    fn decode(&mut self, stream: R) -> Result<Image<P>>;
}
