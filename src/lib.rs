//! # pictor
//!
//! A high-level image manipulation library: decoding and encoding, geometric
//! transforms, drawing, text, color parsing, and a set of classic filter
//! effects, all generic over the pixel type.
//!
//! ## Example
//!
//! ```no_run
//! use pictor::prelude::*;
//!
//! fn main() -> pictor::Result<()> {
//!     let mut image = Image::<Rgba>::open("input.png")?;
//!     image.grab(128, 128, FilterType::default())?;
//!     image.filter_in_place(&pictor::effect::Sepia);
//!     image.save_inferred("thumbnail.jpg")
//! }
//! ```

pub mod color;
pub mod draw;
pub mod effect;
pub mod encode;
pub mod encodings;
pub mod error;
pub mod format;
pub mod image;
pub mod pixel;
pub mod position;
#[cfg(feature = "resize")]
pub mod resize;
#[cfg(feature = "text")]
pub mod text;

pub use draw::{Border, BorderPosition, Draw, Ellipse, Line, Rectangle};
pub use effect::Filter;
pub use encode::{Decoder, Encoder};
pub use error::{Error, Result};
pub use format::ImageFormat;
pub use image::{Image, Orientation};
pub use pixel::{OverlayMode, Pixel, L, Rgb, Rgba};
pub use position::{Anchor, Dimension};
#[cfg(feature = "resize")]
pub use resize::FilterType;
#[cfg(feature = "text")]
pub use text::{Font, TextSegment};

pub mod prelude {
    //! Re-exports the most commonly used items.

    pub use super::{
        Anchor, Border, BorderPosition, Dimension, Draw, Ellipse, Filter, Image, ImageFormat,
        Line, Orientation, OverlayMode, Pixel, Rectangle, L, Rgb, Rgba,
    };
    #[cfg(feature = "resize")]
    pub use super::FilterType;
    #[cfg(feature = "text")]
    pub use super::{Font, TextSegment};
}
