//! Bridges between raw codec channel data and the crate's pixel types.

#[cfg(feature = "gif")]
pub mod gif;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;

/// The layout of color channels within raw image data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorType {
    /// A single luminance channel.
    L,
    /// Luminance with alpha.
    La,
    /// Red, green and blue channels.
    Rgb,
    /// Red, green, blue and alpha channels.
    Rgba,
}

impl ColorType {
    /// Returns the number of channels for this color type.
    #[must_use]
    pub const fn channels(&self) -> usize {
        match self {
            Self::L => 1,
            Self::La => 2,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Returns whether this color type carries an alpha channel.
    #[must_use]
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::La | Self::Rgba)
    }
}

/// The raw channel data of a single pixel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PixelData {
    L(u8),
    La(u8, u8),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
}

impl PixelData {
    /// Returns the color type of this data.
    #[must_use]
    pub const fn color_type(&self) -> ColorType {
        match self {
            Self::L(_) => ColorType::L,
            Self::La(..) => ColorType::La,
            Self::Rgb(..) => ColorType::Rgb,
            Self::Rgba(..) => ColorType::Rgba,
        }
    }

    /// Creates pixel data from a raw channel slice of the given color type.
    ///
    /// # Errors
    /// * The slice holds fewer channels than the color type requires.
    pub fn from_raw(color_type: ColorType, data: &[u8]) -> crate::Result<Self> {
        if data.len() < color_type.channels() {
            return Err(crate::Error::DecodingError(format!(
                "expected {} channels, found {}",
                color_type.channels(),
                data.len(),
            )));
        }

        Ok(match color_type {
            ColorType::L => Self::L(data[0]),
            ColorType::La => Self::La(data[0], data[1]),
            ColorType::Rgb => Self::Rgb(data[0], data[1], data[2]),
            ColorType::Rgba => Self::Rgba(data[0], data[1], data[2], data[3]),
        })
    }

    /// Writes the raw channel bytes of this pixel into `out`.
    pub fn write(&self, out: &mut Vec<u8>) {
        match *self {
            Self::L(l) => out.push(l),
            Self::La(l, a) => out.extend_from_slice(&[l, a]),
            Self::Rgb(r, g, b) => out.extend_from_slice(&[r, g, b]),
            Self::Rgba(r, g, b, a) => out.extend_from_slice(&[r, g, b, a]),
        }
    }
}
