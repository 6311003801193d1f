//! Parsing of textual and component-array color notations.
//!
//! Accepted textual forms:
//!
//! * Short hex codes, with or without the leading `#`: `#999`, `999`. A fourth
//!   **leading** digit is the alpha component: `#f999` is `#999` at `0xff`
//!   alpha.
//! * Long hex codes: `#999999`, `999999`, with an optional leading alpha byte:
//!   `#80999999`.
//! * Functional notation: `rgb(r, g, b)` and `rgba(r, g, b, a)`, where `r`,
//!   `g` and `b` are integers between 0 and 255 and `a` is a float between 0
//!   and 1. A single space is tolerated after the function name and after each
//!   comma, and either function name accepts either arity.

use crate::error::{Error, Result};
use crate::pixel::{Rgb, Rgba};
use std::str::FromStr;

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    Some(nibble(hi)? << 4 | nibble(lo)?)
}

fn parse_hex(s: &str) -> Option<Rgba> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();

    match digits {
        // rgb / argb, each nibble doubled
        [r, g, b] => Some(Rgba::new(
            hex_pair(*r, *r)?,
            hex_pair(*g, *g)?,
            hex_pair(*b, *b)?,
            255,
        )),
        [a, r, g, b] => Some(Rgba::new(
            hex_pair(*r, *r)?,
            hex_pair(*g, *g)?,
            hex_pair(*b, *b)?,
            hex_pair(*a, *a)?,
        )),
        // rrggbb / aarrggbb
        [r1, r2, g1, g2, b1, b2] => Some(Rgba::new(
            hex_pair(*r1, *r2)?,
            hex_pair(*g1, *g2)?,
            hex_pair(*b1, *b2)?,
            255,
        )),
        [a1, a2, r1, r2, g1, g2, b1, b2] => Some(Rgba::new(
            hex_pair(*r1, *r2)?,
            hex_pair(*g1, *g2)?,
            hex_pair(*b1, *b2)?,
            hex_pair(*a1, *a2)?,
        )),
        _ => None,
    }
}

/// Converts a float alpha in `[0, 1]` into a `u8` channel value.
fn parse_alpha(s: &str) -> Option<u8> {
    let alpha = f64::from_str(s).ok()?;

    (0.0..=1.0)
        .contains(&alpha)
        .then(|| (alpha * 255.0).round() as u8)
}

fn parse_functional(s: &str) -> Option<Rgba> {
    let rest = s
        .strip_prefix("rgba")
        .or_else(|| s.strip_prefix("rgb"))?;
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;

    let mut channels = inner.split(',').map(str::trim);
    let mut channel = || u8::from_str(channels.next()?).ok();

    let (r, g, b) = (channel()?, channel()?, channel()?);
    let a = match channels.next() {
        Some(alpha) => parse_alpha(alpha)?,
        None => 255,
    };

    // Trailing components are malformed input
    channels.next().is_none().then_some(Rgba::new(r, g, b, a))
}

impl Rgba {
    /// Parses a color from any of the accepted textual notations.
    ///
    /// # Errors
    /// * [`Error::InvalidColor`] if the string matches none of the accepted
    ///   forms or a component is out of range.
    pub fn from_color_str(s: &str) -> Result<Self> {
        parse_hex(s)
            .or_else(|| parse_functional(s))
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }

    /// Parses a hex code into a color. Accepts the same hex forms as
    /// [`from_color_str`][Self::from_color_str] but rejects functional
    /// notation.
    ///
    /// # Errors
    /// * [`Error::InvalidColor`] if the string is not a valid hex code.
    pub fn from_hex(s: &str) -> Result<Self> {
        parse_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl Rgb {
    /// Parses a color from any of the accepted textual notations, discarding
    /// any alpha component.
    ///
    /// # Errors
    /// * [`Error::InvalidColor`] if the string matches none of the accepted
    ///   forms.
    pub fn from_color_str(s: &str) -> Result<Self> {
        Rgba::from_color_str(s).map(Self::from_rgba_lossy)
    }

    /// Parses a hex code into a color, discarding any alpha component.
    ///
    /// # Errors
    /// * [`Error::InvalidColor`] if the string is not a valid hex code.
    pub fn from_hex(s: &str) -> Result<Self> {
        Rgba::from_hex(s).map(Self::from_rgba_lossy)
    }

    fn from_rgba_lossy(Rgba { r, g, b, .. }: Rgba) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_color_str(s)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_color_str(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgba {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex() {
        assert_eq!(Rgba::from_hex("#999").unwrap(), Rgba::new(153, 153, 153, 255));
        assert_eq!(Rgba::from_hex("999").unwrap(), Rgba::new(153, 153, 153, 255));
    }

    #[test]
    fn short_hex_with_alpha() {
        // The alpha nibble comes first
        assert_eq!(Rgba::from_hex("#f00f").unwrap(), Rgba::new(0, 0, 255, 255));
        assert_eq!(Rgba::from_hex("#0999").unwrap().a, 0);
    }

    #[test]
    fn long_hex() {
        assert_eq!(
            Rgba::from_hex("#123456").unwrap(),
            Rgba::new(0x12, 0x34, 0x56, 255)
        );
        assert_eq!(
            Rgba::from_hex("80123456").unwrap(),
            Rgba::new(0x12, 0x34, 0x56, 0x80)
        );
    }

    #[test]
    fn functional() {
        assert_eq!(
            "rgb(1, 2, 3)".parse::<Rgba>().unwrap(),
            Rgba::new(1, 2, 3, 255)
        );
        assert_eq!(
            "rgba(1,2,3,0.5)".parse::<Rgba>().unwrap(),
            Rgba::new(1, 2, 3, 128)
        );
        // Either name accepts either arity
        assert_eq!(
            "rgb(1, 2, 3, 0)".parse::<Rgba>().unwrap().a,
            0
        );
        assert_eq!("rgba (1, 2, 3)".parse::<Rgba>().unwrap().a, 255);
    }

    #[test]
    fn rejects_malformed() {
        assert!("#99".parse::<Rgba>().is_err());
        assert!("#ggg".parse::<Rgba>().is_err());
        assert!("rgb(256, 0, 0)".parse::<Rgba>().is_err());
        assert!("rgba(0, 0, 0, 1.5)".parse::<Rgba>().is_err());
        assert!("rgb(0, 0, 0, 0, 0)".parse::<Rgba>().is_err());
        assert!("not a color".parse::<Rgba>().is_err());
    }
}
