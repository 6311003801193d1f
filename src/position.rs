//! Anchor positions and relative dimensions used by canvas, insert and resize
//! operations.

use crate::error::{Error, Result};
use std::str::FromStr;

/// Alignment of an object along a single axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) enum Align {
    Start,
    #[default]
    Center,
    End,
}

impl Align {
    /// Offsets for copying an `inner`-sized span out of or into an
    /// `outer`-sized span, returned as `(source, destination)`.
    ///
    /// When shrinking, the source is offset so the kept span hugs the aligned
    /// edge; when growing, the destination is offset the same way.
    pub(crate) fn offsets(self, old: u32, new: u32) -> (u32, u32) {
        let shift = |excess: u32| match self {
            Self::Start => 0,
            Self::Center => excess / 2,
            Self::End => excess,
        };

        if new < old {
            (shift(old - new), 0)
        } else {
            (0, shift(new - old))
        }
    }

    /// The position of an `inner`-sized object within an `outer`-sized span,
    /// offset by `delta` pixels *away* from the aligned edge.
    pub(crate) fn position(self, outer: u32, inner: u32, delta: i64) -> i64 {
        let (outer, inner) = (i64::from(outer), i64::from(inner));

        match self {
            Self::Start => delta,
            Self::Center => (outer - inner) / 2 + delta,
            Self::End => outer - inner - delta,
        }
    }
}

/// A named reference point used to align one rectangle within another, for
/// example when padding a canvas or inserting an image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    /// The default anchor.
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    /// The `(horizontal, vertical)` alignment of this anchor.
    pub(crate) const fn align(self) -> (Align, Align) {
        match self {
            Self::TopLeft => (Align::Start, Align::Start),
            Self::Top => (Align::Center, Align::Start),
            Self::TopRight => (Align::End, Align::Start),
            Self::Left => (Align::Start, Align::Center),
            Self::Center => (Align::Center, Align::Center),
            Self::Right => (Align::End, Align::Center),
            Self::BottomLeft => (Align::Start, Align::End),
            Self::Bottom => (Align::Center, Align::End),
            Self::BottomRight => (Align::End, Align::End),
        }
    }
}

impl FromStr for Anchor {
    type Err = Error;

    /// Parses anchors written as one or two words, in either order:
    /// `"top left"`, `"left top"`, `"center"`, `"bottom"`, and so on.
    /// `"middle"` is accepted as a synonym for `"center"`.
    fn from_str(s: &str) -> Result<Self> {
        let mut horizontal = None;
        let mut vertical = None;

        for word in s.split_whitespace() {
            match word.to_ascii_lowercase().as_str() {
                "left" if horizontal.is_none() => horizontal = Some(Align::Start),
                "right" if horizontal.is_none() => horizontal = Some(Align::End),
                "top" if vertical.is_none() => vertical = Some(Align::Start),
                "bottom" if vertical.is_none() => vertical = Some(Align::End),
                // "center"/"middle" may fill either free axis
                "center" | "middle" if horizontal.is_none() => horizontal = Some(Align::Center),
                "center" | "middle" if vertical.is_none() => vertical = Some(Align::Center),
                _ => return Err(Error::InvalidAnchor(s.to_string())),
            }
        }

        // A lone "left" or "top" centers the other axis; an empty string is
        // not an anchor.
        if horizontal.is_none() && vertical.is_none() {
            return Err(Error::InvalidAnchor(s.to_string()));
        }

        Ok(
            match (
                horizontal.unwrap_or(Align::Center),
                vertical.unwrap_or(Align::Center),
            ) {
                (Align::Start, Align::Start) => Self::TopLeft,
                (Align::Center, Align::Start) => Self::Top,
                (Align::End, Align::Start) => Self::TopRight,
                (Align::Start, Align::Center) => Self::Left,
                (Align::Center, Align::Center) => Self::Center,
                (Align::End, Align::Center) => Self::Right,
                (Align::Start, Align::End) => Self::BottomLeft,
                (Align::Center, Align::End) => Self::Bottom,
                (Align::End, Align::End) => Self::BottomRight,
            },
        )
    }
}

/// A dimension that may be absolute or relative to an existing size.
///
/// Relative dimensions mirror the accepted string forms: `"+20"` and `"-20"`
/// adjust the current size by that many pixels, `"150%"` scales it, and a bare
/// number is taken as-is.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Dimension {
    /// An exact pixel size.
    Absolute(u32),
    /// A pixel adjustment relative to the current size.
    Delta(i64),
    /// A percentage of the current size.
    Percent(f64),
}

impl Dimension {
    /// Resolves this dimension against a base size. The result truncates and
    /// never goes below zero.
    #[must_use]
    pub fn resolve(self, base: u32) -> u32 {
        match self {
            Self::Absolute(value) => value,
            Self::Delta(delta) => u32::try_from(i64::from(base) + delta).unwrap_or(0),
            Self::Percent(percent) => (f64::from(base) / 100.0 * percent).max(0.0) as u32,
        }
    }
}

impl From<u32> for Dimension {
    fn from(value: u32) -> Self {
        Self::Absolute(value)
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDimension(s.to_string());

        if let Some(percent) = s.strip_suffix('%') {
            return percent
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite())
                .map(Self::Percent)
                .ok_or_else(invalid);
        }

        if let Some(rest) = s.strip_prefix('+') {
            return rest.parse::<i64>().map(Self::Delta).map_err(|_| invalid());
        }

        if s.starts_with('-') {
            return s.parse::<i64>().map(Self::Delta).map_err(|_| invalid());
        }

        s.parse::<u32>().map(Self::Absolute).map_err(|_| invalid())
    }
}
