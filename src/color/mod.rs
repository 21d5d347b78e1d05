//! The three color value types and the prefix dispatch between them.

mod fields;
pub mod hex;
pub mod oklch;
pub mod rgba;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use hex::Hex;
pub use oklch::Oklch;
pub use rgba::Rgba;

use crate::error::{ColorError, Result};

/// A parsed color in whichever notation it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "lowercase")]
pub enum Color {
    Hex(Hex),
    Rgba(Rgba),
    Oklch(Oklch),
}

impl Color {
    /// Pick a parser by the input's prefix: `#`, `oklch(` or `rgb(`.
    /// Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        let color = if input.starts_with('#') {
            Color::Hex(Hex::parse(input)?)
        } else if input.starts_with("oklch(") {
            Color::Oklch(Oklch::parse(input)?)
        } else if input.starts_with("rgb(") {
            Color::Rgba(Rgba::parse(input)?)
        } else {
            return Err(ColorError::grammar("color", input));
        };

        tracing::trace!(?color, "parsed color");
        Ok(color)
    }

    pub fn to_hex(self) -> Hex {
        match self {
            Color::Hex(hex) => hex,
            Color::Rgba(rgba) => rgba.to_hex(),
            Color::Oklch(oklch) => oklch.to_hex(),
        }
    }

    pub fn to_rgba(self) -> Rgba {
        match self {
            Color::Hex(hex) => hex.to_rgba(),
            Color::Rgba(rgba) => rgba,
            Color::Oklch(oklch) => oklch.to_rgba(),
        }
    }

    pub fn to_oklch(self) -> Oklch {
        match self {
            Color::Hex(hex) => hex.to_oklch(),
            Color::Rgba(rgba) => rgba.to_oklch(),
            Color::Oklch(oklch) => oklch,
        }
    }

    /// Normalized alpha regardless of the source notation.
    pub fn alpha(self) -> f64 {
        match self {
            Color::Hex(hex) => hex.alpha as f64 / 255.0,
            Color::Rgba(rgba) => rgba.alpha,
            Color::Oklch(oklch) => oklch.alpha,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(hex) => fmt::Display::fmt(hex, f),
            Color::Rgba(rgba) => fmt::Display::fmt(rgba, f),
            Color::Oklch(oklch) => fmt::Display::fmt(oklch, f),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Hex> for Color {
    fn from(hex: Hex) -> Self {
        Color::Hex(hex)
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::Rgba(rgba)
    }
}

impl From<Oklch> for Color {
    fn from(oklch: Oklch) -> Self {
        Color::Oklch(oklch)
    }
}
