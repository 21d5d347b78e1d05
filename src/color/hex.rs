use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Oklch, Rgba};
use crate::error::{Channel, ColorError, Fault, Result};

const GRAMMAR: &str = "hex";

/// An 8-bit-per-channel color, the exact encoding behind `#rrggbb[aa]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Hex {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (digits in either case).
    /// Short forms double each digit; alpha defaults to 255.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || ColorError::grammar(GRAMMAR, input);

        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            _ => return Err(invalid()),
        };

        let byte = |range: Range<usize>, channel: Channel| -> Result<u8> {
            let pair = &expanded[range];
            // from_str_radix alone would accept a leading '+'
            if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ColorError::channel(GRAMMAR, channel, pair, Fault::NotANumber));
            }
            u8::from_str_radix(pair, 16)
                .map_err(|_| ColorError::channel(GRAMMAR, channel, pair, Fault::NotANumber))
        };

        let red = byte(0..2, Channel::Red)?;
        let green = byte(2..4, Channel::Green)?;
        let blue = byte(4..6, Channel::Blue)?;
        let alpha = if expanded.len() == 8 {
            byte(6..8, Channel::Alpha)?
        } else {
            255
        };

        Ok(Self::new(red, green, blue, alpha))
    }

    pub fn to_rgba(self) -> Rgba {
        let unit = |c: u8| c as f64 / 255.0;
        Rgba::new(unit(self.red), unit(self.green), unit(self.blue), unit(self.alpha))
    }

    pub fn to_oklch(self) -> Oklch {
        self.to_rgba().to_oklch()
    }

    pub fn to_hex(self) -> Hex {
        self
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;
        if self.alpha != 255 {
            write!(f, "{:02x}", self.alpha)?;
        }
        Ok(())
    }
}

impl FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Rgba> for Hex {
    fn from(rgba: Rgba) -> Self {
        rgba.to_hex()
    }
}

impl From<Oklch> for Hex {
    fn from(oklch: Oklch) -> Self {
        oklch.to_hex()
    }
}
