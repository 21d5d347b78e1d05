use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::fields::{function_body, parse_number, parse_percent_or_fraction, split_fields};
use super::{Hex, Oklch};
use crate::error::{Channel, ColorError, Fault, Result};
use crate::math::oklab::{linear_srgb_to_oklab, oklab_to_oklch};
use crate::math::round::format_percent;
use crate::math::srgb::srgb_to_linear;

const GRAMMAR: &str = "RGB";

/// Gamma-encoded sRGB with every channel normalized to 0.0-1.0.
///
/// This is the pivot between [`Hex`] and [`Oklch`]. Values converted from an
/// out-of-gamut [`Oklch`] may lie outside 0.0-1.0; nothing here clips them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Parse `rgb(r g b)`, `rgb(r, g, b)` and either form with `/ alpha` after
    /// the blue channel.
    ///
    /// A channel containing `.` is a fraction in 0-1, anything else an integer
    /// in 0-255. Alpha is `N%` or a fraction and defaults to 1.
    pub fn parse(input: &str) -> Result<Self> {
        let body = function_body(input, "rgb(", GRAMMAR)?;
        let fields = split_fields(body, input, GRAMMAR)?;

        let red = parse_channel(fields.first, Channel::Red)?;
        let green = parse_channel(fields.second, Channel::Green)?;
        let blue = parse_channel(fields.third, Channel::Blue)?;
        let alpha = fields
            .alpha
            .map(|literal| parse_percent_or_fraction(literal, GRAMMAR, Channel::Alpha))
            .transpose()?
            .unwrap_or(1.0);

        Ok(Self::new(red, green, blue, alpha))
    }

    /// sRGB -> linear sRGB -> LMS -> OkLab -> OkLCH. Alpha is carried over.
    pub fn to_oklch(self) -> Oklch {
        let linear = [self.red, self.green, self.blue].map(srgb_to_linear);
        let [lightness, chroma, hue] = oklab_to_oklch(linear_srgb_to_oklab(linear));
        Oklch::new(lightness, chroma, hue, self.alpha)
    }

    /// Quantize to 8 bits, rounding to nearest. Channels outside 0.0-1.0
    /// saturate at 0 or 255.
    pub fn to_hex(self) -> Hex {
        let byte = |c: f64| (c * 255.0).round() as u8;
        Hex::new(byte(self.red), byte(self.green), byte(self.blue), byte(self.alpha))
    }

    pub fn to_rgba(self) -> Rgba {
        self
    }
}

fn parse_channel(literal: &str, channel: Channel) -> Result<f64> {
    let (fraction_range, byte_range) = match channel {
        Channel::Red => ("0 ≤ r ≤ 1", "0 ≤ r ≤ 255"),
        Channel::Green => ("0 ≤ g ≤ 1", "0 ≤ g ≤ 255"),
        _ => ("0 ≤ b ≤ 1", "0 ≤ b ≤ 255"),
    };

    if literal.contains('.') {
        let value = parse_number(literal, GRAMMAR, channel)?;
        if !(0.0..=1.0).contains(&value) {
            return Err(ColorError::channel(GRAMMAR, channel, literal, Fault::OutOfRange(fraction_range)));
        }
        Ok(value)
    } else {
        let value: i64 = literal
            .parse()
            .map_err(|_| ColorError::channel(GRAMMAR, channel, literal, Fault::NotANumber))?;
        if !(0..=255).contains(&value) {
            return Err(ColorError::channel(GRAMMAR, channel, literal, Fault::OutOfRange(byte_range)));
        }
        Ok(value as f64 / 255.0)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |c: f64| (c * 255.0).round() as i64;
        write!(f, "rgb({} {} {}", byte(self.red), byte(self.green), byte(self.blue))?;
        if self.alpha != 1.0 {
            write!(f, " / {}%", format_percent(self.alpha))?;
        }
        f.write_str(")")
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Hex> for Rgba {
    fn from(hex: Hex) -> Self {
        hex.to_rgba()
    }
}

impl From<Oklch> for Rgba {
    fn from(oklch: Oklch) -> Self {
        oklch.to_rgba()
    }
}
