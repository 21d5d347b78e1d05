use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::fields::{function_body, parse_number, parse_percent_or_fraction, split_fields};
use super::{Hex, Rgba};
use crate::error::{Channel, ColorError, Fault, Result};
use crate::math::oklab::{oklab_to_linear_srgb, oklch_to_oklab};
use crate::math::round::normalize_hue;
use crate::math::srgb::linear_to_srgb;

const GRAMMAR: &str = "OKLCH";

/// Perceptual lightness (0-1), chroma (≥ 0), hue in degrees `[0, 360)` and
/// alpha (0-1).
///
/// Hue is always stored in degrees; it becomes radians only inside
/// [`Oklch::to_rgba`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    pub lightness: f64,
    pub chroma: f64,
    pub hue: f64,
    pub alpha: f64,
}

impl Oklch {
    pub const fn new(lightness: f64, chroma: f64, hue: f64, alpha: f64) -> Self {
        Self {
            lightness,
            chroma,
            hue,
            alpha,
        }
    }

    /// Parse `oklch(l c h)` / `oklch(l, c, h)` with optional `/ alpha`.
    ///
    /// Lightness is `N%` or a fraction; hue is wrapped into `[0, 360)` and may
    /// be the keyword `none`.
    pub fn parse(input: &str) -> Result<Self> {
        let body = function_body(input, "oklch(", GRAMMAR)?;
        let fields = split_fields(body, input, GRAMMAR)?;

        let lightness = parse_percent_or_fraction(fields.first, GRAMMAR, Channel::Lightness)?;

        let chroma = parse_number(fields.second, GRAMMAR, Channel::Chroma)?;
        if chroma < 0.0 {
            return Err(ColorError::channel(
                GRAMMAR,
                Channel::Chroma,
                fields.second,
                Fault::OutOfRange("c ≥ 0"),
            ));
        }

        let hue = match fields.third {
            "none" => 0.0,
            literal => normalize_hue(parse_number(literal, GRAMMAR, Channel::Hue)?),
        };

        let alpha = fields
            .alpha
            .map(|literal| parse_percent_or_fraction(literal, GRAMMAR, Channel::Alpha))
            .transpose()?
            .unwrap_or(1.0);

        Ok(Self::new(lightness, chroma, hue, alpha))
    }

    /// OkLCH -> OkLab -> LMS -> linear sRGB -> sRGB. Out-of-gamut colors come
    /// back with channels outside 0.0-1.0.
    pub fn to_rgba(self) -> Rgba {
        let lab = oklch_to_oklab([self.lightness, self.chroma, self.hue]);
        let [red, green, blue] = oklab_to_linear_srgb(lab).map(linear_to_srgb);
        Rgba::new(red, green, blue, self.alpha)
    }

    pub fn to_hex(self) -> Hex {
        self.to_rgba().to_hex()
    }

    pub fn to_oklch(self) -> Oklch {
        self
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.3}% {:.3} ", self.lightness * 100.0, self.chroma)?;
        if self.hue == 0.0 {
            f.write_str("none")?;
        } else {
            write!(f, "{:.3}", self.hue)?;
        }
        if self.alpha != 1.0 {
            write!(f, " / {:.3}%", self.alpha * 100.0)?;
        }
        f.write_str(")")
    }
}

impl FromStr for Oklch {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Rgba> for Oklch {
    fn from(rgba: Rgba) -> Self {
        rgba.to_oklch()
    }
}

impl From<Hex> for Oklch {
    fn from(hex: Hex) -> Self {
        hex.to_oklch()
    }
}
