use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ColorError, Result};

/// The notation a conversion should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    Hex,
    Rgb,
    Oklch,
}

impl TargetFormat {
    pub const ALL: [TargetFormat; 3] = [TargetFormat::Hex, TargetFormat::Oklch, TargetFormat::Rgb];

    pub fn as_str(self) -> &'static str {
        match self {
            TargetFormat::Hex => "hex",
            TargetFormat::Rgb => "rgb",
            TargetFormat::Oklch => "oklch",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `"OKLCH"` and `"oklch"` are the same format.
impl FromStr for TargetFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        TargetFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == name)
            .ok_or_else(|| ColorError::grammar("format", s))
    }
}

/// Every rendering of one input color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    pub hex: String,
    pub rgb: String,
    pub oklch: String,
    /// Normalized 0.0-1.0, as written in the input.
    pub alpha: f64,
}

/// Serialize an already parsed color in `target` notation.
pub fn render(color: Color, target: TargetFormat) -> String {
    match target {
        TargetFormat::Hex => color.to_hex().to_string(),
        TargetFormat::Rgb => color.to_rgba().to_string(),
        TargetFormat::Oklch => color.to_oklch().to_string(),
    }
}

/// Parse `input` in any supported notation and re-serialize it as `target`.
///
/// This is the main entry point called from JS via NAPI.
pub fn convert(input: &str, target: TargetFormat) -> Result<String> {
    tracing::debug!(input, %target, "converting color");
    let color = Color::parse(input).inspect_err(|err| tracing::debug!(%err, "rejected color"))?;
    Ok(render(color, target))
}

/// Parse `input` and render it in all three notations.
pub fn describe(input: &str) -> Result<ColorReport> {
    tracing::debug!(input, "describing color");
    let color = Color::parse(input).inspect_err(|err| tracing::debug!(%err, "rejected color"))?;
    Ok(ColorReport {
        hex: render(color, TargetFormat::Hex),
        rgb: render(color, TargetFormat::Rgb),
        oklch: render(color, TargetFormat::Oklch),
        alpha: color.alpha(),
    })
}
