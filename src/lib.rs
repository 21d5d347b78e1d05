//! Conversion between `#hex`, `rgb()` and `oklch()` color notations.
//!
//! Each notation has a value type ([`Hex`], [`Rgba`], [`Oklch`]) with a
//! validating parser, total conversions to the other two, and a canonical
//! `Display`. [`engine`] adds prefix dispatch on top. With the `node` feature
//! the crate also builds as a Node.js addon.

#[cfg(feature = "node")]
#[macro_use]
extern crate napi_derive;

pub mod color;
pub mod engine;
pub mod error;
pub mod math;
#[cfg(feature = "node")]
pub mod types;

pub use color::{Color, Hex, Oklch, Rgba};
pub use engine::{convert, describe, ColorReport, TargetFormat};
pub use error::{Channel, ColorError, Fault};

#[cfg(feature = "node")]
#[napi]
pub fn health_check() -> String {
    "color-convert-native ok".to_string()
}

/// Convert `options.color` into `options.format` notation.
#[cfg(feature = "node")]
#[napi]
pub fn convert_color(options: types::ConvertOptions) -> napi::Result<String> {
    let format: TargetFormat = options.format.parse().map_err(to_napi_error)?;
    convert(&options.color, format).map_err(to_napi_error)
}

/// Render one color in all three notations.
#[cfg(feature = "node")]
#[napi]
pub fn describe_color(color: String) -> napi::Result<types::ColorReportJs> {
    describe(&color).map(Into::into).map_err(to_napi_error)
}

#[cfg(feature = "node")]
fn to_napi_error(err: ColorError) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}
