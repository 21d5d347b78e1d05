use napi_derive::napi;

use crate::engine::ColorReport;

/// Options passed from JS to `convertColor`
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Input in `#hex`, `rgb()` or `oklch()` notation
    pub color: String,
    /// "hex" | "rgb" | "oklch" (case-insensitive)
    pub format: String,
}

/// JS-facing version of `ColorReport`
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ColorReportJs {
    pub hex: String,
    pub rgb: String,
    pub oklch: String,
    pub alpha: f64,
}

impl From<ColorReport> for ColorReportJs {
    fn from(report: ColorReport) -> Self {
        Self {
            hex: report.hex,
            rgb: report.rgb,
            oklch: report.oklch,
            alpha: report.alpha,
        }
    }
}
