/// Convert a gamma-encoded sRGB channel (0.0-1.0) to linear light.
/// sRGB -> linear: if V <= 0.04045: V/12.92, else ((V+0.055)/1.055)^2.4
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear-light channel back to gamma-encoded sRGB.
/// linear -> sRGB: if L <= 0.0031308: 12.92*L, else 1.055*L^(1/2.4) - 0.055
///
/// Negative input (out of gamut) stays on the linear segment.
pub fn linear_to_srgb(l: f64) -> f64 {
    if l <= 0.0031308 {
        12.92 * l
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}
