//! Linear sRGB <-> OkLab <-> OkLCH (Björn Ottosson, 2020).
//!
//! Forward: linear RGB -> LMS (matrix) -> cube root -> OkLab (matrix).
//! Reverse: OkLab -> LMS' (matrix) -> cube -> linear RGB (matrix).

use super::round::{close_enough, normalize_hue};

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_LMS: [[f64; 3]; 3] = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_OKLAB: [[f64; 3]; 3] = [
    [0.2104542553,  0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050,  0.4505937099],
    [0.0259040371,  0.7827717662, -0.8086757660],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0,  0.3963377774,  0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [ 4.0767416621, -3.3077115913,  0.2309699292],
    [-1.2684380046,  2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147,  1.7076147010],
];

fn multiply(matrix: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let row = |r: &[f64; 3]| r[0] * v[0] + r[1] * v[1] + r[2] * v[2];
    [row(&matrix[0]), row(&matrix[1]), row(&matrix[2])]
}

/// Linear-light sRGB to OkLab `[L, a, b]`.
pub fn linear_srgb_to_oklab(rgb: [f64; 3]) -> [f64; 3] {
    let [l, m, s] = multiply(&LINEAR_SRGB_TO_LMS, rgb);
    multiply(&LMS_TO_OKLAB, [l.cbrt(), m.cbrt(), s.cbrt()])
}

/// OkLab `[L, a, b]` to linear-light sRGB. Out-of-gamut input yields
/// channels outside 0.0-1.0.
pub fn oklab_to_linear_srgb(lab: [f64; 3]) -> [f64; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_LMS, lab);
    multiply(&LMS_TO_LINEAR_SRGB, [l.powi(3), m.powi(3), s.powi(3)])
}

/// Cartesian OkLab to polar `[L, C, h]` with h in degrees, `[0, 360)`.
///
/// L, a and b are snapped with [`close_enough`] first. Achromatic input gets
/// hue 0.
pub fn oklab_to_oklch(lab: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab.map(close_enough);
    let chroma = a.hypot(b);
    let hue = if chroma == 0.0 {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    [l, chroma, hue]
}

/// Polar `[L, C, h]` (h in degrees) to Cartesian OkLab.
pub fn oklch_to_oklab(lch: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lch;
    let radians = h.to_radians();
    [l, c * radians.cos(), c * radians.sin()]
}
