/// Snap `value` to the nearest integer when it is within 1e-5 of it.
///
/// Removes the floating-point residue left on primaries and grays by the
/// matrix round trip, so that e.g. white gets exactly zero chroma.
pub fn close_enough(value: f64) -> f64 {
    let rounded = value.round();
    if (rounded - value).abs() < 1e-5 {
        // `+ 0.0` turns -0.0 into 0.0
        rounded + 0.0
    } else {
        value
    }
}

/// Bring an angle in degrees into `[0, 360)`.
pub fn normalize_hue(degrees: f64) -> f64 {
    let hue = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if hue >= 360.0 {
        0.0
    } else {
        hue + 0.0
    }
}

/// Render a 0.0-1.0 fraction as a percentage with at most 3 decimals and no
/// trailing zeros: 0.5 -> "50", 0.50196 -> "50.196".
pub fn format_percent(fraction: f64) -> String {
    let percent = (fraction * 100_000.0).round() / 1000.0 + 0.0;
    format!("{percent}")
}
