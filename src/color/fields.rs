//! Field splitting and number parsing shared by the `rgb()` and `oklch()`
//! grammars.

use crate::error::{Channel, ColorError, Fault, Result};

/// The three positional fields of a color function, plus the optional alpha
/// that follows a `/` in the third one. All slices are trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fields<'a> {
    pub first: &'a str,
    pub second: &'a str,
    pub third: &'a str,
    pub alpha: Option<&'a str>,
}

/// Strip `prefix` and the closing `)` from a functional color notation.
pub(crate) fn function_body<'a>(input: &'a str, prefix: &str, grammar: &'static str) -> Result<&'a str> {
    input
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorError::grammar(grammar, input))
}

/// Split a function body into three fields. Commas separate fields when any
/// comma is present, otherwise whitespace does. Everything after the second
/// separator belongs to the third field.
pub(crate) fn split_fields<'a>(body: &'a str, input: &str, grammar: &'static str) -> Result<Fields<'a>> {
    let missing = || ColorError::grammar(grammar, input);

    let (first, second, third) = if body.contains(',') {
        let mut parts = body.splitn(3, ',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(second), Some(third)) => (first, second, third),
            _ => return Err(missing()),
        }
    } else {
        let (first, rest) = body.trim().split_once(char::is_whitespace).ok_or_else(missing)?;
        let (second, third) = rest
            .trim_start()
            .split_once(char::is_whitespace)
            .ok_or_else(missing)?;
        (first, second, third)
    };

    let (third, alpha) = match third.split_once('/') {
        Some((value, alpha)) => (value, Some(alpha.trim())),
        None => (third, None),
    };

    Ok(Fields {
        first: first.trim(),
        second: second.trim(),
        third: third.trim(),
        alpha,
    })
}

/// Parse a finite decimal number. NaN and infinities are rejected.
pub(crate) fn parse_number(literal: &str, grammar: &'static str, channel: Channel) -> Result<f64> {
    match literal.parse::<f64>() {
        // `+ 0.0` folds "-0" into 0.0
        Ok(value) if value.is_finite() => Ok(value + 0.0),
        _ => Err(ColorError::channel(grammar, channel, literal, Fault::NotANumber)),
    }
}

/// Parse `N%` (0-100, divided by 100) or a bare fraction (0-1).
///
/// Used for alpha in both grammars and for OkLCH lightness.
pub(crate) fn parse_percent_or_fraction(literal: &str, grammar: &'static str, channel: Channel) -> Result<f64> {
    let (percent_range, fraction_range) = unit_ranges(channel);

    if let Some(number) = literal.strip_suffix('%') {
        let value = parse_number(number, grammar, channel)?;
        if !(0.0..=100.0).contains(&value) {
            return Err(ColorError::channel(grammar, channel, literal, Fault::OutOfRange(percent_range)));
        }
        Ok(value / 100.0)
    } else {
        let value = parse_number(literal, grammar, channel)?;
        if !(0.0..=1.0).contains(&value) {
            return Err(ColorError::channel(grammar, channel, literal, Fault::OutOfRange(fraction_range)));
        }
        Ok(value)
    }
}

fn unit_ranges(channel: Channel) -> (&'static str, &'static str) {
    match channel {
        Channel::Lightness => ("0% ≤ l ≤ 100%", "0 ≤ l ≤ 1"),
        _ => ("0% ≤ a ≤ 100%", "0 ≤ a ≤ 1"),
    }
}
