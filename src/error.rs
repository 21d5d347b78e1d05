//! Error types for color parsing.

use std::fmt;

use thiserror::Error;

/// Result type alias for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;

/// A named field of one of the three textual grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
    Lightness,
    Chroma,
    Hue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
            Channel::Lightness => "lightness",
            Channel::Chroma => "chroma",
            Channel::Hue => "hue",
        };
        f.write_str(name)
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// The text is not a number of the expected shape.
    NotANumber,
    /// The number parsed but lies outside the domain, e.g. `0 ≤ r ≤ 255`.
    OutOfRange(&'static str),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::NotANumber => f.write_str("not a number"),
            Fault::OutOfRange(range) => write!(f, "must be in range {range}"),
        }
    }
}

/// Every way a color string can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Wrong prefix or suffix, wrong field count, wrong digit count.
    #[error("Invalid {grammar} input: `{input}`")]
    Grammar { grammar: &'static str, input: String },

    /// A field has the wrong numeric shape or lies outside its domain.
    #[error("Error parsing {grammar} {channel} `{literal}`: {fault}")]
    Channel {
        grammar: &'static str,
        channel: Channel,
        literal: String,
        fault: Fault,
    },
}

impl ColorError {
    pub(crate) fn grammar<S: Into<String>>(grammar: &'static str, input: S) -> Self {
        ColorError::Grammar {
            grammar,
            input: input.into(),
        }
    }

    pub(crate) fn channel<S: Into<String>>(
        grammar: &'static str,
        channel: Channel,
        literal: S,
        fault: Fault,
    ) -> Self {
        ColorError::Channel {
            grammar,
            channel,
            literal: literal.into(),
            fault,
        }
    }

    /// The channel that failed, if the error is attributable to one.
    pub fn channel_name(&self) -> Option<Channel> {
        match self {
            ColorError::Grammar { .. } => None,
            ColorError::Channel { channel, .. } => Some(*channel),
        }
    }

    /// True when the field parsed as a number but lies outside its domain.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            ColorError::Channel {
                fault: Fault::OutOfRange(_),
                ..
            }
        )
    }
}
