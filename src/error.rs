use std::fmt;

use thiserror::Error;

/// Why a value was rejected as a code point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Below zero
    Negative,
    /// Has a fractional part
    Fractional,
    /// NaN or infinite
    NonFinite,
    /// Larger than 2^53 - 1
    OutOfRange,
    /// Text that is not an integer literal
    NotAnInteger,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidReason::Negative => "negative",
            InvalidReason::Fractional => "not a whole number",
            InvalidReason::NonFinite => "not finite",
            InvalidReason::OutOfRange => "exceeds the safe integer range",
            InvalidReason::NotAnInteger => "not an integer",
        };
        f.write_str(text)
    }
}

/// Errors returned by width lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidthError {
    /// Input is not a non-negative safe integer
    #[error("Expected a code point, got `{input}` ({reason})")]
    InvalidCodePoint { input: String, reason: InvalidReason },
}

impl WidthError {
    pub(crate) fn invalid(input: impl fmt::Display, reason: InvalidReason) -> Self {
        WidthError::InvalidCodePoint {
            input: input.to_string(),
            reason,
        }
    }
}

/// Text that names no East Asian Width category
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown width category `{0}`")]
pub struct ParseCategoryError(pub String);

/// Result type alias
pub type WidthResult<T> = Result<T, WidthError>;
