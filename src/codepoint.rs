//! Code point values and the validation shared by every public entry point

use std::fmt;

use winnow::ascii::{digit1, Caseless};
use winnow::combinator::alt;
use winnow::token::take_while;
use winnow::ModalResult;
use winnow::Parser;

use crate::error::{InvalidReason, WidthError, WidthResult};

/// Largest integer a caller may pass, 2^53 - 1
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// A validated, non-negative code point.
///
/// The Unicode upper bound (`0x10FFFF`) is not enforced; values past it
/// classify as the table default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodePoint(u64);

impl CodePoint {
    /// Create a code point, rejecting values above [`MAX_SAFE_INTEGER`]
    pub fn new(value: u64) -> WidthResult<Self> {
        if value > MAX_SAFE_INTEGER {
            return Err(WidthError::invalid(value, InvalidReason::OutOfRange));
        }
        Ok(CodePoint(value))
    }

    /// Code point of a `char` (always valid)
    pub const fn from_char(c: char) -> Self {
        CodePoint(c as u64)
    }

    /// Numeric value
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The `char` for this code point, if it is a Unicode scalar value
    pub fn to_char(self) -> Option<char> {
        u32::try_from(self.0).ok().and_then(char::from_u32)
    }

    /// Check if the code point is printable ASCII (`0x20..=0x7E`)
    pub const fn is_printable_ascii(self) -> bool {
        self.0 >= 0x20 && self.0 <= 0x7E
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        CodePoint::from_char(c)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

/// Conversion into a validated [`CodePoint`].
///
/// Implemented for integers, floats, `char` and text. Anything that is not a
/// non-negative integer no larger than [`MAX_SAFE_INTEGER`] is rejected with
/// [`WidthError::InvalidCodePoint`].
pub trait IntoCodePoint {
    fn into_code_point(self) -> WidthResult<CodePoint>;
}

impl IntoCodePoint for CodePoint {
    fn into_code_point(self) -> WidthResult<CodePoint> {
        Ok(self)
    }
}

impl IntoCodePoint for char {
    fn into_code_point(self) -> WidthResult<CodePoint> {
        Ok(CodePoint::from_char(self))
    }
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {$(
        impl IntoCodePoint for $ty {
            fn into_code_point(self) -> WidthResult<CodePoint> {
                CodePoint::new(u64::from(self))
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {$(
        impl IntoCodePoint for $ty {
            fn into_code_point(self) -> WidthResult<CodePoint> {
                match u64::try_from(self) {
                    Ok(value) => CodePoint::new(value),
                    Err(_) => Err(WidthError::invalid(self, InvalidReason::Negative)),
                }
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64);
impl_signed!(i8, i16, i32, i64, isize);

impl IntoCodePoint for usize {
    fn into_code_point(self) -> WidthResult<CodePoint> {
        match u64::try_from(self) {
            Ok(value) => CodePoint::new(value),
            Err(_) => Err(WidthError::invalid(self, InvalidReason::OutOfRange)),
        }
    }
}

impl IntoCodePoint for f64 {
    fn into_code_point(self) -> WidthResult<CodePoint> {
        if !self.is_finite() {
            return Err(WidthError::invalid(self, InvalidReason::NonFinite));
        }
        if self.fract() != 0.0 {
            return Err(WidthError::invalid(self, InvalidReason::Fractional));
        }
        // -0.0 passes this check and becomes 0
        if self < 0.0 {
            return Err(WidthError::invalid(self, InvalidReason::Negative));
        }
        if self > MAX_SAFE_INTEGER as f64 {
            return Err(WidthError::invalid(self, InvalidReason::OutOfRange));
        }
        Ok(CodePoint(self as u64))
    }
}

impl IntoCodePoint for f32 {
    fn into_code_point(self) -> WidthResult<CodePoint> {
        f64::from(self).into_code_point()
    }
}

impl IntoCodePoint for &str {
    fn into_code_point(self) -> WidthResult<CodePoint> {
        let (digits, radix) = w_code_point
            .parse(self.trim())
            .map_err(|_| WidthError::invalid(self, InvalidReason::NotAnInteger))?;
        // Digits are already validated, so the only failure left is overflow
        match u64::from_str_radix(digits, radix) {
            Ok(value) if value <= MAX_SAFE_INTEGER => Ok(CodePoint(value)),
            _ => Err(WidthError::invalid(self, InvalidReason::OutOfRange)),
        }
    }
}

impl IntoCodePoint for &String {
    fn into_code_point(self) -> WidthResult<CodePoint> {
        self.as_str().into_code_point()
    }
}

impl IntoCodePoint for String {
    fn into_code_point(self) -> WidthResult<CodePoint> {
        self.as_str().into_code_point()
    }
}

// ===== Winnow parsers =====

/// Parse hexadecimal notation: U+4E00 or 0x4E00
fn w_hex<'s>(input: &mut &'s str) -> ModalResult<(&'s str, u32)> {
    let _ = alt((Caseless("u+"), Caseless("0x"))).parse_next(input)?;
    take_while(1.., |c: char| c.is_ascii_hexdigit())
        .map(|digits| (digits, 16))
        .parse_next(input)
}

/// Parse a plain decimal integer
fn w_decimal<'s>(input: &mut &'s str) -> ModalResult<(&'s str, u32)> {
    digit1.map(|digits| (digits, 10)).parse_next(input)
}

/// Parse any supported code point literal into its digits and radix
fn w_code_point<'s>(input: &mut &'s str) -> ModalResult<(&'s str, u32)> {
    alt((w_hex, w_decimal)).parse_next(input)
}
