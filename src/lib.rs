//! east-asian-width - terminal column width of Unicode code points
//!
//! Classifies code points by their Unicode East Asian Width property and
//! derives how many columns (1 or 2) they occupy in a monospace grid.
//!
//! # Width Example
//! ```
//! use east_asian_width::{east_asian_width, WidthOptions};
//!
//! assert_eq!(east_asian_width('A', WidthOptions::default()).unwrap(), 1);
//! assert_eq!(east_asian_width(0x4E00, WidthOptions::default()).unwrap(), 2);
//! assert_eq!(east_asian_width(0xFF01, WidthOptions::default()).unwrap(), 2);
//! ```
//!
//! # Ambiguous Characters
//! ```
//! use east_asian_width::{east_asian_width, WidthOptions};
//!
//! // INVERTED EXCLAMATION MARK is Ambiguous
//! assert_eq!(east_asian_width(0xA1, WidthOptions::default()).unwrap(), 1);
//! assert_eq!(east_asian_width(0xA1, WidthOptions::cjk()).unwrap(), 2);
//! ```
//!
//! # Category Example
//! ```
//! use east_asian_width::{east_asian_width_type, is_wide, WidthCategory};
//!
//! assert_eq!(east_asian_width_type(0x4E00).unwrap(), WidthCategory::Wide);
//! assert_eq!(east_asian_width_type("U+FF01").unwrap(), WidthCategory::Fullwidth);
//! assert!(is_wide('中').unwrap());
//! assert_eq!("Na".parse::<WidthCategory>(), Ok(WidthCategory::Narrow));
//! ```
//!
//! # Invalid Input
//! ```
//! use east_asian_width::{east_asian_width, WidthError, WidthOptions};
//!
//! let err = east_asian_width(-1, WidthOptions::default()).unwrap_err();
//! assert!(matches!(err, WidthError::InvalidCodePoint { .. }));
//! assert!(east_asian_width(1.5, WidthOptions::default()).is_err());
//! assert!(east_asian_width("a", WidthOptions::default()).is_err());
//! ```
//!
//! # Dedicated Resolver
//! ```
//! use east_asian_width::{ResolverConfig, WidthOptions, WidthResolver};
//!
//! let resolver = WidthResolver::with_config(ResolverConfig::with_cache_capacity(64));
//! assert_eq!(resolver.resolve_width(0x1F600, WidthOptions::default()).unwrap(), 2);
//! assert_eq!(resolver.cache_len(), 1);
//! ```

pub mod cache;
pub mod classify;
mod codepoint;
mod error;
mod resolver;
pub mod tables;
mod types;

pub use codepoint::{CodePoint, IntoCodePoint, MAX_SAFE_INTEGER};
pub use error::{InvalidReason, ParseCategoryError, WidthError, WidthResult};
pub use resolver::WidthResolver;
pub use tables::UNICODE_VERSION;
pub use types::{
    DisplayWidth, ResolverConfig, WidthCategory, WidthOptions, DEFAULT_CACHE_CAPACITY,
};

use once_cell::sync::Lazy;

static SHARED_RESOLVER: Lazy<WidthResolver> = Lazy::new(WidthResolver::new);

/// Process-wide resolver behind the free functions of this crate
pub fn shared_resolver() -> &'static WidthResolver {
    &SHARED_RESOLVER
}

/// East Asian Width category of a code point
///
/// # Returns
/// * `Ok(WidthCategory)` - category from the Unicode data, `Neutral` if unlisted
/// * `Err(WidthError)` - input is not a non-negative safe integer
pub fn east_asian_width_type(code_point: impl IntoCodePoint) -> WidthResult<WidthCategory> {
    shared_resolver().classification_of(code_point)
}

/// Number of terminal columns a code point occupies
///
/// # Arguments
/// * `code_point` - integer, `char` or code point literal (`"U+4E00"`, `"0x4E00"`, `"19968"`)
/// * `options` - ambiguous-width policy
///
/// # Returns
/// * `Ok(1 | 2)` - display width
/// * `Err(WidthError)` - input is not a non-negative safe integer
pub fn east_asian_width(
    code_point: impl IntoCodePoint,
    options: WidthOptions,
) -> WidthResult<DisplayWidth> {
    shared_resolver().resolve_width(code_point, options)
}

/// Check if a code point is Fullwidth (F)
pub fn is_full_width(code_point: impl IntoCodePoint) -> WidthResult<bool> {
    Ok(classify::is_full_width(code_point.into_code_point()?))
}

/// Check if a code point is Wide (W)
pub fn is_wide(code_point: impl IntoCodePoint) -> WidthResult<bool> {
    Ok(classify::is_wide(code_point.into_code_point()?))
}

/// Check if a code point is Ambiguous (A)
pub fn is_ambiguous(code_point: impl IntoCodePoint) -> WidthResult<bool> {
    Ok(classify::is_ambiguous(code_point.into_code_point()?))
}

/// Check if a code point is Halfwidth (H)
pub fn is_halfwidth(code_point: impl IntoCodePoint) -> WidthResult<bool> {
    Ok(classify::is_halfwidth(code_point.into_code_point()?))
}

/// Check if a code point is Narrow (Na)
pub fn is_narrow(code_point: impl IntoCodePoint) -> WidthResult<bool> {
    Ok(classify::is_narrow(code_point.into_code_point()?))
}

/// Check if a code point is Neutral (N)
pub fn is_neutral(code_point: impl IntoCodePoint) -> WidthResult<bool> {
    Ok(classify::is_neutral(code_point.into_code_point()?))
}
