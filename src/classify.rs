//! Classification engine: code point to East Asian Width category
//!
//! Every predicate is an equality test on [`classify`], so predicates and
//! categories can never disagree.

use std::cmp::Ordering;

use crate::codepoint::CodePoint;
use crate::tables::{DEFAULT_CATEGORY, EAST_ASIAN_WIDTH_TABLE};
use crate::types::WidthCategory;

/// Category of a code point, by binary search over the range table
pub fn classify(code_point: CodePoint) -> WidthCategory {
    let value = code_point.value();
    EAST_ASIAN_WIDTH_TABLE
        .binary_search_by(|&(start, end, _)| {
            if u64::from(end) < value {
                Ordering::Less
            } else if u64::from(start) > value {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .map(|index| EAST_ASIAN_WIDTH_TABLE[index].2)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Check if the code point is Fullwidth (F)
pub fn is_full_width(code_point: CodePoint) -> bool {
    classify(code_point) == WidthCategory::Fullwidth
}

/// Check if the code point is Wide (W)
pub fn is_wide(code_point: CodePoint) -> bool {
    classify(code_point) == WidthCategory::Wide
}

/// Check if the code point is Ambiguous (A)
pub fn is_ambiguous(code_point: CodePoint) -> bool {
    classify(code_point) == WidthCategory::Ambiguous
}

/// Check if the code point is Halfwidth (H)
pub fn is_halfwidth(code_point: CodePoint) -> bool {
    classify(code_point) == WidthCategory::Halfwidth
}

/// Check if the code point is Narrow (Na)
pub fn is_narrow(code_point: CodePoint) -> bool {
    classify(code_point) == WidthCategory::Narrow
}

/// Check if the code point is Neutral (N)
pub fn is_neutral(code_point: CodePoint) -> bool {
    classify(code_point) == WidthCategory::Neutral
}
