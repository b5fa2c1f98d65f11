use east_asian_width::tables::EAST_ASIAN_WIDTH_TABLE;
use east_asian_width::{
    east_asian_width, east_asian_width_type, is_ambiguous, is_full_width, is_halfwidth,
    is_narrow, is_neutral, is_wide, shared_resolver, CodePoint, InvalidReason, WidthCategory,
    WidthError, WidthOptions, UNICODE_VERSION,
};
use unicode_width::UnicodeWidthChar;

const UNICODE_MAX: u32 = 0x10FFFF;

fn width(code_point: u32) -> usize {
    east_asian_width(code_point, WidthOptions::default()).unwrap()
}

fn cjk_width(code_point: u32) -> usize {
    east_asian_width(code_point, WidthOptions::cjk()).unwrap()
}

#[test]
fn test_ascii_letter() {
    assert_eq!(width(0x41), 1);
}

#[test]
fn test_cjk_ideograph() {
    assert_eq!(width(0x4E00), 2);
    assert_eq!(east_asian_width_type(0x4E00).unwrap(), WidthCategory::Wide);
}

#[test]
fn test_fullwidth_exclamation() {
    assert_eq!(width(0xFF01), 2);
    assert!(is_full_width(0xFF01).unwrap());
    assert!(!is_wide(0xFF01).unwrap());
}

#[test]
fn test_inverted_exclamation_is_ambiguous() {
    assert_eq!(width(0xA1), 1);
    assert_eq!(cjk_width(0xA1), 2);
    assert!(is_ambiguous(0xA1).unwrap());
}

#[test]
fn test_emoji_is_wide() {
    assert_eq!(width(0x1F600), 2);
    assert_eq!(east_asian_width_type('😀').unwrap(), WidthCategory::Wide);
}

#[test]
fn test_halfwidth_and_narrow() {
    assert!(is_halfwidth(0xFF61).unwrap());
    assert_eq!(width(0xFF61), 1);
    assert!(is_narrow(0xA2).unwrap());
    assert!(is_neutral(0x10).unwrap());
}

#[test]
fn test_accepts_every_input_form() {
    let expected = WidthCategory::Wide;
    assert_eq!(east_asian_width_type(0x4E00u32).unwrap(), expected);
    assert_eq!(east_asian_width_type(19968i64).unwrap(), expected);
    assert_eq!(east_asian_width_type(19968.0f64).unwrap(), expected);
    assert_eq!(east_asian_width_type('一').unwrap(), expected);
    assert_eq!(east_asian_width_type("U+4E00").unwrap(), expected);
    assert_eq!(east_asian_width_type("0x4e00").unwrap(), expected);
    assert_eq!(east_asian_width_type(String::from("19968")).unwrap(), expected);
    assert_eq!(
        east_asian_width_type(CodePoint::new(0x4E00).unwrap()).unwrap(),
        expected
    );
}

#[test]
fn test_invalid_inputs() {
    let cases: Vec<(WidthError, InvalidReason)> = vec![
        (
            east_asian_width(-1, WidthOptions::default()).unwrap_err(),
            InvalidReason::Negative,
        ),
        (
            east_asian_width(1.5, WidthOptions::default()).unwrap_err(),
            InvalidReason::Fractional,
        ),
        (
            east_asian_width("a", WidthOptions::default()).unwrap_err(),
            InvalidReason::NotAnInteger,
        ),
        (
            east_asian_width(f64::NAN, WidthOptions::default()).unwrap_err(),
            InvalidReason::NonFinite,
        ),
        (
            east_asian_width(9007199254740992u64, WidthOptions::default()).unwrap_err(),
            InvalidReason::OutOfRange,
        ),
        (
            east_asian_width("18446744073709551616", WidthOptions::default()).unwrap_err(),
            InvalidReason::OutOfRange,
        ),
    ];
    for (err, expected) in cases {
        match err {
            WidthError::InvalidCodePoint { reason, .. } => assert_eq!(reason, expected),
        }
    }
}

#[test]
fn test_invalid_input_fails_every_entry_point() {
    assert!(east_asian_width_type(-1).is_err());
    assert!(is_full_width(-1).is_err());
    assert!(is_wide(1.5).is_err());
    assert!(is_ambiguous("a").is_err());
    assert!(shared_resolver().classification_of(-3).is_err());
}

#[test]
fn test_error_message() {
    let err = east_asian_width("a", WidthOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "Expected a code point, got `a` (not an integer)");
}

#[test]
fn test_classify_is_total() {
    for code_point in 0..=UNICODE_MAX {
        assert!(east_asian_width_type(code_point).is_ok());
    }
}

#[test]
fn test_predicates_match_category() {
    for code_point in 0..=UNICODE_MAX {
        let category = east_asian_width_type(code_point).unwrap();
        assert_eq!(is_wide(code_point).unwrap(), category == WidthCategory::Wide);
        assert_eq!(
            is_full_width(code_point).unwrap(),
            category == WidthCategory::Fullwidth
        );
        assert_eq!(
            is_ambiguous(code_point).unwrap(),
            category == WidthCategory::Ambiguous
        );
    }
}

#[test]
fn test_printable_ascii_is_always_narrow() {
    for code_point in 0x20..=0x7E {
        assert_eq!(width(code_point), 1);
        assert_eq!(cjk_width(code_point), 1);
        assert_eq!(
            east_asian_width_type(code_point).unwrap(),
            WidthCategory::Narrow
        );
    }
}

#[test]
fn test_ambiguous_toggle() {
    let ambiguous = EAST_ASIAN_WIDTH_TABLE
        .iter()
        .filter(|&&(_, _, category)| category == WidthCategory::Ambiguous);
    for &(start, end, _) in ambiguous {
        for code_point in start..=end.min(start + 64) {
            assert_eq!(width(code_point), 1, "{:#X}", code_point);
            assert_eq!(cjk_width(code_point), 2, "{:#X}", code_point);
        }
    }
}

#[test]
fn test_width_follows_category() {
    for code_point in (0..=UNICODE_MAX).step_by(3) {
        let category = east_asian_width_type(code_point).unwrap();
        let expected = if category.is_double_width() { 2 } else { 1 };
        assert_eq!(width(code_point), expected, "{:#X}", code_point);
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    for code_point in [0x41u32, 0xA1, 0x4E00, 0xFF01, 0x1F600, 0x10, 0xE000] {
        let first = (width(code_point), cjk_width(code_point));
        for _ in 0..3 {
            assert_eq!((width(code_point), cjk_width(code_point)), first);
        }
    }
}

#[test]
fn test_agrees_with_unicode_width_for_cjk() {
    let blocks = [
        0x4E00..=0x9FFF,   // CJK Unified Ideographs
        0xAC00..=0xD7A3,   // Hangul Syllables
        0xFF01..=0xFF60,   // Fullwidth Forms
        0x3041..=0x3096,   // Hiragana
        0x20000..=0x2A6DF, // CJK Extension B
    ];
    for block in blocks {
        for code_point in block {
            let c = char::from_u32(code_point).unwrap();
            assert_eq!(Some(width(code_point)), c.width(), "{:#X}", code_point);
        }
    }
    for code_point in 0x20..=0x7E {
        let c = char::from_u32(code_point).unwrap();
        assert_eq!(Some(width(code_point)), c.width());
    }
}

#[test]
fn test_unicode_version() {
    assert_eq!(UNICODE_VERSION, (15, 1, 0));
}

#[test]
fn test_sample_listing() {
    let samples = [
        0x41u32, 0x4E00, 0x4E01, 0xA1, 0xA4, 0xA7, 0xB0, 0xFF01, 0xFF20, 0x1F600, 0x1F603, 0xA2,
        0xA5, 0x10, 0x13, 0x3000, 0xFF61, 0x20A9,
    ];
    let listing: Vec<String> = samples
        .iter()
        .map(|&code_point| {
            format!(
                "{} {} {} {}",
                CodePoint::new(u64::from(code_point)).unwrap(),
                east_asian_width_type(code_point).unwrap(),
                width(code_point),
                cjk_width(code_point)
            )
        })
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r"
    U+0041 narrow 1 1
    U+4E00 wide 2 2
    U+4E01 wide 2 2
    U+00A1 ambiguous 1 2
    U+00A4 ambiguous 1 2
    U+00A7 ambiguous 1 2
    U+00B0 ambiguous 1 2
    U+FF01 fullwidth 2 2
    U+FF20 fullwidth 2 2
    U+1F600 wide 2 2
    U+1F603 wide 2 2
    U+00A2 narrow 1 1
    U+00A5 narrow 1 1
    U+0010 neutral 1 1
    U+0013 neutral 1 1
    U+3000 fullwidth 2 2
    U+FF61 halfwidth 1 1
    U+20A9 halfwidth 1 1
    ");
}

#[test]
fn test_category_counts_snapshot() {
    let mut counts = [0usize; 6];
    for &(start, end, category) in EAST_ASIAN_WIDTH_TABLE {
        let index = WidthCategory::ALL
            .iter()
            .position(|&c| c == category)
            .unwrap();
        counts[index] += (end - start + 1) as usize;
    }
    let listing: Vec<String> = WidthCategory::ALL
        .iter()
        .zip(counts)
        .filter(|(category, _)| **category != WidthCategory::Neutral)
        .map(|(category, count)| format!("{:<2} {:<9} {}", category.abbreviation(), category, count))
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r"
    Na narrow    111
    W  wide      182417
    F  fullwidth 104
    A  ambiguous 138739
    H  halfwidth 123
    ");
}
