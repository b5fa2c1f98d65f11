//! East Asian Width range table.
//!
//! Generated from `EastAsianWidth.txt` of the Unicode Character Database.
//! Only code points whose category differs from [`DEFAULT_CATEGORY`] are
//! listed; adjacent code points of the same category are merged into one
//! closed interval.

use crate::types::WidthCategory::{
    self, Ambiguous as A, Fullwidth as F, Halfwidth as H, Narrow as Na, Wide as W,
};

/// Unicode version the table was generated from.
pub const UNICODE_VERSION: (u8, u8, u8) = (15, 1, 0);

/// Category of every code point not covered by [`EAST_ASIAN_WIDTH_TABLE`].
pub const DEFAULT_CATEGORY: WidthCategory = WidthCategory::Neutral;

/// Sorted, non-overlapping `(start, end, category)` intervals, both bounds inclusive.
#[rustfmt::skip]
pub static EAST_ASIAN_WIDTH_TABLE: &[(u32, u32, WidthCategory)] = &[
    (0x0020, 0x007E, Na),
    (0x00A1, 0x00A1, A),
    (0x00A2, 0x00A3, Na),
    (0x00A4, 0x00A4, A),
    (0x00A5, 0x00A6, Na),
    (0x00A7, 0x00A8, A),
    (0x00AA, 0x00AA, A),
    (0x00AC, 0x00AC, Na),
    (0x00AD, 0x00AE, A),
    (0x00AF, 0x00AF, Na),
    (0x00B0, 0x00B4, A),
    (0x00B6, 0x00BA, A),
    (0x00BC, 0x00BF, A),
    (0x00C6, 0x00C6, A),
    (0x00D0, 0x00D0, A),
    (0x00D7, 0x00D8, A),
    (0x00DE, 0x00E1, A),
    (0x00E6, 0x00E6, A),
    (0x00E8, 0x00EA, A),
    (0x00EC, 0x00ED, A),
    (0x00F0, 0x00F0, A),
    (0x00F2, 0x00F3, A),
    (0x00F7, 0x00FA, A),
    (0x00FC, 0x00FC, A),
    (0x00FE, 0x00FE, A),
    (0x0101, 0x0101, A),
    (0x0111, 0x0111, A),
    (0x0113, 0x0113, A),
    (0x011B, 0x011B, A),
    (0x0126, 0x0127, A),
    (0x012B, 0x012B, A),
    (0x0131, 0x0133, A),
    (0x0138, 0x0138, A),
    (0x013F, 0x0142, A),
    (0x0144, 0x0144, A),
    (0x0148, 0x014B, A),
    (0x014D, 0x014D, A),
    (0x0152, 0x0153, A),
    (0x0166, 0x0167, A),
    (0x016B, 0x016B, A),
    (0x01CE, 0x01CE, A),
    (0x01D0, 0x01D0, A),
    (0x01D2, 0x01D2, A),
    (0x01D4, 0x01D4, A),
    (0x01D6, 0x01D6, A),
    (0x01D8, 0x01D8, A),
    (0x01DA, 0x01DA, A),
    (0x01DC, 0x01DC, A),
    (0x0251, 0x0251, A),
    (0x0261, 0x0261, A),
    (0x02C4, 0x02C4, A),
    (0x02C7, 0x02C7, A),
    (0x02C9, 0x02CB, A),
    (0x02CD, 0x02CD, A),
    (0x02D0, 0x02D0, A),
    (0x02D8, 0x02DB, A),
    (0x02DD, 0x02DD, A),
    (0x02DF, 0x02DF, A),
    (0x0300, 0x036F, A),
    (0x0391, 0x03A1, A),
    (0x03A3, 0x03A9, A),
    (0x03B1, 0x03C1, A),
    (0x03C3, 0x03C9, A),
    (0x0401, 0x0401, A),
    (0x0410, 0x044F, A),
    (0x0451, 0x0451, A),
    (0x1100, 0x115F, W),
    (0x2010, 0x2010, A),
    (0x2013, 0x2016, A),
    (0x2018, 0x2019, A),
    (0x201C, 0x201D, A),
    (0x2020, 0x2022, A),
    (0x2024, 0x2027, A),
    (0x2030, 0x2030, A),
    (0x2032, 0x2033, A),
    (0x2035, 0x2035, A),
    (0x203B, 0x203B, A),
    (0x203E, 0x203E, A),
    (0x2074, 0x2074, A),
    (0x207F, 0x207F, A),
    (0x2081, 0x2084, A),
    (0x20A9, 0x20A9, H),
    (0x20AC, 0x20AC, A),
    (0x2103, 0x2103, A),
    (0x2105, 0x2105, A),
    (0x2109, 0x2109, A),
    (0x2113, 0x2113, A),
    (0x2116, 0x2116, A),
    (0x2121, 0x2122, A),
    (0x2126, 0x2126, A),
    (0x212B, 0x212B, A),
    (0x2153, 0x2154, A),
    (0x215B, 0x215E, A),
    (0x2160, 0x216B, A),
    (0x2170, 0x2179, A),
    (0x2189, 0x2189, A),
    (0x2190, 0x2199, A),
    (0x21B8, 0x21B9, A),
    (0x21D2, 0x21D2, A),
    (0x21D4, 0x21D4, A),
    (0x21E7, 0x21E7, A),
    (0x2200, 0x2200, A),
    (0x2202, 0x2203, A),
    (0x2207, 0x2208, A),
    (0x220B, 0x220B, A),
    (0x220F, 0x220F, A),
    (0x2211, 0x2211, A),
    (0x2215, 0x2215, A),
    (0x221A, 0x221A, A),
    (0x221D, 0x2220, A),
    (0x2223, 0x2223, A),
    (0x2225, 0x2225, A),
    (0x2227, 0x222C, A),
    (0x222E, 0x222E, A),
    (0x2234, 0x2237, A),
    (0x223C, 0x223D, A),
    (0x2248, 0x2248, A),
    (0x224C, 0x224C, A),
    (0x2252, 0x2252, A),
    (0x2260, 0x2261, A),
    (0x2264, 0x2267, A),
    (0x226A, 0x226B, A),
    (0x226E, 0x226F, A),
    (0x2282, 0x2283, A),
    (0x2286, 0x2287, A),
    (0x2295, 0x2295, A),
    (0x2299, 0x2299, A),
    (0x22A5, 0x22A5, A),
    (0x22BF, 0x22BF, A),
    (0x2312, 0x2312, A),
    (0x231A, 0x231B, W),
    (0x2329, 0x232A, W),
    (0x23E9, 0x23EC, W),
    (0x23F0, 0x23F0, W),
    (0x23F3, 0x23F3, W),
    (0x2460, 0x24E9, A),
    (0x24EB, 0x254B, A),
    (0x2550, 0x2573, A),
    (0x2580, 0x258F, A),
    (0x2592, 0x2595, A),
    (0x25A0, 0x25A1, A),
    (0x25A3, 0x25A9, A),
    (0x25B2, 0x25B3, A),
    (0x25B6, 0x25B7, A),
    (0x25BC, 0x25BD, A),
    (0x25C0, 0x25C1, A),
    (0x25C6, 0x25C8, A),
    (0x25CB, 0x25CB, A),
    (0x25CE, 0x25D1, A),
    (0x25E2, 0x25E5, A),
    (0x25EF, 0x25EF, A),
    (0x25FD, 0x25FE, W),
    (0x2605, 0x2606, A),
    (0x2609, 0x2609, A),
    (0x260E, 0x260F, A),
    (0x2614, 0x2615, W),
    (0x261C, 0x261C, A),
    (0x261E, 0x261E, A),
    (0x2640, 0x2640, A),
    (0x2642, 0x2642, A),
    (0x2648, 0x2653, W),
    (0x2660, 0x2661, A),
    (0x2663, 0x2665, A),
    (0x2667, 0x266A, A),
    (0x266C, 0x266D, A),
    (0x266F, 0x266F, A),
    (0x267F, 0x267F, W),
    (0x2693, 0x2693, W),
    (0x269E, 0x269F, A),
    (0x26A1, 0x26A1, W),
    (0x26AA, 0x26AB, W),
    (0x26BD, 0x26BE, W),
    (0x26BF, 0x26BF, A),
    (0x26C4, 0x26C5, W),
    (0x26C6, 0x26CD, A),
    (0x26CE, 0x26CE, W),
    (0x26CF, 0x26D3, A),
    (0x26D4, 0x26D4, W),
    (0x26D5, 0x26E1, A),
    (0x26E3, 0x26E3, A),
    (0x26E8, 0x26E9, A),
    (0x26EA, 0x26EA, W),
    (0x26EB, 0x26F1, A),
    (0x26F2, 0x26F3, W),
    (0x26F4, 0x26F4, A),
    (0x26F5, 0x26F5, W),
    (0x26F6, 0x26F9, A),
    (0x26FA, 0x26FA, W),
    (0x26FB, 0x26FC, A),
    (0x26FD, 0x26FD, W),
    (0x26FE, 0x26FF, A),
    (0x2705, 0x2705, W),
    (0x270A, 0x270B, W),
    (0x2728, 0x2728, W),
    (0x273D, 0x273D, A),
    (0x274C, 0x274C, W),
    (0x274E, 0x274E, W),
    (0x2753, 0x2755, W),
    (0x2757, 0x2757, W),
    (0x2776, 0x277F, A),
    (0x2795, 0x2797, W),
    (0x27B0, 0x27B0, W),
    (0x27BF, 0x27BF, W),
    (0x27E6, 0x27ED, Na),
    (0x2985, 0x2986, Na),
    (0x2B1B, 0x2B1C, W),
    (0x2B50, 0x2B50, W),
    (0x2B55, 0x2B55, W),
    (0x2B56, 0x2B59, A),
    (0x2E80, 0x2E99, W),
    (0x2E9B, 0x2EF3, W),
    (0x2F00, 0x2FD5, W),
    (0x2FF0, 0x2FFF, W),
    (0x3000, 0x3000, F),
    (0x3001, 0x303E, W),
    (0x3041, 0x3096, W),
    (0x3099, 0x30FF, W),
    (0x3105, 0x312F, W),
    (0x3131, 0x318E, W),
    (0x3190, 0x31E3, W),
    (0x31EF, 0x321E, W),
    (0x3220, 0x3247, W),
    (0x3248, 0x324F, A),
    (0x3250, 0x4DBF, W),
    (0x4E00, 0xA48C, W),
    (0xA490, 0xA4C6, W),
    (0xA960, 0xA97C, W),
    (0xAC00, 0xD7A3, W),
    (0xE000, 0xF8FF, A),
    (0xF900, 0xFAFF, W),
    (0xFE00, 0xFE0F, A),
    (0xFE10, 0xFE19, W),
    (0xFE30, 0xFE52, W),
    (0xFE54, 0xFE66, W),
    (0xFE68, 0xFE6B, W),
    (0xFF01, 0xFF60, F),
    (0xFF61, 0xFFBE, H),
    (0xFFC2, 0xFFC7, H),
    (0xFFCA, 0xFFCF, H),
    (0xFFD2, 0xFFD7, H),
    (0xFFDA, 0xFFDC, H),
    (0xFFE0, 0xFFE6, F),
    (0xFFE8, 0xFFEE, H),
    (0xFFFD, 0xFFFD, A),
    (0x16FE0, 0x16FE4, W),
    (0x16FF0, 0x16FF1, W),
    (0x17000, 0x187F7, W),
    (0x18800, 0x18CD5, W),
    (0x18D00, 0x18D08, W),
    (0x1AFF0, 0x1AFF3, W),
    (0x1AFF5, 0x1AFFB, W),
    (0x1AFFD, 0x1AFFE, W),
    (0x1B000, 0x1B122, W),
    (0x1B132, 0x1B132, W),
    (0x1B150, 0x1B152, W),
    (0x1B155, 0x1B155, W),
    (0x1B164, 0x1B167, W),
    (0x1B170, 0x1B2FB, W),
    (0x1F004, 0x1F004, W),
    (0x1F0CF, 0x1F0CF, W),
    (0x1F100, 0x1F10A, A),
    (0x1F110, 0x1F12D, A),
    (0x1F130, 0x1F169, A),
    (0x1F170, 0x1F18D, A),
    (0x1F18E, 0x1F18E, W),
    (0x1F18F, 0x1F190, A),
    (0x1F191, 0x1F19A, W),
    (0x1F19B, 0x1F1AC, A),
    (0x1F200, 0x1F202, W),
    (0x1F210, 0x1F23B, W),
    (0x1F240, 0x1F248, W),
    (0x1F250, 0x1F251, W),
    (0x1F260, 0x1F265, W),
    (0x1F300, 0x1F320, W),
    (0x1F32D, 0x1F335, W),
    (0x1F337, 0x1F37C, W),
    (0x1F37E, 0x1F393, W),
    (0x1F3A0, 0x1F3CA, W),
    (0x1F3CF, 0x1F3D3, W),
    (0x1F3E0, 0x1F3F0, W),
    (0x1F3F4, 0x1F3F4, W),
    (0x1F3F8, 0x1F43E, W),
    (0x1F440, 0x1F440, W),
    (0x1F442, 0x1F4FC, W),
    (0x1F4FF, 0x1F53D, W),
    (0x1F54B, 0x1F54E, W),
    (0x1F550, 0x1F567, W),
    (0x1F57A, 0x1F57A, W),
    (0x1F595, 0x1F596, W),
    (0x1F5A4, 0x1F5A4, W),
    (0x1F5FB, 0x1F64F, W),
    (0x1F680, 0x1F6C5, W),
    (0x1F6CC, 0x1F6CC, W),
    (0x1F6D0, 0x1F6D2, W),
    (0x1F6D5, 0x1F6D7, W),
    (0x1F6DC, 0x1F6DF, W),
    (0x1F6EB, 0x1F6EC, W),
    (0x1F6F4, 0x1F6FC, W),
    (0x1F7E0, 0x1F7EB, W),
    (0x1F7F0, 0x1F7F0, W),
    (0x1F90C, 0x1F93A, W),
    (0x1F93C, 0x1F945, W),
    (0x1F947, 0x1F9FF, W),
    (0x1FA70, 0x1FA7C, W),
    (0x1FA80, 0x1FA88, W),
    (0x1FA90, 0x1FABD, W),
    (0x1FABF, 0x1FAC5, W),
    (0x1FACE, 0x1FADB, W),
    (0x1FAE0, 0x1FAE8, W),
    (0x1FAF0, 0x1FAF8, W),
    (0x20000, 0x2FFFD, W),
    (0x30000, 0x3FFFD, W),
    (0xE0100, 0xE01EF, A),
    (0xF0000, 0xFFFFD, A),
    (0x100000, 0x10FFFD, A),
];
