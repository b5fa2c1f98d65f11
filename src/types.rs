use crate::error::ParseCategoryError;

/// Column count a code point occupies in a monospace grid (1 or 2)
pub type DisplayWidth = usize;

/// Default number of entries held by a resolver's width cache
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Unicode East Asian Width property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidthCategory {
    /// N - not East Asian, never occurs in legacy CJK encodings
    Neutral,
    /// Na - narrow counterpart of a fullwidth character (ASCII and friends)
    Narrow,
    /// W - wide ideographs, kana, hangul, emoji presentation
    Wide,
    /// F - fullwidth compatibility forms
    Fullwidth,
    /// A - width depends on context (legacy CJK fonts render these wide)
    Ambiguous,
    /// H - halfwidth compatibility forms
    Halfwidth,
}

impl WidthCategory {
    /// Every category, in declaration order
    pub const ALL: [WidthCategory; 6] = [
        WidthCategory::Neutral,
        WidthCategory::Narrow,
        WidthCategory::Wide,
        WidthCategory::Fullwidth,
        WidthCategory::Ambiguous,
        WidthCategory::Halfwidth,
    ];

    /// Lowercase name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            WidthCategory::Neutral => "neutral",
            WidthCategory::Narrow => "narrow",
            WidthCategory::Wide => "wide",
            WidthCategory::Fullwidth => "fullwidth",
            WidthCategory::Ambiguous => "ambiguous",
            WidthCategory::Halfwidth => "halfwidth",
        }
    }

    /// Short property value alias used by UAX #11 (`N`, `Na`, `W`, `F`, `A`, `H`)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WidthCategory::Neutral => "N",
            WidthCategory::Narrow => "Na",
            WidthCategory::Wide => "W",
            WidthCategory::Fullwidth => "F",
            WidthCategory::Ambiguous => "A",
            WidthCategory::Halfwidth => "H",
        }
    }

    /// Parse a category from its name or abbreviation, ignoring case
    pub fn parse(s: &str) -> Option<WidthCategory> {
        let s = s.trim();
        WidthCategory::ALL.into_iter().find(|category| {
            s.eq_ignore_ascii_case(category.as_str()) || s.eq_ignore_ascii_case(category.abbreviation())
        })
    }

    /// Check if the category always occupies two columns
    pub fn is_double_width(&self) -> bool {
        matches!(self, WidthCategory::Wide | WidthCategory::Fullwidth)
    }

    /// Columns occupied by a character of this category.
    ///
    /// Ambiguous characters take two columns only when `ambiguous_as_wide` is set.
    pub fn display_width(&self, ambiguous_as_wide: bool) -> DisplayWidth {
        if self.is_double_width() || (ambiguous_as_wide && *self == WidthCategory::Ambiguous) {
            2
        } else {
            1
        }
    }
}

impl std::str::FromStr for WidthCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidthCategory::parse(s).ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl std::fmt::Display for WidthCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Per-call options for width resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidthOptions {
    /// Treat Ambiguous characters as two columns wide (East Asian context)
    pub ambiguous_as_wide: bool,
}

impl WidthOptions {
    /// Options for an East Asian context, where Ambiguous characters are wide
    pub const fn cjk() -> Self {
        Self {
            ambiguous_as_wide: true,
        }
    }
}

/// Construction options for a [`WidthResolver`](crate::WidthResolver)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Maximum number of cached widths; 0 disables caching
    pub cache_capacity: usize,
}

impl ResolverConfig {
    /// Resolver without a results cache
    pub const fn uncached() -> Self {
        Self { cache_capacity: 0 }
    }

    /// Resolver caching at most `capacity` widths
    pub const fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            cache_capacity: capacity,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::with_cache_capacity(DEFAULT_CACHE_CAPACITY)
    }
}
