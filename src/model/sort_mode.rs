//! Result ordering modes.

use super::error::SearchError;
use std::fmt;
use std::str::FromStr;

/// How surviving records are ordered.
///
/// `Relevance` computes no score: it keeps dataset order among survivors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Dataset order.
    #[default]
    Relevance,
    /// Highest rating first; ties keep dataset order.
    RatingDescending,
}

impl SortMode {
    /// Every mode, in selector order.
    pub const ALL: [SortMode; 2] = [SortMode::Relevance, SortMode::RatingDescending];

    /// Label shown by the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Relevance => "Relevance",
            SortMode::RatingDescending => "Top rated",
        }
    }

    /// Canonical name accepted by [`FromStr`] and written in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::RatingDescending => "rating",
        }
    }

    /// The other mode. The selector has exactly two entries.
    pub fn next(self) -> Self {
        match self {
            SortMode::Relevance => SortMode::RatingDescending,
            SortMode::RatingDescending => SortMode::Relevance,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = SearchError;

    /// Parses `relevance`, `rating`, or `top-rated` (case-insensitive).
    /// Anything else is rejected, never coerced to a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" => Ok(SortMode::Relevance),
            "rating" | "top-rated" => Ok(SortMode::RatingDescending),
            _ => Err(SearchError::InvalidSortMode {
                value: s.to_string(),
            }),
        }
    }
}
