//! Rule-based component extractors for Russian addresses.

pub mod city;
pub mod district;
pub mod grammar;
pub mod patterns;
pub mod postcode;
pub mod region;
pub mod settlement;
pub mod street;

pub use city::CityExtractor;
pub use district::DistrictExtractor;
pub use grammar::{apply_rewrites, RewriteRule, RewrittenText};
pub use postcode::PostcodeExtractor;
pub use region::RegionExtractor;
pub use settlement::SettlementExtractor;
pub use street::StreetMarkerDetector;

use serde::{Deserialize, Serialize};

use crate::models::address::MatchCategory;

use patterns::PrefixMarker;

/// Trait for address component extractors.
///
/// Extractors expect normalized text (see [`crate::address::normalize`]).
pub trait ComponentExtractor {
    /// The category this extractor reports.
    fn category(&self) -> MatchCategory;

    /// Extract all occurrences, left to right, duplicates included.
    fn extract_all(&self, text: &str) -> Vec<ComponentMatch>;

    /// Extract the first occurrence.
    fn extract(&self, text: &str) -> Option<ComponentMatch> {
        self.extract_all(text).into_iter().next()
    }
}

/// A component found in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMatch {
    /// Matched substring.
    pub value: String,
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
}

impl ComponentMatch {
    pub fn new(value: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            value: value.into(),
            start,
            end,
        }
    }
}

/// Word character in the Unicode sense used by `\w`.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Letter of the `[а-яё]` class.
pub(crate) fn is_cyrillic_lower(c: char) -> bool {
    matches!(c, 'а'..='я' | 'ё')
}

/// Word boundary between `text[..pos]` and `text[pos..]`.
pub(crate) fn is_word_boundary(text: &str, pos: usize) -> bool {
    let before = text[..pos].chars().next_back().is_some_and(is_word_char);
    let after = text[pos..].chars().next().is_some_and(is_word_char);
    before != after
}

impl PrefixMarker {
    /// The marker ends exactly at `pos`.
    pub(crate) fn precedes(&self, text: &str, pos: usize) -> bool {
        let head = &text[..pos];
        if !head.ends_with(self.text) {
            return false;
        }

        !self.bounded || is_word_boundary(text, pos - self.text.len())
    }
}

/// Left-to-right non-overlapping scan.
///
/// Every char position accepted by `starts` that lies at or after the end of
/// the previous match is offered to `match_at`, which returns the match end.
pub(crate) fn scan<S, M>(text: &str, starts: S, match_at: M) -> Vec<ComponentMatch>
where
    S: Fn(char) -> bool,
    M: Fn(&str, usize) -> Option<usize>,
{
    let mut results = Vec::new();
    let mut resume = 0;

    for (pos, c) in text.char_indices() {
        if pos < resume || !starts(c) {
            continue;
        }

        if let Some(end) = match_at(text, pos) {
            results.push(ComponentMatch::new(&text[pos..end], pos, end));
            resume = end;
        }
    }

    results
}
