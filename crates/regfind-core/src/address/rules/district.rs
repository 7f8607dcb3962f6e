//! District (raion) name extraction.

use super::patterns::{DISTRICT_NAME, DISTRICT_SUFFIX};
use super::{is_word_boundary, is_word_char, scan, ComponentExtractor, ComponentMatch};
use crate::models::address::MatchCategory;

/// District name extractor.
///
/// Captures the word (one inner hyphen allowed) directly before "район",
/// "р-н" or "р-он".
#[derive(Debug, Clone, Copy, Default)]
pub struct DistrictExtractor;

impl DistrictExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ComponentExtractor for DistrictExtractor {
    fn category(&self) -> MatchCategory {
        MatchCategory::District
    }

    fn extract_all(&self, text: &str) -> Vec<ComponentMatch> {
        scan(text, is_word_char, district_at)
    }
}

fn district_at(text: &str, pos: usize) -> Option<usize> {
    if !is_word_boundary(text, pos) {
        return None;
    }

    let rest = &text[pos..];
    let name = DISTRICT_NAME.find(rest)?;

    DISTRICT_SUFFIX
        .is_match(&rest[name.end()..])
        .then_some(pos + name.end())
}

/// Extract district names from normalized text.
pub fn extract_districts(text: &str) -> Vec<String> {
    DistrictExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .collect()
}
