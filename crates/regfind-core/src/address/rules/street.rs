//! Street designator detection.

use super::patterns::STREET_MARKER;
use super::{ComponentExtractor, ComponentMatch};
use crate::models::address::MatchCategory;

/// Detects street-type designators ("улица", "пр-кт", "ул.", ...).
///
/// Abbreviations such as "ул" or "ш" only count when followed by a dot;
/// the reported value leaves the dot out.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreetMarkerDetector;

impl StreetMarkerDetector {
    pub fn new() -> Self {
        Self
    }

    /// True if the text holds any street designator.
    pub fn is_present(&self, text: &str) -> bool {
        STREET_MARKER.is_match(text)
    }
}

impl ComponentExtractor for StreetMarkerDetector {
    fn category(&self) -> MatchCategory {
        MatchCategory::StreetMarker
    }

    fn extract_all(&self, text: &str) -> Vec<ComponentMatch> {
        STREET_MARKER
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|word| ComponentMatch::new(word.as_str(), word.start(), word.end()))
            .collect()
    }
}
