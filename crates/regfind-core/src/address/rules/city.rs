//! City name extraction.

use super::patterns::CITY_NAME;
use super::{ComponentExtractor, ComponentMatch};
use crate::models::address::MatchCategory;

/// City name extractor.
///
/// Cities are found after a "г", "г." or "город" marker. Known qualifier
/// words ("нижний", "сергиев", ...) extend the name to the following word;
/// the core name may carry up to two hyphens ("ростов-на-дону").
#[derive(Debug, Clone, Copy, Default)]
pub struct CityExtractor;

impl CityExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ComponentExtractor for CityExtractor {
    fn category(&self) -> MatchCategory {
        MatchCategory::City
    }

    fn extract_all(&self, text: &str) -> Vec<ComponentMatch> {
        CITY_NAME
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|name| ComponentMatch::new(name.as_str(), name.start(), name.end()))
            .collect()
    }
}

/// Extract city names from normalized text.
pub fn extract_cities(text: &str) -> Vec<String> {
    CityExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .collect()
}
