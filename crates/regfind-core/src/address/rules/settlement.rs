//! Settlement (village, urban-type settlement) name extraction.

use super::patterns::{SETTLEMENT_MARKERS, SETTLEMENT_NAME};
use super::{is_cyrillic_lower, scan, ComponentExtractor, ComponentMatch};
use crate::models::address::MatchCategory;

/// Settlement name extractor.
///
/// Captures the word after "р.п.", "н.п.", "п.", "с.", "пгт.", "пгт",
/// "село" or "поселок". Markers only count when they start a word, so
/// "стресс." and "пп." never act as markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementExtractor;

impl SettlementExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ComponentExtractor for SettlementExtractor {
    fn category(&self) -> MatchCategory {
        MatchCategory::Settlement
    }

    fn extract_all(&self, text: &str) -> Vec<ComponentMatch> {
        scan(text, is_cyrillic_lower, settlement_at)
    }
}

fn settlement_at(text: &str, pos: usize) -> Option<usize> {
    if !SETTLEMENT_MARKERS.iter().any(|m| m.precedes(text, pos)) {
        return None;
    }

    SETTLEMENT_NAME.find(&text[pos..]).map(|name| pos + name.end())
}

/// Extract settlement names from normalized text.
pub fn extract_settlements(text: &str) -> Vec<String> {
    SettlementExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::normalize::normalize;
    use pretty_assertions::assert_eq;

    fn settlements(raw: &str) -> Vec<String> {
        extract_settlements(&normalize(raw))
    }

    #[test]
    fn test_settlement_markers() {
        let address = "с. Вурнары, р.п. рабочий, н.п. тестовый,\
                       \x20п. рофловый, с. вперед, пгт. вперед,\
                       \x20пгт опять, село вперед, поселок опять";

        assert_eq!(
            settlements(address),
            vec![
                "вурнары",
                "рабочий",
                "тестовый",
                "рофловый",
                "вперед",
                "вперед",
                "опять",
                "вперед",
                "опять",
            ]
        );
    }

    #[test]
    fn test_marker_boundaries() {
        let address = "стресс. встретился в адресе, \
                       пп. Полупоселок,\
                       селовой агрегат";

        assert!(settlements(address).is_empty());
    }

    #[test]
    fn test_hyphenated_settlement() {
        assert_eq!(settlements("пгт Усть-Кинельский"), vec!["усть-кинельский"]);
    }

    #[test]
    fn test_marker_needs_single_space() {
        assert!(settlements("с.Вурнары").is_empty());
        assert!(settlements("село, 5").is_empty());
    }
}
