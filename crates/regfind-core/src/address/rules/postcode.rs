//! Russian postcode extraction.

use super::patterns::{DIGIT_RUN, POSTCODE_FENCE, POSTCODE_LEN, POSTCODE_PREFIX_LEN};
use super::{ComponentExtractor, ComponentMatch};
use crate::models::address::MatchCategory;

/// What part of a postcode to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostcodeMode {
    /// The whole six-digit code.
    Full,
    /// The first three digits (region discriminator).
    Prefix3,
}

/// Postcode extractor.
///
/// A postcode is a run of exactly six digits that does not touch another
/// digit, a `.` or a `:` on either side. This keeps decimal coordinates
/// (`57.323161`), times and longer numbers out.
#[derive(Debug, Clone, Copy)]
pub struct PostcodeExtractor {
    mode: PostcodeMode,
}

impl PostcodeExtractor {
    /// Extractor reporting full postcodes.
    pub fn full() -> Self {
        Self {
            mode: PostcodeMode::Full,
        }
    }

    /// Extractor reporting the first three digits of each postcode.
    pub fn prefix3() -> Self {
        Self {
            mode: PostcodeMode::Prefix3,
        }
    }
}

impl Default for PostcodeExtractor {
    fn default() -> Self {
        Self::full()
    }
}

impl ComponentExtractor for PostcodeExtractor {
    fn category(&self) -> MatchCategory {
        match self.mode {
            PostcodeMode::Full => MatchCategory::Postcode,
            PostcodeMode::Prefix3 => MatchCategory::PostcodePrefix3,
        }
    }

    fn extract_all(&self, text: &str) -> Vec<ComponentMatch> {
        DIGIT_RUN
            .find_iter(text)
            .filter(|run| run.as_str().chars().count() == POSTCODE_LEN)
            .filter(|run| {
                let before = text[..run.start()].chars().next_back();
                let after = text[run.end()..].chars().next();
                !before.is_some_and(|c| POSTCODE_FENCE.contains(&c))
                    && !after.is_some_and(|c| POSTCODE_FENCE.contains(&c))
            })
            .map(|run| match self.mode {
                PostcodeMode::Full => ComponentMatch::new(run.as_str(), run.start(), run.end()),
                PostcodeMode::Prefix3 => {
                    let cut = run
                        .as_str()
                        .char_indices()
                        .nth(POSTCODE_PREFIX_LEN)
                        .map_or(run.len(), |(i, _)| i);
                    ComponentMatch::new(&run.as_str()[..cut], run.start(), run.start() + cut)
                }
            })
            .collect()
    }
}

/// Extract full postcodes from normalized text.
pub fn extract_postcodes(text: &str) -> Vec<String> {
    PostcodeExtractor::full()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(extractor: PostcodeExtractor, text: &str) -> Vec<String> {
        extractor.extract_all(text).into_iter().map(|m| m.value).collect()
    }

    #[test]
    fn test_find_postcodes() {
        let text = "125212 ленинградское шоссе, д. 155 634009, пр-кт ленина, томск, томская область,";
        assert_eq!(extract_postcodes(text), vec!["125212", "634009"]);
    }

    #[test]
    fn test_find_postcode_prefixes() {
        let text = "125212 ленинградское шоссе, д. 155 634009, пр-кт ленина, томск, томская область,";
        assert_eq!(values(PostcodeExtractor::prefix3(), text), vec!["125", "634"]);
    }

    #[test]
    fn test_coordinates_are_not_postcodes() {
        let text = "57.323161, 38.505162, совхозная улица, 10а, посёлок городского типа";
        assert!(extract_postcodes(text).is_empty());
        assert!(values(PostcodeExtractor::prefix3(), text).is_empty());
    }

    #[test]
    fn test_five_digits_are_not_postcodes() {
        let text = "новые лапсары, городской округ чебоксары, чувашская республика, 42803";
        assert!(extract_postcodes(text).is_empty());
    }

    #[test]
    fn test_longer_runs_are_not_postcodes() {
        assert!(extract_postcodes("тел. 1234567, инн 7701234567").is_empty());
    }

    #[test]
    fn test_fenced_runs_are_not_postcodes() {
        assert!(extract_postcodes("12:30:123456").is_empty());
        assert!(extract_postcodes("индекс 634009.").is_empty());
        assert!(extract_postcodes(".634009").is_empty());
    }

    #[test]
    fn test_postcode_next_to_letters() {
        // Letters and commas are not fences.
        assert_eq!(extract_postcodes("422701улица,167000,"), vec!["422701", "167000"]);
    }

    #[test]
    fn test_positions() {
        let found = PostcodeExtractor::prefix3().extract("г. томск, 634009");
        assert_eq!(
            found,
            Some(ComponentMatch::new("634", "г. томск, ".len(), "г. томск, 634".len()))
        );
        assert_eq!(PostcodeExtractor::prefix3().category(), MatchCategory::PostcodePrefix3);
    }
}
