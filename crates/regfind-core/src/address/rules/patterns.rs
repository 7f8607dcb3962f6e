//! Token tables and compiled patterns for Russian address extraction.
//!
//! Patterns that start with `^` are matched against the remainder of the
//! text at a candidate position; the boundary conditions around them are
//! checked by the individual extractors.

use lazy_static::lazy_static;
use regex::Regex;

use super::grammar::RewriteRule;

/// Characters treated as non-breaking spaces by the normalizer.
pub const NON_BREAKING_SPACES: &[char] = &['\u{00a0}', '\u{202f}'];

/// Characters that may not touch a postcode on either side.
pub const POSTCODE_FENCE: &[char] = &['.', ':'];

pub const POSTCODE_LEN: usize = 6;

pub const POSTCODE_PREFIX_LEN: usize = 3;

/// Federal cities recognized without any designator.
pub const FEDERAL_CITIES: &[&str] = &["москва", "севастополь", "санкт-петербург"];

/// Region names that do not fit the generic name shape.
pub const IRREGULAR_REGION_NAMES: &[&str] = &["северная осетия", "марий эл"];

/// A designator that may precede a name, including its trailing space.
#[derive(Debug, Clone, Copy)]
pub struct PrefixMarker {
    pub text: &'static str,
    /// Marker must start on a word boundary.
    pub bounded: bool,
}

const fn marker(text: &'static str, bounded: bool) -> PrefixMarker {
    PrefixMarker { text, bounded }
}

/// Region designators written before the region name.
pub const REGION_PREFIX_MARKERS: &[PrefixMarker] = &[
    marker("область ", false),
    marker("обл. ", false),
    marker("обл ", true),
    marker("республика ", false),
    marker("республики ", false),
    marker("респ. ", true),
    marker("респ ", true),
    marker("край ", false),
    marker("кр. ", true),
];

/// Qualifier words that may open a multi-word city name.
pub const CITY_QUALIFIERS: &[&str] = &[
    "старый",
    "старая",
    "новый",
    "новая",
    "нижний",
    "нижняя",
    "нижнее",
    "нижние",
    "красный",
    "верхний",
    "верхняя",
    "верхнее",
    "верхние",
    "великий",
    "великие",
    "белая",
    "советская",
    "сергиев",
    "полярные",
    "петров",
    "павловский",
    "набережные",
    "минеральные",
    "мариинский",
    "малая",
    "лодейное",
    "западная",
    "дагестанские",
    "горячий",
    "гаврилов",
    "вятские",
    "вышний",
    "большой",
];

/// Words that follow a district name.
pub const DISTRICT_MARKERS: &[&str] = &["район", "р-н", "р-он"];

/// Settlement markers, each followed by a single space before the name.
pub const SETTLEMENT_MARKERS: &[PrefixMarker] = &[
    marker("р.п. ", true),
    marker("н.п. ", true),
    marker("п. ", true),
    marker("с. ", true),
    marker("пгт. ", true),
    marker("пгт ", true),
    marker("село ", true),
    marker("поселок ", true),
];

/// Street designators matched as whole words.
pub const STREET_DESIGNATORS: &[&str] = &[
    "аллея",
    "линия",
    "набережная",
    "бульвар",
    "переулок",
    "площадь",
    "проспект",
    "проезд",
    "тупик",
    "улица",
    "шоссе",
    "б-р",
    "пр-кт",
    "пр-зд",
];

/// Street abbreviations, recognized only when followed by a dot.
pub const STREET_ABBREVIATIONS: &[&str] = &["ал", "лн", "наб", "пер", "ш", "ул", "пл", "туп"];

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

lazy_static! {
    pub static ref MULTI_SPACE: Regex = Regex::new(r" {2,}").unwrap();

    pub static ref DIGIT_RUN: Regex = Regex::new(r"\d+").unwrap();

    // Genitive region phrasing: "ивановской области" -> "ивановская область".
    // Groups capture the endings that get replaced.
    pub static ref OBLAST_GENITIVE: Regex = Regex::new(
        r"\b\w+(ой) област([ьи])\b"
    ).unwrap();

    // Genitive krai phrasing: "пермского края" -> "пермский край"
    pub static ref KRAI_GENITIVE: Regex = Regex::new(
        r"\b\w+(ого) кра([йя])\b"
    ).unwrap();

    pub static ref REGION_REWRITES: Vec<RewriteRule> = vec![
        RewriteRule::new("oblast_genitive", OBLAST_GENITIVE.clone(), &["ая", "ь"]),
        RewriteRule::new("krai_genitive", KRAI_GENITIVE.clone(), &["ий", "й"]),
    ];

    // Two letter stems, optionally joined by a hyphen or an em dash.
    pub static ref REGION_NAME: Regex = Regex::new(
        r"^[а-яё]{2,}(?:-|—)?[а-яё]{2,}"
    ).unwrap();

    pub static ref REGION_SUFFIX_DESIGNATOR: Regex = Regex::new(
        r"^ (?:автономн[аы][яй] о(?:бласть|круг|бл)|область|обл\.?|(?:народная )*республик[иа]|респ\.?|край|кр\.?)\b"
    ).unwrap();

    pub static ref FEDERAL_CITY: Regex = Regex::new(
        &format!(r"^(?:{})\b", alternation(FEDERAL_CITIES))
    ).unwrap();

    pub static ref CITY_NAME: Regex = Regex::new(&format!(
        r"\b(?:г\.?|город) ?((?:(?:{}) )*\b[а-яё]+-?[а-яё]+-?[а-яё]+)",
        alternation(CITY_QUALIFIERS)
    )).unwrap();

    pub static ref DISTRICT_NAME: Regex = Regex::new(r"^\w+-?\w+").unwrap();

    pub static ref DISTRICT_SUFFIX: Regex = Regex::new(
        &format!(r"^ (?:{})\b", alternation(DISTRICT_MARKERS))
    ).unwrap();

    pub static ref SETTLEMENT_NAME: Regex = Regex::new(r"^[а-яё]+-?[а-яё]+").unwrap();

    pub static ref STREET_MARKER: Regex = Regex::new(&format!(
        r"\b(?:({})\b|({})\.)",
        alternation(STREET_DESIGNATORS),
        alternation(STREET_ABBREVIATIONS)
    )).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        lazy_static::initialize(&MULTI_SPACE);
        lazy_static::initialize(&DIGIT_RUN);
        lazy_static::initialize(&REGION_REWRITES);
        lazy_static::initialize(&REGION_NAME);
        lazy_static::initialize(&REGION_SUFFIX_DESIGNATOR);
        lazy_static::initialize(&FEDERAL_CITY);
        lazy_static::initialize(&CITY_NAME);
        lazy_static::initialize(&DISTRICT_NAME);
        lazy_static::initialize(&DISTRICT_SUFFIX);
        lazy_static::initialize(&SETTLEMENT_NAME);
        lazy_static::initialize(&STREET_MARKER);
    }

    #[test]
    fn test_suffix_designator_ignores_abbreviation_dot() {
        assert!(REGION_SUFFIX_DESIGNATOR.is_match(" обл. мурманск"));
        assert!(REGION_SUFFIX_DESIGNATOR.is_match(" кр,"));
        assert!(REGION_SUFFIX_DESIGNATOR.is_match(" народная республика"));
        assert!(!REGION_SUFFIX_DESIGNATOR.is_match(" краевой"));
        assert!(!REGION_SUFFIX_DESIGNATOR.is_match(" мокр."));
    }

    #[test]
    fn test_region_name_shape() {
        assert_eq!(REGION_NAME.find("кабардино-балкарская ").unwrap().as_str(), "кабардино-балкарская");
        assert_eq!(REGION_NAME.find("коми,").unwrap().as_str(), "коми");
        assert!(REGION_NAME.find("эл ").is_none());
        assert!(REGION_NAME.find("кр.").is_none());
    }
}
