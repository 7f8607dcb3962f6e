//! Region (oblast, krai, republic, autonomous okrug) name extraction.

use tracing::trace;

use super::grammar::apply_rewrites;
use super::patterns::{
    FEDERAL_CITY, IRREGULAR_REGION_NAMES, REGION_NAME, REGION_PREFIX_MARKERS, REGION_REWRITES,
    REGION_SUFFIX_DESIGNATOR,
};
use super::{is_cyrillic_lower, is_word_boundary, scan, ComponentExtractor, ComponentMatch};
use crate::models::address::MatchCategory;

/// Region name extractor.
///
/// At every position the following are tried in order:
/// 1. a name followed by a designator ("томская область", "коми республика");
/// 2. a federal city name (москва, санкт-петербург, севастополь);
/// 3. a name preceded by a designator ("обл. мурманская", "республика коми").
///
/// Genitive phrasing is rewritten to the nominative first, on a copy of the
/// text. Values come from the copy, offsets are mapped back to the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionExtractor;

impl RegionExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ComponentExtractor for RegionExtractor {
    fn category(&self) -> MatchCategory {
        MatchCategory::Region
    }

    fn extract_all(&self, text: &str) -> Vec<ComponentMatch> {
        let rewritten = apply_rewrites(text, &REGION_REWRITES);
        trace!("Region scan over: {}", rewritten.text);

        scan(&rewritten.text, is_cyrillic_lower, region_at)
            .into_iter()
            .map(|m| {
                let start = rewritten.original_offset(m.start);
                let end = rewritten.original_offset(m.end);
                ComponentMatch::new(m.value, start, end)
            })
            .collect()
    }
}

/// Candidate name lengths at the start of `rest`, in priority order.
fn name_candidates(rest: &str) -> impl Iterator<Item = usize> + '_ {
    IRREGULAR_REGION_NAMES
        .iter()
        .filter(move |name| rest.starts_with(**name))
        .map(|name| name.len())
        .chain(REGION_NAME.find(rest).map(|m| m.end()))
}

fn region_at(text: &str, pos: usize) -> Option<usize> {
    let rest = &text[pos..];

    if is_word_boundary(text, pos) {
        let named =
            name_candidates(rest).find(|&len| REGION_SUFFIX_DESIGNATOR.is_match(&rest[len..]));
        if let Some(len) = named {
            return Some(pos + len);
        }

        if let Some(city) = FEDERAL_CITY.find(rest) {
            return Some(pos + city.end());
        }
    }

    if REGION_PREFIX_MARKERS.iter().any(|m| m.precedes(text, pos)) {
        return name_candidates(rest).next().map(|len| pos + len);
    }

    None
}

/// Extract region names from normalized text.
pub fn extract_regions(text: &str) -> Vec<String> {
    RegionExtractor::new()
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

    fn regions(raw: &str) -> Vec<String> {
        extract_regions(&normalize(raw))
    }

    #[test]
    fn test_federal_cities() {
        let address = "Загородное шоссе, 2с5, Москва, 117152,\
                       Партизанская улица, 14, Санкт-Петербург, 195248,\
                       переулок Шевкопляса, 9, Инкерман,\
                       Балаклавский район, Севастополь, 299703";

        assert_eq!(regions(address), vec!["москва", "санкт-петербург", "севастополь"]);
    }

    #[test]
    fn test_federal_city_needs_whole_word() {
        let address = "улица Фрунзе, 19, Новосибирск, 630091,\
                       Московское шоссе, д. 14, г. Киров";

        assert!(regions(address).is_empty());
    }

    #[test]
    fn test_republics() {
        let address = "Полевая улица, 26А, село Высокая Гора,\
                       Респ. Татарстан, 422701\
                       улица Карла Маркса, 270А, Ижевск, \
                       Удмуртская Республика, Коммунистическая улица,\
                       21А, Сыктывкар, Республика Коми, 167000,\
                       улица Орджоникидзе, 47, Нальчик,\
                       Кабардино-Балкарская Республика";

        assert_eq!(
            regions(address),
            vec!["татарстан", "удмуртская", "коми", "кабардино-балкарская"]
        );
    }

    #[test]
    fn test_autonomous_okrugs() {
        let address = "Анадырь, Чукотский автономный округ, 689000,\
                       улица имени В.И. Ленина, 12, Нарьян-Мар,\
                       Ненецкий автономный округ, 166000,\
                       улица Чубынина, 12, Салехард,\
                       Ямало-Ненецкий автономный округ, 629008";

        assert_eq!(regions(address), vec!["чукотский", "ненецкий", "ямало-ненецкий"]);
    }

    #[test]
    fn test_oblasts() {
        let address = "Советская улица, 6, Ивановская область, Иваново, 153000,\
                       проспект Ленина, 82, обл. Мурманская Мурманск, 183038,\
                       Обл Архангельская, г. Архангельск";

        assert_eq!(regions(address), vec!["ивановская", "мурманская", "архангельская"]);
    }

    #[test]
    fn test_genitive_forms() {
        let address = "Советская улица, 6, Ивановской области, Иваново, 153000, \
                       г. Казань, республики Татарстан";

        assert_eq!(regions(address), vec!["ивановская", "татарстан"]);
    }

    #[test]
    fn test_genitive_krai() {
        assert_eq!(regions("г. Пермь, Пермского края"), vec!["пермский"]);
    }

    #[test]
    fn test_krais() {
        let address = "улица Карла Маркса, 137А, Красноярск,\
                       край Красноярский 660017,\
                       бобр Красноярский мокр. Краснодарский,\
                       кр. Ставропольский,\
                       ул. ленина 15 Ставропольский край ул. ленина 15";

        assert_eq!(
            regions(address),
            vec!["красноярский", "ставропольский", "ставропольский"]
        );
    }

    #[test]
    fn test_hard_cases() {
        let address = "Театральный переулок, 10, Биробиджан,\
                       Еврейская автономная область, 679016,\
                       проспект Ленина, 30/1, Якутск, \
                       Республика Саха (Якутия), 677011,\
                       алтайский край приморский край край край,\
                       проспект Мира, 4, Владикавказ,\
                       Республика Северная Осетия — Алания";

        assert_eq!(
            regions(address),
            vec![
                "еврейская",
                "автономная",
                "саха",
                "алтайский",
                "приморский",
                "край",
                "край",
                "край",
                "северная осетия",
            ]
        );
    }

    #[test]
    fn test_irregular_name_before_designator() {
        assert_eq!(regions("Марий Эл Республика"), vec!["марий эл"]);
        assert_eq!(regions("респ Марий Эл, г. Йошкар-Ола"), vec!["марий эл"]);
    }

    #[test]
    fn test_people_republic() {
        // "народная" itself stands right before a designator, like "автономная".
        assert_eq!(
            regions("Донецкая Народная Республика"),
            vec!["донецкая", "народная"]
        );
    }

    #[test]
    fn test_hyphen_inside_unmatched_compound() {
        // "аа-бб-вв": only the tail pair sits next to the designator.
        assert_eq!(regions("вась-вась-кась республика"), vec!["вась-кась"]);
    }

    #[test]
    fn test_no_regions() {
        assert!(regions("ул. Ленина, д. 5").is_empty());
        assert!(regions("край").is_empty());
    }

    #[test]
    fn test_input_text_not_mutated() {
        let text = normalize("Ивановской области");
        let found = RegionExtractor::new().extract_all(&text);

        assert_eq!(text, "ивановской области");
        assert_eq!(found[0].value, "ивановская");
    }

    fn spans<'a>(text: &'a str) -> Vec<(&'a str, String)> {
        RegionExtractor::new()
            .extract_all(text)
            .into_iter()
            .map(|m| (text.get(m.start..m.end).unwrap(), m.value))
            .collect()
    }

    #[test]
    fn test_offsets_index_input_after_genitive_krai() {
        let text = normalize("Пермского края, Республика Коми");

        assert_eq!(
            spans(&text),
            vec![
                ("пермского", "пермский".to_string()),
                ("коми", "коми".to_string()),
            ]
        );
    }

    #[test]
    fn test_offsets_with_repeated_krai() {
        let text = normalize("Алтайского края край");

        assert_eq!(
            spans(&text),
            vec![
                ("алтайского", "алтайский".to_string()),
                ("края", "край".to_string()),
                ("край", "край".to_string()),
            ]
        );
    }
}
