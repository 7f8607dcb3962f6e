//! Address component data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of a recognized address component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCategory {
    /// Full six-digit postal code.
    Postcode,

    /// First three digits of a postal code.
    #[serde(rename = "postcode_prefix3")]
    PostcodePrefix3,

    /// Region, republic, krai or okrug name.
    Region,

    /// City name following a "г." / "город" marker.
    City,

    /// District (raion) name.
    District,

    /// Village or urban-type settlement name.
    Settlement,

    /// Street-type designator (улица, пр-кт, ...).
    StreetMarker,
}

impl MatchCategory {
    /// All categories, in reporting order.
    pub const ALL: [MatchCategory; 7] = [
        MatchCategory::Postcode,
        MatchCategory::PostcodePrefix3,
        MatchCategory::Region,
        MatchCategory::City,
        MatchCategory::District,
        MatchCategory::Settlement,
        MatchCategory::StreetMarker,
    ];

    /// Stable identifier used in JSON output and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchCategory::Postcode => "postcode",
            MatchCategory::PostcodePrefix3 => "postcode_prefix3",
            MatchCategory::Region => "region",
            MatchCategory::City => "city",
            MatchCategory::District => "district",
            MatchCategory::Settlement => "settlement",
            MatchCategory::StreetMarker => "street_marker",
        }
    }
}

impl fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase().replace('-', "_");

        MatchCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Every component found in one address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponents {
    /// Normalized address text the components were found in.
    pub normalized: String,

    pub postcodes: Vec<String>,

    pub postcode_prefixes: Vec<String>,

    pub regions: Vec<String>,

    pub cities: Vec<String>,

    pub districts: Vec<String>,

    pub settlements: Vec<String>,

    /// Street designators as they appear in the text.
    pub street_markers: Vec<String>,

    /// Aggregate address heuristic.
    pub is_address: bool,
}

impl AddressComponents {
    /// Matches for a single category.
    pub fn get(&self, category: MatchCategory) -> &[String] {
        match category {
            MatchCategory::Postcode => &self.postcodes,
            MatchCategory::PostcodePrefix3 => &self.postcode_prefixes,
            MatchCategory::Region => &self.regions,
            MatchCategory::City => &self.cities,
            MatchCategory::District => &self.districts,
            MatchCategory::Settlement => &self.settlements,
            MatchCategory::StreetMarker => &self.street_markers,
        }
    }

    /// True when no category matched anything.
    pub fn is_empty(&self) -> bool {
        MatchCategory::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}
