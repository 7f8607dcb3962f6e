//! Map-backed resolver over reference tables loaded into memory.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{RegionResolver, Resolution};
use crate::address::normalize;
use crate::error::{FinderError, ResolveError};
use crate::models::address::{AddressComponents, MatchCategory};
use crate::models::config::ResolverConfig;

/// Reference tables mapping component values to region codes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    /// Region name (nominative, as extracted) to region code.
    pub regions: HashMap<String, String>,

    /// Three-digit postcode prefix to region code.
    pub postcode_prefixes: HashMap<String, String>,

    /// City name to region code.
    pub cities: HashMap<String, String>,
}

impl ReferenceData {
    /// Parse reference data from JSON.
    pub fn from_json(json: &str) -> Result<Self, ResolveError> {
        serde_json::from_str(json).map_err(|e| ResolveError::Parse(e.to_string()))
    }

    /// Load reference data from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ResolveError> {
        let content = std::fs::read_to_string(path).map_err(|e| ResolveError::Reference {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ResolveError::Reference {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Resolver backed by in-memory hash tables.
///
/// Lookups go category by category: region names, then postcode prefixes,
/// then city names (prefixes first when `prefer_postcode` is set). Inside a
/// category the first value, in order of appearance, that has an entry wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResolver {
    regions: HashMap<String, String>,
    postcode_prefixes: HashMap<String, String>,
    cities: HashMap<String, String>,
    prefer_postcode: bool,
}

impl InMemoryResolver {
    /// Build a resolver; table keys are normalized like address text.
    pub fn new(data: ReferenceData) -> Self {
        Self {
            regions: normalize_keys(data.regions),
            postcode_prefixes: normalize_keys(data.postcode_prefixes),
            cities: normalize_keys(data.cities),
            prefer_postcode: false,
        }
    }

    /// Load reference tables from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ResolveError> {
        let resolver = Self::new(ReferenceData::from_file(path)?);
        debug!(
            "Loaded {} reference entries from {}",
            resolver.len(),
            path.display()
        );
        Ok(resolver)
    }

    /// Build a resolver from configuration.
    pub fn from_config(config: &ResolverConfig) -> crate::Result<Self> {
        let path = config.reference_data.as_deref().ok_or_else(|| {
            FinderError::Config("resolver.reference_data is not set".to_string())
        })?;

        Ok(Self::from_file(path)?.with_prefer_postcode(config.prefer_postcode))
    }

    /// Consult postcode prefixes before region names.
    pub fn with_prefer_postcode(mut self, prefer: bool) -> Self {
        self.prefer_postcode = prefer;
        self
    }

    /// Total number of reference entries.
    pub fn len(&self) -> usize {
        self.regions.len() + self.postcode_prefixes.len() + self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self, category: MatchCategory) -> Option<&HashMap<String, String>> {
        match category {
            MatchCategory::Region => Some(&self.regions),
            MatchCategory::PostcodePrefix3 => Some(&self.postcode_prefixes),
            MatchCategory::City => Some(&self.cities),
            _ => None,
        }
    }

    fn lookup_order(&self) -> [MatchCategory; 3] {
        if self.prefer_postcode {
            [MatchCategory::PostcodePrefix3, MatchCategory::Region, MatchCategory::City]
        } else {
            [MatchCategory::Region, MatchCategory::PostcodePrefix3, MatchCategory::City]
        }
    }
}

impl RegionResolver for InMemoryResolver {
    fn resolve(&self, components: &AddressComponents) -> Result<Resolution, ResolveError> {
        for category in self.lookup_order() {
            let Some(table) = self.table(category) else {
                continue;
            };

            for value in components.get(category) {
                if let Some(code) = table.get(value) {
                    trace!("Resolved {} {:?} to {}", category, value, code);
                    return Ok(Resolution::Resolved {
                        code: code.clone(),
                        category,
                        matched: value.clone(),
                    });
                }
            }
        }

        Ok(Resolution::Unresolved)
    }
}

fn normalize_keys(table: HashMap<String, String>) -> HashMap<String, String> {
    table
        .into_iter()
        .map(|(key, code)| (normalize(key.trim()), code))
        .collect()
}
