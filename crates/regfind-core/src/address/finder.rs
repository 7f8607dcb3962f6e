//! Per-address extractor combining all component rules.

use tracing::{debug, trace};

use crate::error::Result;
use crate::models::address::{AddressComponents, MatchCategory};
use crate::resolve::{RegionResolver, Resolution};

use super::normalize::NormalizedAddress;
use super::rules::{
    CityExtractor, ComponentExtractor, ComponentMatch, DistrictExtractor, PostcodeExtractor,
    RegionExtractor, SettlementExtractor, StreetMarkerDetector,
};

/// Finds region markers in a single address.
///
/// The address is normalized once on construction; every query after that
/// is a read-only function of the normalized text, so a finder can be
/// shared between threads freely.
#[derive(Debug, Clone)]
pub struct RegionFinder {
    address: NormalizedAddress,
}

impl RegionFinder {
    /// Create a finder for `address`.
    ///
    /// Fails with [`FinderError::Validation`](crate::FinderError::Validation)
    /// if the address is empty.
    pub fn new(address: &str) -> Result<Self> {
        let address = NormalizedAddress::new(address)?;
        debug!("Normalized address to {} bytes", address.as_str().len());

        Ok(Self { address })
    }

    /// The normalized address text.
    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// Matches with positions for one category.
    pub fn matches(&self, category: MatchCategory) -> Vec<ComponentMatch> {
        let text = self.address.as_str();

        let found = match category {
            MatchCategory::Postcode => PostcodeExtractor::full().extract_all(text),
            MatchCategory::PostcodePrefix3 => PostcodeExtractor::prefix3().extract_all(text),
            MatchCategory::Region => RegionExtractor::new().extract_all(text),
            MatchCategory::City => CityExtractor::new().extract_all(text),
            MatchCategory::District => DistrictExtractor::new().extract_all(text),
            MatchCategory::Settlement => SettlementExtractor::new().extract_all(text),
            MatchCategory::StreetMarker => StreetMarkerDetector::new().extract_all(text),
        };

        trace!("Found {} {} matches", found.len(), category);
        found
    }

    /// Matched values for one category, in order of appearance.
    pub fn find(&self, category: MatchCategory) -> Vec<String> {
        self.matches(category).into_iter().map(|m| m.value).collect()
    }

    /// Six-digit postcodes.
    pub fn postcodes(&self) -> Vec<String> {
        self.find(MatchCategory::Postcode)
    }

    /// First three digits of every postcode.
    pub fn postcode_prefixes(&self) -> Vec<String> {
        self.find(MatchCategory::PostcodePrefix3)
    }

    /// Region names, genitive phrasing normalized to the nominative.
    pub fn regions(&self) -> Vec<String> {
        self.find(MatchCategory::Region)
    }

    pub fn cities(&self) -> Vec<String> {
        self.find(MatchCategory::City)
    }

    pub fn districts(&self) -> Vec<String> {
        self.find(MatchCategory::District)
    }

    pub fn settlements(&self) -> Vec<String> {
        self.find(MatchCategory::Settlement)
    }

    /// Street designators as they appear in the text.
    pub fn street_markers(&self) -> Vec<String> {
        self.find(MatchCategory::StreetMarker)
    }

    /// True if the address has any street designator.
    pub fn has_street_markers(&self) -> bool {
        StreetMarkerDetector::new().is_present(self.address.as_str())
    }

    /// Cheap check for whether the text looks like an address at all.
    ///
    /// The postcode signal is taken from the three-digit prefix query.
    pub fn is_address(&self) -> bool {
        self.has_street_markers()
            || self.has_any(MatchCategory::Region)
            || self.has_any(MatchCategory::PostcodePrefix3)
            || self.has_any(MatchCategory::City)
            || self.has_any(MatchCategory::District)
            || self.has_any(MatchCategory::Settlement)
    }

    fn has_any(&self, category: MatchCategory) -> bool {
        !self.matches(category).is_empty()
    }

    /// Run every query and collect the results.
    pub fn components(&self) -> AddressComponents {
        let components = AddressComponents {
            normalized: self.address.as_str().to_string(),
            postcodes: self.postcodes(),
            postcode_prefixes: self.postcode_prefixes(),
            regions: self.regions(),
            cities: self.cities(),
            districts: self.districts(),
            settlements: self.settlements(),
            street_markers: self.street_markers(),
            is_address: self.is_address(),
        };

        debug!(
            "Extracted {} regions, {} postcodes, {} cities",
            components.regions.len(),
            components.postcodes.len(),
            components.cities.len()
        );

        components
    }

    /// Hand the extracted components to a resolver.
    pub fn resolve_with<R>(&self, resolver: &R) -> Result<Resolution>
    where
        R: RegionResolver + ?Sized,
    {
        let resolution = resolver.resolve(&self.components())?;
        debug!("Resolution: {:?}", resolution);

        Ok(resolution)
    }
}
