//! Resolution of extracted components against reference data.
//!
//! The extraction layer never looks anything up. Callers plug in a
//! [`RegionResolver`] backed by whatever store they keep region, postcode
//! and city tables in.

pub mod memory;

pub use memory::{InMemoryResolver, ReferenceData};

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::models::address::{AddressComponents, MatchCategory};

/// Outcome of resolving one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// A canonical administrative-division code was found.
    Resolved {
        /// Canonical region code.
        code: String,
        /// Category of the component that produced the code.
        category: MatchCategory,
        /// The component value that was looked up.
        matched: String,
    },

    /// Nothing in the reference data matched.
    Unresolved,
}

impl Resolution {
    pub fn code(&self) -> Option<&str> {
        match self {
            Resolution::Resolved { code, .. } => Some(code),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }
}

/// Trait for reference data resolvers.
pub trait RegionResolver {
    /// Map the components of one address to a canonical region.
    fn resolve(&self, components: &AddressComponents) -> Result<Resolution, ResolveError>;
}

impl<R: RegionResolver + ?Sized> RegionResolver for Box<R> {
    fn resolve(&self, components: &AddressComponents) -> Result<Resolution, ResolveError> {
        (**self).resolve(components)
    }
}
