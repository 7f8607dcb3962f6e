//! Core library for finding Russian region markers in free-form addresses.
//!
//! This crate provides:
//! - Address normalization (case, space runs, non-breaking spaces)
//! - Rule-based extraction of postcodes, regions, cities, districts,
//!   settlements and street designators
//! - A cheap `is_address` heuristic
//! - A resolver trait for mapping extracted components to reference data,
//!   with an in-memory implementation
//!
//! ```
//! use regfind_core::RegionFinder;
//!
//! let finder = RegionFinder::new("Ивановской области, г. Иваново, 153000").unwrap();
//! assert_eq!(finder.regions(), vec!["ивановская"]);
//! assert_eq!(finder.postcode_prefixes(), vec!["153"]);
//! assert!(finder.is_address());
//! ```

pub mod address;
pub mod error;
pub mod models;
pub mod resolve;

pub use address::{normalize, ComponentExtractor, ComponentMatch, NormalizedAddress, RegionFinder};
pub use error::{FinderError, ResolveError, Result};
pub use models::address::{AddressComponents, MatchCategory};
pub use models::config::{FinderConfig, ResolverConfig};
pub use resolve::{InMemoryResolver, ReferenceData, RegionResolver, Resolution};
