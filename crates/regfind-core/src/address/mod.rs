//! Address component extraction.

mod finder;
pub mod normalize;
pub mod rules;

pub use finder::RegionFinder;
pub use normalize::{normalize, NormalizedAddress};
pub use rules::{ComponentExtractor, ComponentMatch};
