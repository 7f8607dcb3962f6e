//! Address text normalization.

use std::fmt;

use crate::error::{FinderError, Result};

use super::rules::patterns::{MULTI_SPACE, NON_BREAKING_SPACES};

/// Normalized, immutable address text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedAddress(String);

impl NormalizedAddress {
    /// Validate and normalize a raw address.
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(FinderError::Validation(
                "address must not be empty".to_string(),
            ));
        }

        Ok(Self(normalize(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase the text, turn non-breaking spaces into plain spaces and
/// collapse space runs to a single space.
///
/// Non-breaking spaces are replaced before collapsing so that
/// `normalize(normalize(s)) == normalize(s)` holds.
pub fn normalize(raw: &str) -> String {
    let lowered: String = raw
        .to_lowercase()
        .chars()
        .map(|c| if NON_BREAKING_SPACES.contains(&c) { ' ' } else { c })
        .collect();

    MULTI_SPACE.replace_all(&lowered, " ").into_owned()
}
