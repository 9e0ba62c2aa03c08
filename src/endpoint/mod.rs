//! Endpoint records as kept by the connection manager.

use serde::{Deserialize, Deserializer, Serialize};

/// Pattern that marks a record as the primary candidate
pub const WILDCARD_PATTERN: &str = "*";

/// A named RPC endpoint with its routing patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRecord {
    /// Display label
    pub name: String,
    /// RPC URL, optionally carrying the secret as its password
    pub url: String,
    /// Comma-joined glob routes (e.g. `*,host.example.com/*`)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pattern: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl EndpointRecord {
    /// Create a record
    pub fn new(name: impl Into<String>, url: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            pattern: pattern.into(),
        }
    }

    /// Individual route patterns, split on `,` as stored (no trimming).
    /// An empty pattern field yields nothing.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.pattern.split(',').filter(|p| !p.is_empty())
    }

    /// Whether the pattern set contains the literal wildcard.
    ///
    /// Only an exact `*` counts: `" *"` from `"a.com/*, *"` does not.
    pub fn is_primary_candidate(&self) -> bool {
        self.patterns().any(|p| p == WILDCARD_PATTERN)
    }
}

/// Index of the primary record: the first wildcard record, else 0.
///
/// Returns `None` only for an empty list.
pub fn primary_index(records: &[EndpointRecord]) -> Option<usize> {
    if records.is_empty() {
        return None;
    }
    Some(
        records
            .iter()
            .position(EndpointRecord::is_primary_candidate)
            .unwrap_or(0),
    )
}
