//! Identifiers for auxiliary endpoints.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::codec::conceal_secret;

/// Product tag prefixed to generated ids
pub const DEFAULT_ID_TAG: &str = "Aria2e";

/// Source of `rpcId` values
pub trait IdGenerator {
    /// Next identifier
    fn next_id(&self) -> String;
}

/// Tag + Unix seconds + random fraction, base64-encoded.
///
/// Unique enough for one export; neither stable across calls nor
/// unguessable.
#[derive(Debug, Clone)]
pub struct TimestampIdGenerator {
    tag: String,
}

impl Default for TimestampIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_TAG)
    }
}

impl TimestampIdGenerator {
    /// Create generator with the given product tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// Product tag
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> String {
        let source = format!(
            "{}_{}_{}",
            self.tag,
            chrono::Utc::now().timestamp(),
            rand::random::<f64>()
        );
        conceal_secret(&source)
    }
}

/// Deterministic `<prefix>-1`, `<prefix>-2`, ... ids
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create generator with the given prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}
