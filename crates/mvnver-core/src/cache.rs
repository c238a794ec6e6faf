//! Memoizing version parser.
//!
//! A [`VersionCache`] is an explicit object owned by the caller, so separate
//! callers (and tests) never share parsed state by accident.

use dashmap::DashMap;

use crate::version::Version;

/// Concurrent literal → [`Version`] cache.
#[derive(Debug, Default)]
pub struct VersionCache {
    entries: DashMap<String, Version>,
}

impl VersionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached version for `literal`, parsing it on first use.
    pub fn get(&self, literal: &str) -> Version {
        if let Some(hit) = self.entries.get(literal) {
            return hit.value().clone();
        }
        self.entries
            .entry(literal.to_string())
            .or_insert_with(|| Version::parse(literal))
            .value()
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
