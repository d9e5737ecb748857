//! Tag dictionaries and the lookup seam used by the resolver.
//!
//! The resolver only needs two questions answered about a unit: is it a
//! dictionary key, and how many entries list it as an alias. [`TagLookup`]
//! captures exactly that, so any read-only representation can back a
//! resolution. [`TagDictionary`] is the in-memory implementation, built
//! directly or decoded from JSON by the [`json`] adapter.

pub mod cache;
pub mod entry;
pub mod json;

use std::collections::HashMap;

pub use cache::DictionaryCache;
pub use entry::{TagDictionary, TagEntry};

/// Read-only tag lookup used while scoring candidates.
pub trait TagLookup {
    /// Whether `key` is a dictionary key.
    fn contains_key(&self, key: &str) -> bool;

    /// Number of distinct entries whose alias list contains `alias` exactly.
    fn alias_match_count(&self, alias: &str) -> usize;
}

impl TagLookup for HashMap<String, TagEntry> {
    fn contains_key(&self, key: &str) -> bool {
        HashMap::contains_key(self, key)
    }

    fn alias_match_count(&self, alias: &str) -> usize {
        self.values().filter(|entry| entry.has_alias(alias)).count()
    }
}

impl<L: TagLookup + ?Sized> TagLookup for &L {
    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }

    fn alias_match_count(&self, alias: &str) -> usize {
        (**self).alias_match_count(alias)
    }
}
