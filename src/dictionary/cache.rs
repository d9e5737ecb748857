//! Reuse of decoded dictionaries across calls.
//!
//! Hosts commonly pass the same dictionary JSON with every query. Decoding it
//! is far more expensive than resolving a query, so decoded dictionaries are
//! kept keyed by a CRC32 of the source text. A hit also compares the stored
//! source, so two sources sharing a checksum never alias each other.

use std::collections::VecDeque;
use std::sync::Arc;

use ahash::AHashMap;
use lazy_static::lazy_static;
use log::debug;
use parking_lot::RwLock;

use super::entry::TagDictionary;
use crate::error::Result;

/// Number of dictionaries kept by [`DictionaryCache::default`].
pub const DEFAULT_CACHE_CAPACITY: usize = 8;

lazy_static! {
    static ref GLOBAL_CACHE: DictionaryCache = DictionaryCache::default();
}

#[derive(Debug)]
struct CachedDictionary {
    source: Arc<str>,
    dictionary: Arc<TagDictionary>,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: AHashMap<u32, CachedDictionary>,
    /// Checksums in insertion order, oldest first.
    order: VecDeque<u32>,
}

/// A bounded cache of decoded tag dictionaries.
#[derive(Debug)]
pub struct DictionaryCache {
    capacity: usize,
    state: RwLock<CacheState>,
}

impl Default for DictionaryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl DictionaryCache {
    /// Create a cache holding at most `capacity` dictionaries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        DictionaryCache {
            capacity: capacity.max(1),
            state: RwLock::new(CacheState::default()),
        }
    }

    /// The process-wide cache used by [`crate::resolve_query_json`].
    pub fn global() -> &'static DictionaryCache {
        &GLOBAL_CACHE
    }

    /// Return the decoded dictionary for `source`, decoding it on a miss.
    pub fn get_or_decode(&self, source: &str) -> Result<Arc<TagDictionary>> {
        let checksum = crc32fast::hash(source.as_bytes());

        if let Some(cached) = self.state.read().entries.get(&checksum)
            && &*cached.source == source
        {
            return Ok(Arc::clone(&cached.dictionary));
        }

        let dictionary = Arc::new(TagDictionary::from_json_str(source)?);
        debug!(
            "decoded tag dictionary with {} entries (checksum {checksum:08x})",
            dictionary.len()
        );

        let mut state = self.state.write();
        if state.entries.contains_key(&checksum) {
            state.order.retain(|&c| c != checksum);
        } else {
            while state.entries.len() >= self.capacity {
                match state.order.pop_front() {
                    Some(oldest) => {
                        state.entries.remove(&oldest);
                    }
                    None => break,
                }
            }
        }
        state.order.push_back(checksum);
        state.entries.insert(
            checksum,
            CachedDictionary {
                source: Arc::from(source),
                dictionary: Arc::clone(&dictionary),
            },
        );

        Ok(dictionary)
    }

    /// Number of cached dictionaries.
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached dictionary.
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.entries.clear();
        state.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: &str = r#"{"red": {"tag": "red"}}"#;
    const BLUE: &str = r#"{"blue": {"tag": "blue"}}"#;

    #[test]
    fn test_hit_returns_same_dictionary() {
        let cache = DictionaryCache::new(2);
        let first = cache.get_or_decode(RED).unwrap();
        let second = cache.get_or_decode(RED).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_oldest_is_evicted() {
        let cache = DictionaryCache::new(1);
        let red = cache.get_or_decode(RED).unwrap();
        cache.get_or_decode(BLUE).unwrap();
        assert_eq!(cache.len(), 1);

        let red_again = cache.get_or_decode(RED).unwrap();
        assert!(!Arc::ptr_eq(&red, &red_again));
        assert!(red_again.contains_key("red"));
    }

    #[test]
    fn test_decode_failure_is_not_cached() {
        let cache = DictionaryCache::default();
        assert!(cache.get_or_decode("[]").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = DictionaryCache::default();
        cache.get_or_decode(RED).unwrap();
        cache.get_or_decode(BLUE).unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
