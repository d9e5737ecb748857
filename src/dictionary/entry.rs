//! In-memory tag dictionary.

use std::collections::HashSet;

use ahash::AHashMap;
use serde::Serialize;

use super::TagLookup;

/// A tag with its canonical name and alias list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    /// Canonical tag name.
    pub tag: String,
    /// Alternative spellings, in source order. Duplicates are allowed.
    pub aliases: Vec<String>,
}

impl TagEntry {
    /// Create an entry without aliases.
    pub fn new<S: Into<String>>(tag: S) -> Self {
        TagEntry {
            tag: tag.into(),
            aliases: Vec::new(),
        }
    }

    /// Create an entry with aliases.
    pub fn with_aliases<S: Into<String>>(tag: S, aliases: Vec<String>) -> Self {
        TagEntry {
            tag: tag.into(),
            aliases,
        }
    }

    /// Whether `alias` appears in the alias list.
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }

    fn distinct_aliases(&self) -> HashSet<&str> {
        self.aliases.iter().map(String::as_str).collect()
    }
}

/// A mapping from dictionary key to [`TagEntry`].
///
/// Alongside the entries, the dictionary keeps an index from alias text to the
/// number of distinct entries listing it, so alias scoring never scans.
#[derive(Debug, Clone, Default)]
pub struct TagDictionary {
    entries: AHashMap<String, TagEntry>,
    alias_index: AHashMap<String, usize>,
}

impl TagDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the entry it replaced.
    pub fn insert<K: Into<String>>(&mut self, key: K, entry: TagEntry) -> Option<TagEntry> {
        for alias in entry.distinct_aliases() {
            *self.alias_index.entry(alias.to_string()).or_insert(0) += 1;
        }

        let replaced = self.entries.insert(key.into(), entry);
        if let Some(old) = &replaced {
            self.unindex(old);
        }
        replaced
    }

    /// Remove an entry by key.
    pub fn remove(&mut self, key: &str) -> Option<TagEntry> {
        let removed = self.entries.remove(key);
        if let Some(old) = &removed {
            self.unindex(old);
        }
        removed
    }

    fn unindex(&mut self, entry: &TagEntry) {
        for alias in entry.distinct_aliases() {
            if let Some(count) = self.alias_index.get_mut(alias) {
                *count -= 1;
                if *count == 0 {
                    self.alias_index.remove(alias);
                }
            }
        }
    }

    /// Get an entry by key.
    pub fn get(&self, key: &str) -> Option<&TagEntry> {
        self.entries.get(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct entries listing `alias`.
    pub fn alias_match_count(&self, alias: &str) -> usize {
        self.alias_index.get(alias).copied().unwrap_or(0)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, entry)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TagEntry)> {
        self.entries.iter()
    }
}

impl TagLookup for TagDictionary {
    fn contains_key(&self, key: &str) -> bool {
        TagDictionary::contains_key(self, key)
    }

    fn alias_match_count(&self, alias: &str) -> usize {
        TagDictionary::alias_match_count(self, alias)
    }
}

impl FromIterator<(String, TagEntry)> for TagDictionary {
    fn from_iter<I: IntoIterator<Item = (String, TagEntry)>>(iter: I) -> Self {
        let mut dictionary = TagDictionary::new();
        for (key, entry) in iter {
            dictionary.insert(key, entry);
        }
        dictionary
    }
}
