//! # tagsieve
//!
//! Resolves a free-form, space-delimited search query into the best-matching
//! sequence of known tags, where tags may span several words.
//!
//! A query like `blue eyes +long hair` is ambiguous: every gap between two
//! words may either separate two tags or sit inside one multi-word tag
//! (`blue-eyes`). tagsieve enumerates every grouping, scores each one by how
//! many of its units match a dictionary key or alias, and returns the best.
//!
//! ## Features
//!
//! - Exhaustive, ordered segmentation with a first-max tie-break
//! - Prefix modifiers (`+`, `-`, `+-`, `*`) preserved through resolution
//! - Lenient JSON dictionary decoding with process-wide reuse
//! - A C ABI entry point for embedding in other runtimes
//!
//! ## Example
//!
//! ```
//! let dictionary = r#"{"blue_eyes": {"tag": "blue_eyes", "aliases": ["blue-eyes"]}}"#;
//! let resolved = tagsieve::resolve_query_json("blue eyes", dictionary).unwrap();
//! assert_eq!(resolved, "blue-eyes");
//! ```

pub mod analysis;
pub mod dictionary;
pub mod error;
pub mod ffi;
pub mod query;

pub mod prelude {
    pub use crate::dictionary::{DictionaryCache, TagDictionary, TagEntry, TagLookup};
    pub use crate::error::{Result, TagsieveError};
    pub use crate::query::{Resolution, ResolverConfig, SpaceQueryResolver};
    pub use crate::{resolve_query, resolve_query_json};
}

use crate::dictionary::{DictionaryCache, TagLookup};
use crate::error::Result;
use crate::query::SpaceQueryResolver;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve `query` against an in-memory dictionary using the default
/// configuration.
pub fn resolve_query<L: TagLookup + ?Sized>(query: &str, dictionary: &L) -> String {
    SpaceQueryResolver::new().resolve(query, dictionary)
}

/// Resolve `query` against a JSON-encoded dictionary.
///
/// Decoded dictionaries are reused across calls through
/// [`DictionaryCache::global`]. An empty query is returned without touching
/// the dictionary; otherwise this fails only when `dictionary_json` cannot be
/// decoded.
pub fn resolve_query_json(query: &str, dictionary_json: &str) -> Result<String> {
    if query.is_empty() {
        return Ok(String::new());
    }
    let dictionary = DictionaryCache::global().get_or_decode(dictionary_json)?;
    Ok(resolve_query(query, dictionary.as_ref()))
}
