//! Lenient JSON decoding of tag dictionaries.
//!
//! The expected shape is an object keyed by dictionary key:
//!
//! ```json
//! {
//!   "blue_eyes": { "tag": "blue_eyes", "aliases": ["blue-eyes", "aoi-me"] },
//!   "red": {}
//! }
//! ```
//!
//! Only the top level is strict. Inside an entry, a missing or non-string
//! `tag` falls back to the key, a missing or non-array `aliases` becomes an
//! empty list, non-string alias elements are skipped, and an entry that is
//! not an object at all becomes a bare entry named after its key.

use std::fs;
use std::path::Path;

use log::warn;
use serde_json::{Map, Value};

use super::entry::{TagDictionary, TagEntry};
use crate::error::{Result, TagsieveError};

impl TagDictionary {
    /// Decode a dictionary from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_json_value(&value)
    }

    /// Decode a dictionary from an already parsed JSON value.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            TagsieveError::dictionary(format!(
                "expected a JSON object of tag entries, found {}",
                value_kind(value)
            ))
        })?;
        Ok(decode_entries(object))
    }

    /// Load a dictionary from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TagsieveError::dictionary(format!(
                "Failed to read tag dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }
}

fn decode_entries(object: &Map<String, Value>) -> TagDictionary {
    object
        .iter()
        .map(|(key, value)| (key.clone(), decode_entry(key, value)))
        .collect()
}

fn decode_entry(key: &str, value: &Value) -> TagEntry {
    let Some(fields) = value.as_object() else {
        warn!(
            "tag entry '{key}' is {} rather than an object; using the key as its tag",
            value_kind(value)
        );
        return TagEntry::new(key);
    };

    let tag = match fields.get("tag") {
        Some(Value::String(tag)) => tag.clone(),
        _ => key.to_string(),
    };

    let aliases = match fields.get("aliases") {
        Some(Value::Array(items)) => {
            let aliases: Vec<String> = items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect();
            if aliases.len() != items.len() {
                warn!(
                    "tag entry '{key}': skipped {} non-string alias(es)",
                    items.len() - aliases.len()
                );
            }
            aliases
        }
        Some(other) => {
            warn!(
                "tag entry '{key}': aliases is {} rather than an array; ignoring",
                value_kind(other)
            );
            Vec::new()
        }
        None => Vec::new(),
    };

    TagEntry::with_aliases(tag, aliases)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
