//! Error types for the tagsieve library.
//!
//! Query resolution itself never fails: empty queries, oversized queries and
//! queries without a match all pass through unchanged. Errors only surface at
//! the adapter boundary, when a tag dictionary or a resolver configuration is
//! decoded from an external representation.
//!
//! # Examples
//!
//! ```
//! use tagsieve::error::{Result, TagsieveError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TagsieveError::dictionary("top-level value is not an object"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for tagsieve operations.
#[derive(Error, Debug)]
pub enum TagsieveError {
    /// I/O errors (reading dictionaries or configuration from disk)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tag dictionary decoding errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Resolver configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for operations that may fail with TagsieveError.
pub type Result<T> = std::result::Result<T, TagsieveError>;

impl TagsieveError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        TagsieveError::Dictionary(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TagsieveError::Config(msg.into())
    }
}
