//! Configuration for query resolution.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TagsieveError};
use crate::query::modifier::ModifierMode;

/// Default cap on the number of query tokens searched.
pub const DEFAULT_MAX_TOKENS: usize = 10;

/// Hard upper bound accepted for `max_tokens`.
pub const MAX_TOKENS_LIMIT: usize = 20;

/// Configuration for [`crate::query::SpaceQueryResolver`].
///
/// Defaults: a 10-token cap and sequential modifier stripping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Queries with more tokens than this pass through unchanged.
    ///
    /// Candidate count doubles with every token, so this is the only bound on
    /// the work done per query.
    pub max_tokens: usize,

    /// How modifier prefixes are stripped from units.
    pub modifier_mode: ModifierMode,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            max_tokens: DEFAULT_MAX_TOKENS,
            modifier_mode: ModifierMode::Sequential,
        }
    }
}

impl ResolverConfig {
    /// Set the token cap.
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the modifier detection mode.
    pub fn with_modifier_mode(mut self, mode: ModifierMode) -> Self {
        self.modifier_mode = mode;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_tokens == 0 {
            return Err(TagsieveError::config("max_tokens must be at least 1"));
        }
        if self.max_tokens > MAX_TOKENS_LIMIT {
            return Err(TagsieveError::config(format!(
                "max_tokens must not exceed {MAX_TOKENS_LIMIT}, got {}",
                self.max_tokens
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: ResolverConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
