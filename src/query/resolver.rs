//! Resolving a raw query into its best tag grouping.

use log::{debug, trace};
use serde::Serialize;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::dictionary::TagLookup;
use crate::error::Result;
use crate::query::config::ResolverConfig;
use crate::query::scorer::{MatchCountScorer, ScoredCandidate, select_best};
use crate::query::segmenter;

/// Why a query was returned unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PassthroughReason {
    /// The query string was empty.
    EmptyQuery,
    /// The query had more tokens than the configured cap.
    TooManyTokens { count: usize, max: usize },
    /// No candidate matched any key or alias.
    NoMatch,
}

/// What happened to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// A candidate won with a positive score.
    Resolved { candidate_index: usize, score: usize },
    /// The original query was returned.
    Passthrough(PassthroughReason),
}

/// The full result of resolving a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The string handed back to the caller.
    pub output: String,
    pub outcome: Outcome,
    /// Every scored candidate in generation order. Empty when the query was
    /// rejected before segmentation.
    pub candidates: Vec<ScoredCandidate>,
}

impl Resolution {
    fn passthrough(query: &str, reason: PassthroughReason, candidates: Vec<ScoredCandidate>) -> Self {
        Resolution {
            output: query.to_string(),
            outcome: Outcome::Passthrough(reason),
            candidates,
        }
    }

    /// The winning candidate, if any.
    pub fn winner(&self) -> Option<&ScoredCandidate> {
        match self.outcome {
            Outcome::Resolved {
                candidate_index, ..
            } => self.candidates.get(candidate_index),
            Outcome::Passthrough(_) => None,
        }
    }

    /// Whether the query came back unchanged because of a fallback.
    pub fn is_passthrough(&self) -> bool {
        matches!(self.outcome, Outcome::Passthrough(_))
    }
}

/// Resolves space-delimited queries into the grouping of units that matches
/// the most dictionary keys and aliases.
///
/// # Examples
///
/// ```
/// use tagsieve::dictionary::{TagDictionary, TagEntry};
/// use tagsieve::query::SpaceQueryResolver;
///
/// let mut dictionary = TagDictionary::new();
/// dictionary.insert("blue-eyes", TagEntry::new("blue_eyes"));
///
/// let resolver = SpaceQueryResolver::new();
/// assert_eq!(resolver.resolve("+blue eyes", &dictionary), "+blue-eyes");
/// assert_eq!(resolver.resolve("red hat", &dictionary), "red hat");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpaceQueryResolver {
    config: ResolverConfig,
    tokenizer: WhitespaceTokenizer,
    scorer: MatchCountScorer,
}

impl SpaceQueryResolver {
    /// Create a resolver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver from a validated configuration.
    pub fn with_config(config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(SpaceQueryResolver {
            scorer: MatchCountScorer::new(config.modifier_mode),
            tokenizer: WhitespaceTokenizer::new(),
            config,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `query`, returning the rewritten query or `query` unchanged.
    pub fn resolve<L: TagLookup + ?Sized>(&self, query: &str, lookup: &L) -> String {
        self.explain(query, lookup).output
    }

    /// Resolve `query` and report how the result was reached.
    pub fn explain<L: TagLookup + ?Sized>(&self, query: &str, lookup: &L) -> Resolution {
        if query.is_empty() {
            return Resolution::passthrough(query, PassthroughReason::EmptyQuery, Vec::new());
        }

        // Leading or trailing whitespace adds no token here, so a query with
        // exactly `max_tokens` words and a leading space is still searched.
        let count = self.tokenizer.count(query);
        if count > self.config.max_tokens {
            debug!(
                "query has {count} tokens, over the cap of {}; passing through",
                self.config.max_tokens
            );
            let reason = PassthroughReason::TooManyTokens {
                count,
                max: self.config.max_tokens,
            };
            return Resolution::passthrough(query, reason, Vec::new());
        }

        let tokens: Vec<Token> = self.tokenizer.tokenize(query).collect();
        let candidates: Vec<ScoredCandidate> = segmenter::generate(&tokens)
            .map(|grouping| self.scorer.score(grouping, lookup))
            .collect();

        for (index, candidate) in candidates.iter().enumerate() {
            trace!("candidate {index}: '{}' scored {}", candidate.render(), candidate.score);
        }

        match select_best(&candidates) {
            Some(index) => {
                let winner = &candidates[index];
                let output = winner.render();
                let score = winner.score;
                debug!(
                    "resolved '{query}' to '{output}' (candidate {index} of {}, score {score})",
                    candidates.len()
                );
                Resolution {
                    output,
                    outcome: Outcome::Resolved {
                        candidate_index: index,
                        score,
                    },
                    candidates,
                }
            }
            None => {
                debug!("no candidate of '{query}' matched the dictionary; passing through");
                Resolution::passthrough(query, PassthroughReason::NoMatch, candidates)
            }
        }
    }
}
