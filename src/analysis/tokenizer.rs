//! Tokenizer implementations for query analysis.
//!
//! Only whitespace splitting is supported: a query's tag boundaries are
//! recovered later by the segmenter, never by the tokenizer.

use crate::analysis::token::TokenStream;

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
