//! Token types for query analysis.
//!
//! A [`Token`] is one whitespace-delimited piece of a raw query, tagged with
//! its position so segmenter spans map back onto the token sequence.
//!
//! # Examples
//!
//! ```
//! use tagsieve::analysis::token::Token;
//!
//! let token = Token::new("eyes", 1);
//! assert_eq!(token.text, "eyes");
//! assert_eq!(token.position, 1);
//! ```

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// A token stream represents a sequence of tokens produced by a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
