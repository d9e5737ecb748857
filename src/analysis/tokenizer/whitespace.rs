//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// Bytes treated as token separators: space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// Other Unicode whitespace such as U+3000 or U+00A0 stays inside a token.
const SEPARATORS: [char; 6] = [' ', '\t', '\n', '\x0B', '\x0C', '\r'];

/// Whether `c` separates two query tokens.
fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// A tokenizer that splits text on runs of ASCII whitespace.
///
/// Leading and trailing whitespace never produce empty tokens, so a query made
/// only of whitespace yields no tokens at all.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Split `text` into tokens, collecting them eagerly.
    pub fn split(&self, text: &str) -> Vec<Token> {
        text.split(is_separator)
            .filter(|piece| !piece.is_empty())
            .enumerate()
            .map(|(position, piece)| Token::new(piece, position))
            .collect()
    }

    /// Count tokens without allocating them.
    pub fn count(&self, text: &str) -> usize {
        text.split(is_separator)
            .filter(|piece| !piece.is_empty())
            .count()
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        Box::new(self.split(text).into_iter())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
