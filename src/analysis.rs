//! Query analysis: splitting raw query text into tokens.

pub mod token;
pub mod tokenizer;
