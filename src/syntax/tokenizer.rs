//! Source tokenizers
//!
//! The highlighter only needs an ordered list of raw token strings.
//! Anything that can split text on whitespace and peel punctuation off
//! into separate tokens can stand in via the `Tokenizer` trait.

use log::trace;
use regex::Regex;

use crate::error::Result;

/// Splits source text into raw token strings
pub trait Tokenizer: Send + Sync {
    /// Split `source` into tokens, in order
    ///
    /// Blank input must produce an empty vector.
    fn tokenize(&self, source: &str) -> Result<Vec<String>>;
}

/// Token pattern, tried left to right at each position:
/// digit-led runs (dots and trailing word characters included), words,
/// two-character operators, then any single non-whitespace character.
const WORD_PATTERN: &str = r"\d[\d.]*\w*|\w+|\*\*|==|!=|>=|<=|\S";

/// Regex-driven word/punctuation splitter
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    pattern: Regex,
}

impl WordTokenizer {
    /// Create the default tokenizer
    pub fn new() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    /// Create a tokenizer from a custom token pattern
    ///
    /// Every non-overlapping match becomes a token; unmatched text is dropped.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, source: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = self
            .pattern
            .find_iter(source)
            .map(|m| m.as_str().to_string())
            .collect();
        trace!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
        Ok(tokens)
    }
}
