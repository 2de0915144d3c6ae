//! Plain-word tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::{ALPHANUM_CLASS, Tokenizer};
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, TermtallyError};

/// A tokenizer that extracts maximal runs of alphabet characters.
///
/// Any character outside the alphabet (punctuation, symbols, whitespace) is
/// a separator and is discarded. This grammar builds the vocabulary for the
/// top-words mode.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(&format!("[{ALPHANUM_CLASS}]+"))
            .map_err(|e| TermtallyError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Word token pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
