//! Compound-token tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::{ALPHANUM_CLASS, Tokenizer};
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, TermtallyError};

/// A tokenizer that absorbs punctuation between alphabet blocks.
///
/// A token is `alnum-block (non-alnum-block alnum-block)*`, where the
/// non-alnum block excludes whitespace. `hello-world`, `hello.world` and
/// `hello+world` each form one token, distinct from `hello` and `world`.
/// Punctuation adjacent to whitespace is never absorbed, and whitespace
/// always separates tokens.
///
/// This grammar builds the vocabulary for word-term lookup, so a search for
/// `hello` cannot accidentally match inside `hello-world`.
#[derive(Clone, Debug)]
pub struct CompoundTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl CompoundTokenizer {
    /// Create a new compound tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(&format!(
            "[{ALPHANUM_CLASS}]+(?:[^\\s{ALPHANUM_CLASS}]+[{ALPHANUM_CLASS}]+)*"
        ))
        .map_err(|e| TermtallyError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(CompoundTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for CompoundTokenizer {
    fn default() -> Self {
        Self::new().expect("Compound token pattern should be valid")
    }
}

impl Tokenizer for CompoundTokenizer {
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
        "compound"
    }
}
