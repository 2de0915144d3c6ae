//! Tokenizer implementations for text analysis.
//!
//! Two tokenization grammars are provided, both over the same alphabet of
//! ASCII digits, ASCII letters, and Hangul syllables:
//!
//! - [`word::WordTokenizer`] - maximal runs of alphabet characters; every
//!   other character separates tokens
//! - [`compound::CompoundTokenizer`] - like the word grammar, but
//!   punctuation runs strictly *between* two alphabet blocks are absorbed
//!   into a single token (`hello-world` is one token, distinct from
//!   `hello` and `world`)
//!
//! # Examples
//!
//! ```
//! use termtally::analysis::tokenizer::Tokenizer;
//! use termtally::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Character class (regex body) of the token alphabet: ASCII digits, ASCII
/// letters, and Hangul syllables.
pub(crate) const ALPHANUM_CLASS: &str = "0-9A-Za-z가-힣";

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod compound;
pub mod word;
