//! Core analyzer trait definition.
//!
//! Analyzers are the complete text processing pipeline: char filters
//! normalize the raw text, then a tokenizer splits it into tokens.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Stream
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use termtally::analysis::analyzer::Analyzer;
//! use termtally::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use termtally::analysis::char_filter::lowercase::LowercaseCharFilter;
//! use termtally::analysis::tokenizer::word::WordTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new().unwrap()))
//!     .add_char_filter(Arc::new(LowercaseCharFilter::new()));
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod pipeline;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` to allow analyzers to be shared across
/// thread boundaries.
pub trait Analyzer: Send + Sync {
    /// Process text into a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
