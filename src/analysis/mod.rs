//! Text analysis pipeline: char filters, tokenizers, and analyzers.
//!
//! Analysis turns raw text into a stream of countable tokens. The pipeline
//! has two stages: char filters normalize the raw text (case-folding), then
//! a tokenizer splits it into [`token::Token`]s.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod tokenizer;
