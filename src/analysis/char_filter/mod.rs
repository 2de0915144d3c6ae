//! Char filters that normalize raw text before tokenization.
//!
//! Char filters run ahead of the tokenizer in a
//! [`PipelineAnalyzer`](crate::analysis::analyzer::pipeline::PipelineAnalyzer)
//! and transform the whole input string. The only filter this crate ships is
//! [`lowercase::LowercaseCharFilter`], which performs the one-way
//! case-folding used for matching.

pub mod lowercase;

/// Trait for filters that transform raw text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Transform the input text, returning the filtered text.
    fn filter(&self, text: &str) -> String;

    /// Get the name of this char filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}
