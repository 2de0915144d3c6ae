//! Frequency analysis over tokenized text.
//!
//! This is the core of the crate: a single pure pass over the input that
//! either counts caller-supplied search terms or finds the most frequent
//! words, then reduces the candidates to the tie-inclusive maximum.
//!
//! The entry point is [`build_result`]; see [`report::AnalysisReport`] for
//! the result shape.

pub mod counter;
pub mod matcher;
pub mod report;
pub mod selector;

pub use report::{AnalysisReport, EMPTY_TEXT_MESSAGE, build_result};

use std::sync::Arc;

use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::tokenizer::compound::CompoundTokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::Result;

/// Analyzer for the top-words vocabulary: case-folding plus the plain-word
/// grammar.
pub(crate) fn word_analyzer() -> Result<PipelineAnalyzer> {
    Ok(PipelineAnalyzer::new(Arc::new(WordTokenizer::new()?))
        .add_char_filter(Arc::new(LowercaseCharFilter::new()))
        .with_name("word"))
}

/// Analyzer for the word-term vocabulary: case-folding plus the
/// compound-token grammar.
pub(crate) fn compound_analyzer() -> Result<PipelineAnalyzer> {
    Ok(PipelineAnalyzer::new(Arc::new(CompoundTokenizer::new()?))
        .add_char_filter(Arc::new(LowercaseCharFilter::new()))
        .with_name("compound"))
}
