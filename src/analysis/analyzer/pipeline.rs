//! Pipeline analyzer that combines char filters with a tokenizer.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that applies char filters in order, then
/// tokenizes the filtered text.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the char filters used by this analyzer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut filtered_text = text.to_string();
        for char_filter in &self.char_filters {
            filtered_text = char_filter.filter(&filtered_text);
        }

        self.tokenizer.tokenize(&filtered_text)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|cf| cf.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
    use crate::analysis::token::Token;
    use crate::analysis::tokenizer::compound::CompoundTokenizer;
    use crate::analysis::tokenizer::word::WordTokenizer;

    #[test]
    fn test_lowercase_word_pipeline() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new().unwrap()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()));

        let tokens: Vec<Token> = analyzer.analyze("The Quick FOX").unwrap().collect();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["the", "quick", "fox"]);
    }

    #[test]
    fn test_lowercase_compound_pipeline() {
        let analyzer = PipelineAnalyzer::new(Arc::new(CompoundTokenizer::new().unwrap()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()));

        let tokens: Vec<Token> = analyzer.analyze("Hello-World hello").unwrap().collect();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["hello-world", "hello"]);
    }

    #[test]
    fn test_no_filters() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new().unwrap()));
        let tokens: Vec<Token> = analyzer.analyze("Mixed Case").unwrap().collect();
        assert_eq!(tokens[0].text, "Mixed");
    }
}
