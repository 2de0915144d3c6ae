//! Lowercase char filter implementation.
//!
//! Case-folds the whole input before tokenization. Folding the raw text
//! (rather than individual tokens) matters for characters whose lowercase
//! form changes alphabet membership, e.g. the Kelvin sign folding to `k`.

use super::CharFilter;

/// A char filter that lower-cases the entire input text.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
