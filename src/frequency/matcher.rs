//! Search-term matching against a text.
//!
//! A [`TermMatcher`] is built once per text and resolves each
//! caller-supplied term to an occurrence count. Terms without whitespace
//! are looked up as whole tokens in the compound-token vocabulary; terms
//! with whitespace are matched as standalone literal phrases.

use ahash::AHashMap;
use regex::Regex;

use crate::analysis::analyzer::Analyzer;
use crate::error::{Result, TermtallyError};
use crate::frequency::compound_analyzer;
use crate::frequency::counter::count_occurrences;

/// Resolves search terms to occurrence counts over one text.
///
/// The compound-token vocabulary is built once and shared by all word
/// terms; phrase terms scan the case-folded text directly.
#[derive(Debug)]
pub struct TermMatcher {
    /// The case-folded input text, used for phrase scans
    folded: String,
    /// Compound-token vocabulary: token → occurrence count
    vocabulary: AHashMap<String, u64>,
}

impl TermMatcher {
    /// Build a matcher for the given text.
    pub fn new(text: &str) -> Result<Self> {
        let analyzer = compound_analyzer()?;
        let vocabulary = count_occurrences(analyzer.analyze(text)?);

        Ok(TermMatcher {
            folded: text.to_lowercase(),
            vocabulary,
        })
    }

    /// Resolve every usable term to its occurrence count.
    ///
    /// Terms are trimmed and case-folded for matching; terms that are empty
    /// after trimming are skipped entirely. The returned map is keyed by the
    /// ORIGINAL caller-supplied strings, so duplicate originals collapse to
    /// one entry (last write wins).
    pub fn match_terms(&self, terms: &[String]) -> Result<AHashMap<String, u64>> {
        let mut counts = AHashMap::new();

        for original in terms {
            let term = original.trim().to_lowercase();
            if term.is_empty() {
                continue;
            }

            let count = if term.contains(char::is_whitespace) {
                self.count_standalone_phrase(&term)?
            } else {
                self.vocabulary.get(&term).copied().unwrap_or(0)
            };
            counts.insert(original.clone(), count);
        }

        Ok(counts)
    }

    /// Count non-overlapping occurrences of `phrase` in the folded text
    /// that are bounded by start/end of text or whitespace on both sides.
    ///
    /// A match that fails the boundary check does not consume text: the
    /// scan resumes one character past its start, so a later overlapping
    /// occurrence can still be found.
    fn count_standalone_phrase(&self, phrase: &str) -> Result<u64> {
        let pattern = Regex::new(&regex::escape(phrase))
            .map_err(|e| TermtallyError::analysis(format!("Invalid phrase pattern: {e}")))?;

        let mut count = 0;
        let mut at = 0;
        while let Some(mat) = pattern.find_at(&self.folded, at) {
            if self.is_standalone(mat.start(), mat.end()) {
                count += 1;
                at = mat.end();
            } else {
                let step = self.folded[mat.start()..]
                    .chars()
                    .next()
                    .map_or(1, |c| c.len_utf8());
                at = mat.start() + step;
            }
        }

        Ok(count)
    }

    /// A match is standalone when it is not abutted by a non-whitespace
    /// character on either side.
    fn is_standalone(&self, start: usize, end: usize) -> bool {
        let before_ok = self.folded[..start]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
        let after_ok = self.folded[end..]
            .chars()
            .next()
            .is_none_or(char::is_whitespace);
        before_ok && after_ok
    }

    /// Get the compound-token vocabulary built from the text.
    pub fn vocabulary(&self) -> &AHashMap<String, u64> {
        &self.vocabulary
    }
}
