//! Analysis orchestration and the report value it produces.
//!
//! [`build_result`] is the single entry point of the core. It is a pure
//! function of its inputs: no state survives a call, and identical inputs
//! always produce an identical [`AnalysisReport`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::frequency::counter::count_occurrences;
use crate::frequency::matcher::TermMatcher;
use crate::frequency::selector::max_entries;
use crate::frequency::word_analyzer;

/// Fixed message reported when there is nothing to count.
pub const EMPTY_TEXT_MESSAGE: &str = "문자가 없습니다";

/// Outcome of a frequency analysis.
///
/// Serializes untagged: the error case renders as `{"error": "..."}` and
/// the count case as a plain JSON object with keys in ascending order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    /// Nothing to count: empty text, all-blank terms, or no alphabet
    /// characters at all.
    Error {
        /// The fixed error message
        error: String,
    },
    /// The maximal-count entries, keys in ascending codepoint order.
    Counts(BTreeMap<String, u64>),
}

impl AnalysisReport {
    /// The "no characters" report.
    pub fn empty_text() -> Self {
        AnalysisReport::Error {
            error: EMPTY_TEXT_MESSAGE.to_string(),
        }
    }

    /// Number of entries this report renders (the error value counts as
    /// one).
    pub fn len(&self) -> usize {
        match self {
            AnalysisReport::Error { .. } => 1,
            AnalysisReport::Counts(counts) => counts.len(),
        }
    }

    /// Check if this report renders no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if this is the error value.
    pub fn is_error(&self) -> bool {
        matches!(self, AnalysisReport::Error { .. })
    }
}

/// How a single call resolves: explicit term matching when any supplied
/// term is non-blank, otherwise the top-words scan. Never a hybrid.
#[derive(Debug)]
enum TallyMode<'a> {
    MatchTerms(&'a [String]),
    TopWords,
}

impl<'a> TallyMode<'a> {
    fn resolve(terms: &'a [String]) -> Self {
        if terms.iter().any(|t| !t.trim().is_empty()) {
            TallyMode::MatchTerms(terms)
        } else {
            TallyMode::TopWords
        }
    }
}

/// Analyze `text` and produce a report.
///
/// With at least one non-blank term, every supplied term is resolved to an
/// occurrence count and the result keeps only the maximally-occurring
/// terms. With no usable terms, the result keeps the most frequent plain
/// word(s) in the text. Ties are always included and keys are sorted
/// ascending.
///
/// The outer `Result` only fails on infrastructure faults (pattern
/// compilation); "nothing to count" is reported as
/// [`AnalysisReport::Error`], never as an `Err`.
///
/// # Examples
///
/// ```
/// use termtally::frequency::{AnalysisReport, build_result};
///
/// let report = build_result("cat cat dog", &[]).unwrap();
/// assert!(!report.is_error());
///
/// let report = build_result("   ", &[]).unwrap();
/// assert!(report.is_error());
/// ```
pub fn build_result(text: &str, terms: &[String]) -> Result<AnalysisReport> {
    if text.trim().is_empty() {
        return Ok(AnalysisReport::empty_text());
    }

    let counts = match TallyMode::resolve(terms) {
        TallyMode::MatchTerms(terms) => {
            let matcher = TermMatcher::new(text)?;
            matcher.match_terms(terms)?
        }
        TallyMode::TopWords => {
            let analyzer = word_analyzer()?;
            count_occurrences(analyzer.analyze(text)?)
        }
    };

    if counts.is_empty() {
        return Ok(AnalysisReport::empty_text());
    }

    Ok(AnalysisReport::Counts(max_entries(&counts)))
}
