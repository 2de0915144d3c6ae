//! Error types for the termtally library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`TermtallyError`] enum. An input with nothing to count is *not*
//! an error here: that outcome is a data value
//! ([`AnalysisReport::Error`](crate::frequency::AnalysisReport)), so the
//! analysis entry point only fails on infrastructure faults.
//!
//! # Examples
//!
//! ```
//! use termtally::error::{Result, TermtallyError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TermtallyError::analysis("invalid pattern"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for termtally operations.
#[derive(Error, Debug)]
pub enum TermtallyError {
    /// I/O errors (reading input files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, pattern compilation)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with [`TermtallyError`].
pub type Result<T> = std::result::Result<T, TermtallyError>;

impl TermtallyError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TermtallyError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TermtallyError::Other(msg.into())
    }
}
