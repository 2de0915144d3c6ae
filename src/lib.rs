//! # Termtally
//!
//! A small text-analysis library that reports term frequencies in a body of
//! UTF-8 text. Given an optional list of search terms it returns the
//! occurrence counts of the maximally-occurring terms; with no terms it
//! returns the most frequent word(s) in the text, ties included.
//!
//! ## Features
//!
//! - Dual tokenization grammars (plain words vs. punctuated compounds)
//! - Whole-token word matching and standalone phrase matching
//! - Tie-inclusive maximum selection with sorted keys
//! - ASCII alphanumerics and Hangul syllables as the token alphabet
//!
//! # Examples
//!
//! ```
//! use termtally::frequency::build_result;
//!
//! let report = build_result("cat cat dog", &[]).unwrap();
//! assert_eq!(serde_json::to_string(&report).unwrap(), r#"{"cat":2}"#);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod frequency;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
