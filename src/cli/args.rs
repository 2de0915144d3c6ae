//! Command line argument parsing for the termtally CLI using clap.

use std::path::PathBuf;

use clap::Parser;

/// Termtally - report the most frequent words or search-term counts in a text
#[derive(Parser, Debug, Clone)]
#[command(name = "termtally")]
#[command(about = "Report the most frequent words or search-term counts in a text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TermtallyArgs {
    /// Text to analyze
    #[arg(long, value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Path to a UTF-8 text file to analyze
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Comma-separated search terms; when omitted, the most frequent words
    /// (ties included) are reported instead
    #[arg(long, value_name = "TERMS")]
    pub terms: Option<String>,
}
