//! Command execution for the termtally CLI.
//!
//! This layer is thin I/O glue: it materializes the input text (flag,
//! file, or interactive prompt), splits the comma-delimited term list, and
//! hands both to the core. I/O failures (missing file, invalid encoding)
//! surface here and never reach the core.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::cli::args::TermtallyArgs;
use crate::cli::output::print_report;
use crate::error::Result;
use crate::frequency::build_result;

/// Run the CLI end to end: gather text and terms, analyze, print.
pub fn execute(args: TermtallyArgs) -> Result<()> {
    let mut text = args.text;
    let mut file = args.file;

    // Neither --text nor --file: fall back to interactive input.
    if text.is_none() && file.is_none() {
        let mode = prompt("Input mode (text/file): ")?;
        if mode.trim().eq_ignore_ascii_case("file") {
            file = Some(PathBuf::from(prompt("File path: ")?.trim()));
        } else {
            text = Some(prompt("Text: ")?);
        }
    }

    let raw_terms = match args.terms {
        Some(raw) => raw,
        None => prompt("Search terms (comma-separated, empty for top words): ")?
            .trim()
            .to_string(),
    };
    let terms = split_terms(&raw_terms);

    let base_text = load_text(text, file)?;
    let report = build_result(&base_text, &terms)?;
    print_report(&report)
}

/// Materialize the input text from a literal value or a UTF-8 file.
pub fn load_text(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }
    Ok(String::new())
}

/// Split a comma-delimited term list, trimming each piece. An empty input
/// yields no terms.
pub fn split_terms(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|t| t.trim().to_string()).collect()
}

fn prompt(label: &str) -> Result<String> {
    let mut stdout = io::stdout();
    stdout.write_all(label.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
