//! Termtally CLI binary.

use std::process;

use clap::Parser;
use termtally::cli::args::TermtallyArgs;
use termtally::cli::commands::execute;

fn main() {
    let args = TermtallyArgs::parse();

    if let Err(e) = execute(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
