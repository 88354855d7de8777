//! Fills a crossword structure from a word list and prints the result.

use std::{io, process::ExitCode};

use clap::Parser as _;
use crossfill_cli::Args;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match crossfill_cli::run(&args, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
