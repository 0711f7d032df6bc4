//! # loccount
//!
//! A CLI tool for counting non-comment, non-blank lines of code.
//!
//! ## Overview
//!
//! loccount is built on top of loccountlib. It takes any number of files and
//! directories, counts every file it finds, and prints one row per file plus
//! a total.
//!
//! ## Usage
//!
//! ```bash
//! # Count everything under the current directory
//! loccount
//!
//! # Count specific files and directories
//! loccount src/app.js lib/ native/matrix.cpp
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace` for per-line decisions) to see what the
//! classifier is doing.

mod render;

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use loccountlib::{count_paths, CountOptions, CountResult};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("loccount")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Count non-comment, non-blank lines of code")
        .arg(
            Arg::new("paths")
                .help("Files or directories to analyze (defaults to current directory)")
                .action(ArgAction::Append)
                .default_value("."),
        )
}

fn count_handler(matches: &ArgMatches) -> anyhow::Result<CountResult> {
    let paths: Vec<&String> = matches
        .get_many::<String>("paths")
        .map(|v| v.collect())
        .unwrap_or_default();

    log::info!("counting {} path(s)", paths.len());

    let result = count_paths(paths, &CountOptions::new().with_file_stats())?;
    Ok(result)
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = build_command().get_matches();

    match count_handler(&matches) {
        Ok(result) => {
            print!("{}", render::render_stats_table(&result));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
