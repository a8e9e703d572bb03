//! Main application orchestrator.
//!
//! 1. Initializes the verbose log (`algo-toolkit.log`) unless `--quiet`.
//! 2. Dispatches the subcommand to `processing`.
//! 3. Prints the resulting report as text or JSON.
//! 4. Flushes the log on every exit path.

use std::fmt::Display;
use std::path::Path;

use serde::Serialize;

use super::cli::{Cli, Command};
use super::error::AppError;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};

const LOG_FILE: &str = "algo-toolkit.log";

/// Runs the command described by `cli`.
///
/// # Errors
/// Returns `AppError` for malformed input (bad edges, invalid patterns,
/// unreadable documents) or when output cannot be serialized.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(Path::new(LOG_FILE)) {
            // Keep going without the log file.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                LOG_FILE, e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to {}", LOG_FILE);
        }
    }

    let result = dispatch(cli.command, cli.json, quiet_mode);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "{}", e);
    }

    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to perform final flush of {}: {}", LOG_FILE, e);
        }
    }
    result
}

fn dispatch(command: Command, json: bool, quiet_mode: bool) -> Result<(), AppError> {
    match command {
        Command::Demo { write } => {
            let report = processing::run_demo(write.as_deref(), quiet_mode)?;
            print_report(&report, json)
        }
        Command::Graph {
            edges,
            from,
            to,
            dfs,
        } => {
            let route = from.as_deref().zip(to.as_deref());
            let report = processing::run_graph(&edges, route, dfs.as_deref(), quiet_mode)?;
            print_report(&report, json)
        }
        Command::Tree { values, find } => {
            let report = processing::run_tree(&values, find, quiet_mode);
            print_report(&report, json)
        }
        Command::Scan { text, patterns } => {
            let report = processing::run_scan(&text, &patterns, quiet_mode)?;
            print_report(&report, json)
        }
        Command::Lookup { file, key, default } => {
            let report = processing::run_lookup(&file, &key, default.as_deref(), quiet_mode)?;
            print_report(&report, json)
        }
    }
}

fn print_report<R: Serialize + Display>(report: &R, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_run_app_quiet_tree() {
        let cli = Cli::parse_from(["algo-toolkit", "--quiet", "tree", "2", "1", "3"]);
        assert!(run_app(cli).is_ok());
    }

    #[test]
    fn test_run_app_reports_bad_edge() {
        let cli = Cli::parse_from(["algo-toolkit", "-q", "--json", "graph", "--edge", "lonely"]);
        assert!(matches!(run_app(cli), Err(AppError::InvalidEdge(_))));
    }

    #[test]
    fn test_run_app_missing_lookup_file() {
        let cli = Cli::parse_from(["algo-toolkit", "-q", "lookup", "/nonexistent/doc.json", "a"]);
        assert!(matches!(run_app(cli), Err(AppError::InvalidPath(_))));
    }
}
