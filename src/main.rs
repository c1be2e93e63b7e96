//! dsnstat command line interface
//!
//! # Usage
//!
//! ```bash
//! # Count keyword paths across a set of boards
//! dsnstat boards/*.dsn
//!
//! # JSON output, four workers, non-zero exit if any file failed
//! dsnstat --format json --jobs 4 --strict boards/*.dsn
//! ```

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;

use dsnstat::{process_files_parallel, report, ParallelConfig, Vocabulary};

#[derive(Parser)]
#[command(name = "dsnstat")]
#[command(version)]
#[command(about = "Count nested keyword paths across Specctra DSN files")]
#[command(long_about = None)]
struct Cli {
    /// DSN files to analyze
    files: Vec<PathBuf>,

    /// Number of files processed concurrently (default: number of CPUs)
    #[arg(long, short = 'j')]
    jobs: Option<usize>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text", value_enum)]
    format: OutputFormat,

    /// Exit with a failure status if any file could not be processed
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns false when `--strict` is set and some file failed
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = cli
        .jobs
        .map(ParallelConfig::with_jobs)
        .unwrap_or_default();

    let run = process_files_parallel(&cli.files, Vocabulary::builtin(), &config)?;

    for (path, err) in &run.failures {
        eprintln!("Failed to process {}: {}", path.display(), err);
    }

    let rendered = match cli.format {
        OutputFormat::Text => report::render_text(&run.accumulator),
        OutputFormat::Json => {
            let mut json = report::render_json(&run.accumulator)
                .context("failed to serialize report")?;
            json.push('\n');
            json
        }
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write report")?;

    Ok(!(cli.strict && run.has_failures()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["dsnstat", "-j", "2", "-f", "json", "--strict", "a.dsn", "b.dsn"]);
        assert_eq!(cli.jobs, Some(2));
        assert!(cli.format == OutputFormat::Json);
        assert!(cli.strict);
        assert_eq!(cli.files.len(), 2);
    }

    #[test]
    fn test_log_level_from_flags() {
        assert_eq!(Cli::parse_from(["dsnstat"]).log_level(), Level::WARN);
        assert_eq!(Cli::parse_from(["dsnstat", "-vv"]).log_level(), Level::DEBUG);
        assert_eq!(Cli::parse_from(["dsnstat", "-q"]).log_level(), Level::ERROR);
    }
}
