use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod error;
mod file_reader;
mod pattern;
mod report;
mod scanner;
mod walker;

#[cfg(test)]
mod test_utils;

use cli::{Cli, OutputFormat};
use config::{EnvOverrides, ScanConfig};
use report::{JsonFormatter, ReportFormatter, TextFormatter};
use scanner::Scanner;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(found_todos) => {
            if found_todos {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Runs one scan. Returns whether any TODO markers were found.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = ScanConfig::resolve(cli, &EnvOverrides::from_env())?;
    let report = Scanner::new(config).scan()?;

    let formatter: &dyn ReportFormatter = match cli.output {
        OutputFormat::Text => &TextFormatter,
        OutputFormat::Json => &JsonFormatter,
    };
    print!("{}", formatter.format(&report)?);

    Ok(!report.records.is_empty())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
