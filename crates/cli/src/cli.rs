//! CLI argument parsing with clap derive.

use clap::Parser;

use crate::config::defaults;

/// CI gate that scans a directory tree for leftover TODO comment markers
#[derive(Parser)]
#[command(name = "todo-gate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Root path to scan
    #[arg(long, default_value = defaults::ROOT, value_name = "PATH")]
    pub path: String,

    /// Comma-separated list of file extension suffixes (e.g. .py,.js,.html)
    #[arg(long, value_name = "LIST")]
    pub extensions: Option<String>,

    /// Custom regular expression replacing the entire built-in marker set
    #[arg(long, value_name = "REGEX")]
    pub todo_pattern: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
