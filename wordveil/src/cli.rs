// wordveil/src/cli.rs
//! This file defines the command-line interface (CLI) for the wordveil
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordveil",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mask forbidden phrases in text",
    long_about = "Wordveil is a command-line utility for masking forbidden phrases in text-based data. It scans its input exactly once against a keyword dictionary and replaces every occurrence with a fixed mask token, matching across interleaved punctuation and surviving malformed input.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'wordveil' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `wordveil` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filters an input file or stdin, masking forbidden phrases.
    #[command(about = "Filters an input file or stdin, masking forbidden phrases.")]
    Filter(FilterCommand),

    /// Scans an input for forbidden phrases and provides a detailed summary without rewriting.
    #[command(about = "Scans an input for forbidden phrases and provides a detailed summary without rewriting.")]
    Scan(ScanCommand),
}

/// Arguments for the `filter` command.
#[derive(Parser, Debug)]
pub struct FilterCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write masked output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', conflicts_with = "line_buffered", help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Path to a custom keyword configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom keyword configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Path to a plain wordlist file (one keyword per line).
    #[arg(long = "wordlist", short = 'w', value_name = "FILE", help = "Path to a plain wordlist file, one keyword per line.")]
    pub wordlist: Option<PathBuf>,

    /// Override the mask token emitted for every match.
    #[arg(long = "mask", value_name = "TOKEN", help = "Override the mask token emitted for every match (default '***').")]
    pub mask: Option<String>,

    /// Skip the embedded default keyword dictionary.
    #[arg(long = "no-default-keywords", help = "Skip the embedded default keyword dictionary.")]
    pub no_default_keywords: bool,

    /// Process input line by line (useful for streaming data from pipes).
    #[arg(long = "line-buffered", help = "Process input line by line (useful for streaming data from pipes).")]
    pub line_buffered: bool,

    /// Suppress the mask summary.
    #[arg(long = "no-summary", help = "Suppress the mask summary.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom keyword configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom keyword configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Path to a plain wordlist file (one keyword per line).
    #[arg(long = "wordlist", short = 'w', value_name = "FILE", help = "Path to a plain wordlist file, one keyword per line.")]
    pub wordlist: Option<PathBuf>,

    /// Skip the embedded default keyword dictionary.
    #[arg(long = "no-default-keywords", help = "Skip the embedded default keyword dictionary.")]
    pub no_default_keywords: bool,

    /// Exit with a non-zero code if the total number of detected matches exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the total number of detected matches exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,

    /// Export scan summary to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the scan statistics to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print scan summary as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the scan statistics to stdout as JSON.")]
    pub json_stdout: bool,

    /// Limit the number of unique sample matches displayed per keyword in console output.
    #[arg(long = "sample-matches", value_name = "N", help = "Display a sample of up to N unique matches per keyword in the console output.")]
    pub sample_matches: Option<usize>,
}
