//! CLI argument definitions for the tracker validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tracker",
    version,
    about = "Tracker event validator - validate event batches before commit",
    long_about = "Validate batches of clinical event records against per-program \
                  temporal and lifecycle rules.\n\n\
                  Reads a batch JSON file plus a reference-data JSON file \
                  (programs, persisted events, acting user) and reports every \
                  violation as a stable, coded error."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a batch of events against reference data.
    Batch(BatchArgs),

    /// List the error-code taxonomy.
    Codes,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Path to the batch JSON file (`{"events": [...]}`).
    #[arg(value_name = "BATCH_FILE")]
    pub batch_file: PathBuf,

    /// Path to the reference-data JSON file (programs, persisted events,
    /// acting user).
    #[arg(long = "reference", value_name = "PATH")]
    pub reference_file: PathBuf,

    /// Write the full validation report as JSON to this path.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
