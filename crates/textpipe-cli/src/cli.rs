//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "textpipe",
    version,
    about = "Row-wise text-processing pipelines over CSV data",
    long_about = "Compose text-processing stages into a pipeline, apply it \
                  row-wise to a CSV column, and merge labeled datasets on a \
                  shared index column."
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
    /// Apply a stage pipeline row-wise to a CSV column.
    Apply(ApplyArgs),

    /// Merge CSV datasets on a shared index column (inner join).
    Merge(MergeArgs),

    /// List the available pipeline stages.
    Stages,
}

#[derive(Parser)]
pub struct ApplyArgs {
    /// Input CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Name of the text column to process.
    #[arg(long = "column", value_name = "NAME")]
    pub column: String,

    /// Comma-separated stage names, applied left to right.
    #[arg(long = "stages", value_name = "LIST")]
    pub stages: String,

    /// Per-run stage option as KEY=VALUE (repeatable).
    #[arg(long = "arg", value_name = "KEY=VALUE")]
    pub args: Vec<String>,

    /// Output CSV path (default: stdout).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MergeArgs {
    /// Input CSV files, merged pairwise left to right.
    #[arg(value_name = "CSV", required = true, num_args = 2..)]
    pub inputs: Vec<PathBuf>,

    /// Name of the shared index column.
    #[arg(long = "index", value_name = "NAME")]
    pub index: String,

    /// Output CSV path (default: stdout).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
