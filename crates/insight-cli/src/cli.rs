//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "insight",
    version,
    about = "Dataset insight engine - statistics, profiles and findings for tabular data",
    long_about = "Analyze a CSV or TSV file and report descriptive statistics, outliers,\n\
                  categorical profiles, correlations, a quality score and templated insights.\n\n\
                  Results are deterministic: the same file and thresholds always produce\n\
                  the same report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Analyze a delimited data file.
    Analyze(AnalyzeArgs),

    /// Print the default threshold configuration as JSON.
    Thresholds,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to a .csv, .tsv or .tab file with a header row.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSON threshold overrides; omitted fields keep their defaults.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write the report to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Row count above which chart inputs are sampled (see --format charts).
    #[arg(long = "sample-threshold", value_name = "N")]
    pub sample_threshold: Option<usize>,

    /// Rows kept in the chart sample.
    #[arg(long = "sample-size", value_name = "N")]
    pub sample_size: Option<usize>,

    /// Seed for chart sampling.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Number of ranked correlation pairs to keep.
    #[arg(long = "top-correlations", value_name = "N")]
    pub top_correlations: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Summary tables.
    Table,
    /// The full analysis bundle.
    Json,
    /// Only the fields the narrative generator consumes.
    Narrative,
    /// Chart inputs, with the sampled row indices for large files.
    Charts,
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
