//! CLI argument definitions for the nurse survey normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "nurse-survey",
    version,
    about = "Normalize free-text nurse survey answers",
    long_about = "Normalize free-text nurse survey answers.\n\n\
                  Converts pay to an hourly rate, staffing answers to patients per nurse,\n\
                  and city/state answers to coordinates, writing one JSON record per row."
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

    /// Allow raw survey answers in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a survey export and write one record per row.
    Run(RunArgs),

    /// Normalize a single pay answer.
    Salary(SalaryArgs),

    /// Normalize a single staffing ratio answer.
    Ratio(RatioArgs),

    /// Resolve a single "City, State" answer.
    Location(LocationArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Survey export CSV (header row of question text).
    #[arg(long = "survey", value_name = "CSV")]
    pub survey: PathBuf,

    /// City reference CSV (default: $NURSE_SURVEY_CITIES or data/uscities.csv).
    #[arg(long = "cities", value_name = "CSV")]
    pub cities: Option<PathBuf>,

    /// Output JSON Lines file (default: <survey stem>.records.jsonl beside the survey).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML file overriding question headers and salary bounds.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Stop after this many rows.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Normalize and summarize without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SalaryArgs {
    /// Pay answer, e.g. "$32/hr" or "me at $63,000".
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Lowest accepted hourly rate.
    #[arg(long = "min", value_name = "F", default_value_t = 3.0)]
    pub min: f64,

    /// Highest accepted hourly rate.
    #[arg(long = "max", value_name = "F", default_value_t = 200.0)]
    pub max: f64,
}

#[derive(Parser)]
pub struct RatioArgs {
    /// Staffing answer, e.g. "1:4" or "5-7".
    #[arg(value_name = "TEXT")]
    pub text: String,
}

#[derive(Parser)]
pub struct LocationArgs {
    /// Location answer, e.g. "San Jose, CA".
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// City reference CSV (default: $NURSE_SURVEY_CITIES or data/uscities.csv).
    #[arg(long = "cities", value_name = "CSV")]
    pub cities: Option<PathBuf>,
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
