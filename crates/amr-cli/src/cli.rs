//! CLI argument definitions for the AMR surveillance toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "amr-surv",
    version,
    about = "AMR surveillance toolkit - resistance statistics from isolate susceptibility tables",
    long_about = "Compute antimicrobial-resistance surveillance statistics from a tabular\n\
                  dataset of bacterial isolates (one row per isolate, one S/I/R column per\n\
                  antibiotic).\n\n\
                  Validates the table strictly, derives resistance distributions, MDR/ESBL\n\
                  prevalence, co-resistance correlation, and dominant MDR profiles, and\n\
                  exports the filtered views as delimited tables."
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
    /// Run the full pipeline and print/export surveillance statistics.
    Report(ReportArgs),

    /// Validate an input file without computing any statistics.
    Validate(ValidateArgs),

    /// Write a small sample dataset usable as an input template.
    Sample(SampleArgs),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the isolate susceptibility table (CSV, first row = header).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Restrict to these gender values (comma-separated, case-insensitive).
    #[arg(long = "gender", value_name = "VALUES", value_delimiter = ',')]
    pub genders: Vec<String>,

    /// Restrict to these sample types (comma-separated, case-insensitive).
    #[arg(long = "sample-type", value_name = "VALUES", value_delimiter = ',')]
    pub sample_types: Vec<String>,

    /// Write export files (wide/long/summary tables, narrative, JSON) here.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip the per-antibiotic distribution table on the console.
    #[arg(long = "no-distribution")]
    pub no_distribution: bool,

    /// Skip the MDR profile table on the console.
    #[arg(long = "no-profiles")]
    pub no_profiles: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the isolate susceptibility table (CSV, first row = header).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Where to write the sample dataset.
    #[arg(long = "out", value_name = "PATH", default_value = "sample_amr_data.csv")]
    pub out: PathBuf,
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
