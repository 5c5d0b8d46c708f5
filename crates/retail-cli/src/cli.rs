//! CLI argument definitions for the retail ETL tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "retail-etl",
    version,
    about = "Retail ETL - clean tabular retail data and derive revenue analytics",
    long_about = "Batch ETL over three retail tables (customers, products, transactions).\n\n\
                  Cleans each table with deterministic field repair rules, filters\n\
                  transactions against the cleaned customer set, and derives revenue\n\
                  reports and KPIs."
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
    /// Run the full pipeline and write cleaned tables plus reports.
    Run(RunArgs),

    /// Bootstrap and load the inputs, reporting row counts only.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Data root folder; inputs are expected under <DATA_ROOT>/data/original
    /// (files at the root itself are copied there on first run).
    #[arg(value_name = "DATA_ROOT")]
    pub data_root: PathBuf,

    /// Output directory for report tables (default: <DATA_ROOT>/outputs).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Clean and analyze without writing any output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Data root folder to inspect.
    #[arg(value_name = "DATA_ROOT")]
    pub data_root: PathBuf,
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
