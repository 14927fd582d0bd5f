//! CLI argument definitions for the trial data quality checker.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tdq_validate::DEFAULT_RATE_WINDOW_DAYS;

#[derive(Parser)]
#[command(
    name = "tdq",
    version,
    about = "Trial data quality checks for patients, adverse events and protocols",
    long_about = "Validate clinical trial records and extract protocol criteria.\n\n\
                  Patient and adverse event files may be CSV or JSON arrays of objects.\n\
                  The exit status is 1 when any record is invalid."
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

    /// Include record identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate patient demographic records.
    Patients(PatientsArgs),

    /// Validate adverse events and report severity counts and event rate.
    Events(EventsArgs),

    /// Extract the protocol number and eligibility criteria from a text file.
    Protocol(ProtocolArgs),
}

/// Options shared by the record validation commands.
#[derive(Args)]
pub struct ValidationArgs {
    /// Write invalid records to this CSV file (columns: row, id, errors).
    #[arg(long = "report", value_name = "CSV")]
    pub report: Option<PathBuf>,

    /// Print the result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Treat this date as today when checking for future dates.
    #[arg(long = "as-of", value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,
}

#[derive(Args)]
pub struct PatientsArgs {
    /// Patient file (.csv or .json).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub validation: ValidationArgs,
}

#[derive(Args)]
pub struct EventsArgs {
    /// Adverse event file (.csv or .json).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// List the events recorded for this patient.
    #[arg(long = "patient", value_name = "ID")]
    pub patient: Option<String>,

    /// Reporting window in days, recorded alongside the event rate.
    #[arg(long = "days", value_name = "N", default_value_t = DEFAULT_RATE_WINDOW_DAYS)]
    pub days: u32,

    #[command(flatten)]
    pub validation: ValidationArgs,
}

#[derive(Args)]
pub struct ProtocolArgs {
    /// Protocol text file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
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
