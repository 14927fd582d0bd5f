//! Trial data quality CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use serde::Serialize;
use tdq_cli::commands::{EventOptions, run_events, run_patients, run_protocol};
use tdq_cli::logging::{LogConfig, LogFormat, init_logging};
use tdq_cli::report::write_invalid_rows_to_path;
use tdq_validate::ReferenceTime;
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{
    Cli, Command, EventsArgs, LogFormatArg, LogLevelArg, PatientsArgs, ProtocolArgs,
    ValidationArgs,
};
use crate::summary::{print_event_report, print_patient_report, print_protocol};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Patients(args) => patients(args),
        Command::Events(args) => events(args),
        Command::Protocol(args) => protocol(args),
    };
    let exit_code = match result {
        Ok(all_valid) => i32::from(!all_valid),
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Returns whether every record was valid.
fn patients(args: &PatientsArgs) -> Result<bool> {
    let report = run_patients(&args.file, reference_time(&args.validation))?;
    if let Some(path) = &args.validation.report {
        write_invalid_rows_to_path(path, &report.invalid)?;
    }
    if args.validation.json {
        print_json(&report)?;
    } else {
        print_patient_report(&report);
    }
    Ok(!report.has_invalid())
}

fn events(args: &EventsArgs) -> Result<bool> {
    let options = EventOptions {
        patient: args.patient.clone(),
        days: args.days,
        reference_time: reference_time(&args.validation),
    };
    let report = run_events(&args.file, &options)?;
    if let Some(path) = &args.validation.report {
        write_invalid_rows_to_path(path, &report.invalid)?;
    }
    if args.validation.json {
        print_json(&report)?;
    } else {
        print_event_report(&report);
    }
    Ok(!report.has_invalid())
}

fn protocol(args: &ProtocolArgs) -> Result<bool> {
    let parsed = run_protocol(&args.file)?;
    if args.json {
        print_json(&parsed)?;
    } else {
        print_protocol(&parsed);
    }
    Ok(true)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}

/// `--as-of` pins "now" to the end of that day.
fn reference_time(args: &ValidationArgs) -> ReferenceTime {
    args.as_of
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .map_or(ReferenceTime::WallClock, ReferenceTime::Fixed)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
