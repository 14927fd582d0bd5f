//! CLI library components for the trial data quality checker.

pub mod commands;
pub mod logging;
pub mod report;
pub mod types;
