//! Record ingestion for data quality checks.
//!
//! This crate loads patient and adverse event tables into in-memory
//! [`Record`]s. It is the only place where a structural problem with the
//! input is a hard failure: a table missing one of the required columns is
//! rejected with [`IngestError::MissingColumns`] before any record is
//! validated.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tdq_ingest::{load_events, load_patients};
//!
//! let patients = load_patients(Path::new("data/patients.csv"))?;
//! let events = load_events(Path::new("data/adverse_events.csv"))?;
//! ```

mod csv;
mod error;
mod json;
mod load;
mod records;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{read_csv_table, require_columns, validate_encoding};

// === JSON Reading ===
pub use json::read_json_records;

// === Record Conversion ===
pub use records::{any_to_json, dataframe_to_records, normalize_column_name};

// === Loaders ===
pub use load::{InputFormat, load_events, load_patients, load_records};

pub use tdq_model::Record;
