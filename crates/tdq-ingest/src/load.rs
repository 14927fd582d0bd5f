//! Patient and adverse event loaders.

use std::path::Path;

use tdq_model::Record;
use tdq_validate::{EVENT_REQUIRED_FIELDS, PATIENT_REQUIRED_FIELDS};
use tracing::info;

use crate::csv::{read_csv_table, require_columns};
use crate::error::{IngestError, Result};
use crate::json::read_json_records;
use crate::records::dataframe_to_records;

/// On-disk layout of a record file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// `.json` selects JSON, `.csv` or no extension selects CSV.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") | None => Ok(Self::Csv),
            Some(other) => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.to_string(),
            }),
        }
    }
}

/// Load records from `path`.
///
/// CSV tables must contain every column in `required`. JSON records are
/// loaded as-is; a missing field there is a per-record validation error.
pub fn load_records(path: &Path, required: &[&str]) -> Result<Vec<Record>> {
    let records = match InputFormat::from_path(path)? {
        InputFormat::Csv => {
            let df = read_csv_table(path)?;
            require_columns(&df, required, path)?;
            dataframe_to_records(&df)
        }
        InputFormat::Json => read_json_records(path)?,
    };
    info!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

/// Load patient demographics.
pub fn load_patients(path: &Path) -> Result<Vec<Record>> {
    load_records(path, &PATIENT_REQUIRED_FIELDS)
}

/// Load adverse events. A CSV without one of the required event columns is
/// rejected before any event is read.
pub fn load_events(path: &Path) -> Result<Vec<Record>> {
    load_records(path, &EVENT_REQUIRED_FIELDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_format_from_path() {
        assert_eq!(
            InputFormat::from_path(Path::new("a/patients.csv")).unwrap(),
            InputFormat::Csv
        );
        assert_eq!(
            InputFormat::from_path(Path::new("patients.JSON")).unwrap(),
            InputFormat::Json
        );
        assert_eq!(
            InputFormat::from_path(Path::new("patients")).unwrap(),
            InputFormat::Csv
        );
        assert!(matches!(
            InputFormat::from_path(Path::new("patients.xlsx")),
            Err(IngestError::UnsupportedFormat { .. })
        ));
    }
}
