use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;
use tdq_model::{AeSeverity, InvalidRecord, Record, ValidationSummary};

/// One failed record, flattened for display and CSV export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidRow {
    /// 1-based data row in the input file.
    pub row: usize,
    pub id: Option<String>,
    pub errors: Vec<String>,
}

impl InvalidRow {
    pub fn from_invalid(invalid: &InvalidRecord<'_>, id_field: &str) -> Self {
        let id = invalid.record.get(id_field).and_then(|value| match value {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        });
        Self {
            row: invalid.index + 1,
            id,
            errors: invalid.errors.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientReport {
    pub source: PathBuf,
    pub summary: ValidationSummary,
    pub invalid: Vec<InvalidRow>,
}

impl PatientReport {
    pub fn has_invalid(&self) -> bool {
        !self.invalid.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientEvents {
    pub patient_id: String,
    pub events: Vec<Record>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventReport {
    pub source: PathBuf,
    pub summary: ValidationSummary,
    pub invalid: Vec<InvalidRow>,
    pub severity_counts: BTreeMap<String, usize>,
    pub event_rate: f64,
    pub days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<PatientEvents>,
}

impl EventReport {
    pub fn has_invalid(&self) -> bool {
        !self.invalid.is_empty()
    }

    /// `(label, count, known)` for every severity level in order, zero counts
    /// included, followed by unrecognised labels in sorted order.
    pub fn severity_rows(&self) -> Vec<(String, usize, bool)> {
        let mut rows: Vec<_> = AeSeverity::all()
            .iter()
            .map(|severity| {
                let count = self
                    .severity_counts
                    .get(severity.as_str())
                    .copied()
                    .unwrap_or(0);
                (severity.as_str().to_string(), count, true)
            })
            .collect();
        rows.extend(
            self.severity_counts
                .iter()
                .filter(|(label, _)| label.parse::<AeSeverity>().is_err())
                .map(|(label, count)| (label.clone(), *count, false)),
        );
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_rows_order() {
        let report = EventReport {
            source: PathBuf::from("events.csv"),
            summary: ValidationSummary::new(4, 3),
            invalid: Vec::new(),
            severity_counts: BTreeMap::from([
                ("Critical".to_string(), 1),
                ("Mild".to_string(), 2),
                ("Fatal".to_string(), 1),
            ]),
            event_rate: 0.4,
            days: 30,
            patient: None,
        };

        assert_eq!(
            report.severity_rows(),
            vec![
                ("Mild".to_string(), 2, true),
                ("Moderate".to_string(), 0, true),
                ("Severe".to_string(), 0, true),
                ("Life-threatening".to_string(), 0, true),
                ("Fatal".to_string(), 1, true),
                ("Critical".to_string(), 1, false),
            ]
        );
    }
}
