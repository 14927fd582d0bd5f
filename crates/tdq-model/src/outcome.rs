//! Validation results for single records and batches.

use serde::Serialize;

use crate::record::Record;

/// Result of validating one record.
///
/// A record is valid exactly when no error messages were collected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Tuple form: `(is_valid, errors)`.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.errors.is_empty(), self.errors)
    }
}

/// A record that failed validation, with its reasons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidRecord<'a> {
    /// Position of the record in the input batch.
    pub index: usize,
    pub record: &'a Record,
    pub errors: Vec<String>,
}

/// Records partitioned by validation result, input order kept in each part.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchValidation<'a> {
    pub valid: Vec<&'a Record>,
    pub invalid: Vec<InvalidRecord<'a>>,
}

impl<'a> BatchValidation<'a> {
    /// Partition `records` using `validate` for each one.
    pub fn partition<F>(records: &'a [Record], mut validate: F) -> Self
    where
        F: FnMut(&Record) -> ValidationOutcome,
    {
        let mut batch = Self::default();
        for (index, record) in records.iter().enumerate() {
            let outcome = validate(record);
            if outcome.is_valid() {
                batch.valid.push(record);
            } else {
                batch.invalid.push(InvalidRecord {
                    index,
                    record,
                    errors: outcome.errors,
                });
            }
        }
        batch
    }

    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary::new(self.total(), self.valid.len())
    }
}

/// Aggregate counts over a validated batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// `valid / total`, or 0 for an empty batch.
    pub validation_rate: f64,
}

impl ValidationSummary {
    pub fn new(total: usize, valid: usize) -> Self {
        let validation_rate = if total == 0 {
            0.0
        } else {
            valid as f64 / total as f64
        };
        Self {
            total,
            valid,
            invalid: total.saturating_sub(valid),
            validation_rate,
        }
    }
}
