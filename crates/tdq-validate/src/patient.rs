//! Patient demographic validation.

use regex::Regex;
use serde_json::Value;
use tdq_model::{BatchValidation, Record, ValidationOutcome, ValidationSummary};
use tracing::{debug, trace};

use crate::schema::{Constraint, FieldSpec, FieldType, Schema, StringFormat};
use crate::temporal::{DateCheck, ReferenceTime, check_not_future, parse_iso_datetime};

/// Fields every patient record must carry.
pub const PATIENT_REQUIRED_FIELDS: [&str; 6] = [
    "patient_id",
    "age",
    "gender",
    "enrollment_date",
    "site_id",
    "consent_signed",
];

const ENROLLMENT_DATE: &str = "enrollment_date";
const CONSENT_SIGNED: &str = "consent_signed";

/// Schema for patient demographic records.
pub fn patient_schema() -> Schema {
    Schema::new(vec![
        FieldSpec::required("patient_id", FieldType::String).with(Constraint::Pattern(
            Regex::new("^PAT[0-9]{6}$").expect("Invalid patient_id regex"),
        )),
        FieldSpec::required("age", FieldType::Integer).with(Constraint::Range { min: 18, max: 85 }),
        FieldSpec::required("gender", FieldType::String).with(Constraint::one_of(["M", "F", "O"])),
        FieldSpec::required(ENROLLMENT_DATE, FieldType::String)
            .with(Constraint::Format(StringFormat::Date)),
        FieldSpec::required("site_id", FieldType::String).with(Constraint::Pattern(
            Regex::new("^SITE[0-9]{3}$").expect("Invalid site_id regex"),
        )),
        FieldSpec::required(CONSENT_SIGNED, FieldType::Boolean),
    ])
}

/// Validates patient records against [`patient_schema`] plus two rules:
///
/// 1. `enrollment_date` must parse as an ISO date and must not be in the
///    future. This runs even when the schema already flagged the field.
/// 2. `consent_signed` must not be `false`.
#[derive(Debug, Clone)]
pub struct PatientValidator {
    schema: Schema,
    reference_time: ReferenceTime,
}

impl Default for PatientValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientValidator {
    pub fn new() -> Self {
        Self {
            schema: patient_schema(),
            reference_time: ReferenceTime::WallClock,
        }
    }

    /// Compare enrollment dates against `reference_time` instead of the clock.
    #[must_use]
    pub fn with_reference_time(mut self, reference_time: ReferenceTime) -> Self {
        self.reference_time = reference_time;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validate a single patient record.
    pub fn validate(&self, record: &Record) -> ValidationOutcome {
        let mut errors: Vec<String> = self
            .schema
            .validate(record)
            .iter()
            .map(ToString::to_string)
            .collect();

        if let Some(value) = record.get(ENROLLMENT_DATE) {
            match check_not_future(
                value.as_str(),
                parse_iso_datetime,
                self.reference_time.now(),
            ) {
                DateCheck::Valid(_) => {}
                DateCheck::Future(_) => {
                    errors.push(format!("{ENROLLMENT_DATE}: Cannot be in the future"));
                }
                DateCheck::Unparseable => {
                    errors.push(format!("{ENROLLMENT_DATE}: Invalid date format"));
                }
            }
        }

        if record.get(CONSENT_SIGNED) == Some(&Value::Bool(false)) {
            errors.push(format!("{CONSENT_SIGNED}: Patient must have signed consent"));
        }

        trace!(errors = errors.len(), "validated patient record");
        ValidationOutcome::new(errors)
    }

    /// Split `records` into valid and invalid, keeping input order.
    pub fn validate_batch<'a>(&self, records: &'a [Record]) -> BatchValidation<'a> {
        let batch = BatchValidation::partition(records, |record| self.validate(record));
        debug!(
            total = records.len(),
            invalid = batch.invalid.len(),
            "validated patient batch"
        );
        batch
    }

    pub fn get_validation_summary(&self, records: &[Record]) -> ValidationSummary {
        self.validate_batch(records).summary()
    }
}
