//! Record validation for clinical trial data.
//!
//! Two validators share a small declarative schema engine and a date
//! parsing layer:
//!
//! - [`PatientValidator`] checks demographic records against a fixed schema
//!   plus the enrollment-date and consent business rules.
//! - [`AdverseEventValidator`] checks adverse event records and answers
//!   simple aggregate queries (severity counts, per-patient filter, event rate).
//!
//! Validation never fails: every problem is returned as a message in a
//! [`ValidationOutcome`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tdq_validate::PatientValidator;
//!
//! let record = json!({
//!     "patient_id": "PAT000123",
//!     "age": 42,
//!     "gender": "F",
//!     "enrollment_date": "2024-03-01",
//!     "site_id": "SITE007",
//!     "consent_signed": true
//! });
//! let outcome = PatientValidator::new().validate(record.as_object().unwrap());
//! assert!(outcome.is_valid());
//! ```

mod adverse_event;
mod patient;
pub mod schema;
pub mod temporal;

pub use adverse_event::{AdverseEventValidator, DEFAULT_RATE_WINDOW_DAYS, EVENT_REQUIRED_FIELDS};
pub use patient::{PATIENT_REQUIRED_FIELDS, PatientValidator, patient_schema};
pub use schema::{Constraint, FieldSpec, FieldType, Schema, SchemaViolation, StringFormat};
pub use temporal::ReferenceTime;

pub use tdq_model::{
    AeSeverity, BatchValidation, InvalidRecord, Record, ValidationOutcome, ValidationSummary,
};
