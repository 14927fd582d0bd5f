//! Shared types for clinical-trial data quality checks.
//!
//! Records are kept as dynamically typed JSON maps so that a value of the
//! wrong type can be reported as a validation error instead of failing at
//! deserialization time.

pub mod outcome;
pub mod protocol;
pub mod record;
pub mod severity;

pub use outcome::{BatchValidation, InvalidRecord, ValidationOutcome, ValidationSummary};
pub use protocol::ParsedProtocol;
pub use record::{Record, is_blank, value_label};
pub use severity::{AeSeverity, ParseSeverityError};
