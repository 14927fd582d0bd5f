//! Declarative record schema.
//!
//! A [`Schema`] is an ordered list of [`FieldSpec`]s. Validation walks the
//! fields in declaration order and reports, per field, at most one of:
//!
//! - the field is required but absent,
//! - the value has the wrong JSON type,
//! - one or more constraints failed (each reported separately).
//!
//! Constraints are only evaluated once the type check has passed. Fields not
//! declared in the schema are ignored.

mod field;
mod violation;

pub use field::{Constraint, FieldSpec, FieldType, StringFormat};
pub use violation::SchemaViolation;

use serde_json::{Number, Value};
use tdq_model::Record;

use crate::temporal::is_full_date;

/// Ordered set of field specifications.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Names of all required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name.as_str())
    }

    /// Validate `record`, returning every violation found.
    pub fn validate(&self, record: &Record) -> Vec<SchemaViolation> {
        let mut violations = Vec::new();
        for field in &self.fields {
            check_field(field, record.get(&field.name), &mut violations);
        }
        violations
    }
}

fn check_field(field: &FieldSpec, value: Option<&Value>, out: &mut Vec<SchemaViolation>) {
    let Some(value) = value else {
        if field.required {
            out.push(SchemaViolation::new(
                field.path(),
                "required field is missing",
            ));
        }
        return;
    };

    if !has_type(value, field.kind) {
        out.push(SchemaViolation::new(
            field.path(),
            format!("{value} is not of type '{}'", field.kind.as_str()),
        ));
        return;
    }

    for constraint in &field.constraints {
        if let Some(message) = check_constraint(constraint, value) {
            out.push(SchemaViolation::new(field.path(), message));
        }
    }
}

fn has_type(value: &Value, kind: FieldType) -> bool {
    match kind {
        FieldType::String => value.is_string(),
        FieldType::Boolean => value.is_boolean(),
        FieldType::Integer => value.as_number().is_some_and(is_integral),
    }
}

fn is_integral(number: &Number) -> bool {
    number.is_i64()
        || number.is_u64()
        || number
            .as_f64()
            .is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

/// Returns the failure message, or `None` when the constraint holds or does
/// not apply to this kind of value.
fn check_constraint(constraint: &Constraint, value: &Value) -> Option<String> {
    match constraint {
        Constraint::Range { min, max } => {
            let number = value.as_f64()?;
            if number < *min as f64 {
                Some(format!("{value} is less than the minimum of {min}"))
            } else if number > *max as f64 {
                Some(format!("{value} is greater than the maximum of {max}"))
            } else {
                None
            }
        }
        Constraint::OneOf(allowed) => {
            let text = value.as_str()?;
            if allowed.iter().any(|candidate| candidate == text) {
                None
            } else {
                Some(format!("{value} is not one of: {}", allowed.join(", ")))
            }
        }
        Constraint::Pattern(pattern) => {
            let text = value.as_str()?;
            if pattern.is_match(text) {
                None
            } else {
                Some(format!("{value} does not match '{}'", pattern.as_str()))
            }
        }
        Constraint::Format(StringFormat::Date) => {
            let text = value.as_str()?;
            if is_full_date(text) {
                None
            } else {
                Some(format!("{value} is not a valid 'date' (expected YYYY-MM-DD)"))
            }
        }
    }
}
