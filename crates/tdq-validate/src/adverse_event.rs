//! Adverse event validation and aggregate queries.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde_json::Value;
use tdq_model::{
    AeSeverity, BatchValidation, Record, ValidationOutcome, ValidationSummary, is_blank,
    value_label,
};
use tracing::{debug, trace, warn};

use crate::temporal::{DateCheck, ReferenceTime, check_not_future, parse_flexible_datetime};

/// Fields every adverse event must carry with a non-empty value.
pub const EVENT_REQUIRED_FIELDS: [&str; 5] = [
    "event_id",
    "patient_id",
    "event_date",
    "description",
    "severity",
];

/// Window accepted by [`AdverseEventValidator::calculate_event_rate`].
pub const DEFAULT_RATE_WINDOW_DAYS: u32 = 30;

const PATIENT_ID: &str = "patient_id";
const EVENT_DATE: &str = "event_date";
const SEVERITY: &str = "severity";
const PATIENT_ID_PREFIX: &str = "PAT";

/// Validates adverse event records.
///
/// Checks are independent and all of them run, so one record can carry
/// several errors:
///
/// - each required field is present, non-null and not an empty string;
/// - `severity`, when present, is one of the [`AeSeverity`] labels (exact case);
/// - `event_date`, when present, parses and is not in the future;
/// - `patient_id`, when present, is a string starting with `PAT`.
#[derive(Debug, Clone)]
pub struct AdverseEventValidator {
    required_fields: &'static [&'static str],
    severity_levels: &'static [AeSeverity],
    reference_time: ReferenceTime,
}

impl Default for AdverseEventValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl AdverseEventValidator {
    pub fn new() -> Self {
        Self {
            required_fields: &EVENT_REQUIRED_FIELDS,
            severity_levels: AeSeverity::all(),
            reference_time: ReferenceTime::WallClock,
        }
    }

    /// Compare event dates against `reference_time` instead of the clock.
    #[must_use]
    pub fn with_reference_time(mut self, reference_time: ReferenceTime) -> Self {
        self.reference_time = reference_time;
        self
    }

    pub fn required_fields(&self) -> &[&'static str] {
        self.required_fields
    }

    pub fn severity_levels(&self) -> &[AeSeverity] {
        self.severity_levels
    }

    /// Validate a single adverse event.
    pub fn validate_event(&self, event: &Record) -> ValidationOutcome {
        let mut errors = Vec::new();

        for field in self.required_fields {
            if is_blank(event.get(*field)) {
                errors.push(format!("Missing required field: {field}"));
            }
        }

        if let Some(value) = event.get(SEVERITY)
            && !self.is_known_severity(value)
        {
            errors.push(format!(
                "Invalid severity: {}. Must be one of: {}",
                value_label(value),
                self.severity_list()
            ));
        }

        if let Some(value) = event.get(EVENT_DATE) {
            match check_not_future(
                value.as_str(),
                parse_flexible_datetime,
                self.reference_time.now(),
            ) {
                DateCheck::Valid(_) => {}
                DateCheck::Future(_) => {
                    errors.push(format!("{EVENT_DATE}: Cannot be in the future"));
                }
                DateCheck::Unparseable => {
                    errors.push(format!("{EVENT_DATE}: Invalid date format"));
                }
            }
        }

        if let Some(value) = event.get(PATIENT_ID)
            && !value
                .as_str()
                .is_some_and(|id| id.starts_with(PATIENT_ID_PREFIX))
        {
            errors.push(format!(
                "{PATIENT_ID}: Must be string starting with '{PATIENT_ID_PREFIX}'"
            ));
        }

        trace!(errors = errors.len(), "validated adverse event");
        ValidationOutcome::new(errors)
    }

    /// Split `events` into valid and invalid, keeping input order.
    pub fn validate_batch<'a>(&self, events: &'a [Record]) -> BatchValidation<'a> {
        let batch = BatchValidation::partition(events, |event| self.validate_event(event));
        debug!(
            total = events.len(),
            invalid = batch.invalid.len(),
            "validated adverse event batch"
        );
        batch
    }

    pub fn get_validation_summary(&self, events: &[Record]) -> ValidationSummary {
        self.validate_batch(events).summary()
    }

    /// Count events per severity value.
    ///
    /// Unknown labels are counted under their own text; null or missing
    /// severities are skipped.
    pub fn categorize_by_severity(&self, events: &[Record]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for value in events.iter().filter_map(|event| event.get(SEVERITY)) {
            if value.is_null() {
                continue;
            }
            *counts.entry(value_label(value)).or_insert(0) += 1;
        }
        counts
    }

    /// Events whose `patient_id` equals `patient_id` exactly, in input order.
    pub fn get_events_by_patient<'a>(
        &self,
        events: &'a [Record],
        patient_id: &str,
    ) -> Vec<&'a Record> {
        events
            .iter()
            .filter(|event| event.get(PATIENT_ID).and_then(Value::as_str) == Some(patient_id))
            .collect()
    }

    /// Events per day over the span of the collection.
    ///
    /// The rate is `count / span_days`, where `span_days` is the number of
    /// whole days between the earliest and latest parseable `event_date`.
    /// An empty collection gives 0.0. When the span is zero days (all events
    /// on one day, or no parseable dates) the raw count is returned.
    ///
    /// `days` does not enter the formula.
    pub fn calculate_event_rate(&self, events: &[Record], days: u32) -> f64 {
        if events.is_empty() {
            return 0.0;
        }

        let mut bounds: Option<(NaiveDateTime, NaiveDateTime)> = None;
        let mut unparseable = 0usize;
        for event in events {
            let parsed = event
                .get(EVENT_DATE)
                .and_then(Value::as_str)
                .and_then(parse_flexible_datetime);
            match (parsed, bounds) {
                (Some(instant), None) => bounds = Some((instant, instant)),
                (Some(instant), Some((first, last))) => {
                    bounds = Some((first.min(instant), last.max(instant)));
                }
                (None, _) => unparseable += 1,
            }
        }
        if unparseable > 0 {
            warn!(
                unparseable,
                "event dates could not be parsed and were left out of the span"
            );
        }

        let count = events.len();
        let span_days = bounds.map_or(0, |(first, last)| (last - first).num_days());
        debug!(count, span_days, days, "calculated adverse event rate");

        if span_days == 0 {
            count as f64
        } else {
            count as f64 / span_days as f64
        }
    }

    fn is_known_severity(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|label| {
            self.severity_levels
                .iter()
                .any(|severity| severity.as_str() == label)
        })
    }

    fn severity_list(&self) -> String {
        self.severity_levels
            .iter()
            .map(AeSeverity::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
