//! Integration tests for adverse event validation and aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::json;
use tdq_validate::{
    AdverseEventValidator, AeSeverity, DEFAULT_RATE_WINDOW_DAYS, EVENT_REQUIRED_FIELDS, Record,
    ReferenceTime,
};

fn validator() -> AdverseEventValidator {
    let now = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    AdverseEventValidator::new().with_reference_time(ReferenceTime::Fixed(now))
}

fn event(id: &str, patient: &str, date: &str, severity: &str) -> Record {
    json!({
        "event_id": id,
        "patient_id": patient,
        "event_date": date,
        "description": "Nausea",
        "severity": severity
    })
    .as_object()
    .cloned()
    .unwrap()
}

fn sample_events() -> Vec<Record> {
    vec![
        event("AE1", "PAT000001", "2024-01-01", "Mild"),
        event("AE2", "PAT000002", "2024-01-03", "Severe"),
        event("AE3", "PAT000001", "2024-01-05", "Mild"),
        event("AE4", "PAT000003", "2024-01-09", "Moderate"),
        event("AE5", "PAT000001", "2024-01-11", "Fatal"),
    ]
}

#[test]
fn test_every_required_field_is_checked() {
    for field in EVENT_REQUIRED_FIELDS {
        for blank in [json!(null), json!("")] {
            let mut record = event("AE1", "PAT000001", "2024-01-01", "Mild");
            record.insert(field.to_string(), blank);
            let errors = validator().validate_event(&record).errors;
            assert!(
                errors.contains(&format!("Missing required field: {field}")),
                "{field}: {errors:?}"
            );
        }
    }
}

#[test]
fn test_every_severity_level_is_accepted() {
    for severity in AeSeverity::all() {
        let record = event("AE1", "PAT000001", "2024-01-01", severity.as_str());
        assert!(validator().validate_event(&record).is_valid(), "{severity}");
    }
}

#[test]
fn test_categorize_by_severity() {
    let mut events = sample_events();
    events.push(event("AE6", "PAT000004", "2024-01-12", "Unknown"));
    let mut no_severity = event("AE7", "PAT000004", "2024-01-12", "Mild");
    no_severity.remove("severity");
    events.push(no_severity);

    let counts = validator().categorize_by_severity(&events);

    let expected: BTreeMap<String, usize> = [
        ("Fatal", 1),
        ("Mild", 2),
        ("Moderate", 1),
        ("Severe", 1),
        ("Unknown", 1),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    assert_eq!(counts, expected);
}

#[test]
fn test_events_by_patient_is_stable_and_exact() {
    let mut events = sample_events();
    events.push(event("AE8", "PAT0000011", "2024-01-12", "Mild"));

    let matched = validator().get_events_by_patient(&events, "PAT000001");
    let ids: Vec<_> = matched.iter().map(|e| e["event_id"].clone()).collect();
    assert_eq!(ids, vec![json!("AE1"), json!("AE3"), json!("AE5")]);

    assert!(validator().get_events_by_patient(&events, "pat000001").is_empty());
}

#[test]
fn test_event_rate() {
    let events = sample_events();
    // 5 events over 10 days.
    assert_eq!(
        validator().calculate_event_rate(&events, DEFAULT_RATE_WINDOW_DAYS),
        0.5
    );
}

#[test]
fn test_event_rate_empty() {
    assert_eq!(validator().calculate_event_rate(&[], 30), 0.0);
}

#[test]
fn test_event_rate_same_day_returns_count() {
    let events = vec![
        event("AE1", "PAT000001", "2024-01-01", "Mild"),
        event("AE2", "PAT000002", "2024-01-01T08:00:00", "Mild"),
        event("AE3", "PAT000003", "2024-01-01T20:00:00", "Mild"),
    ];
    assert_eq!(validator().calculate_event_rate(&events, 30), 3.0);
}

#[test]
fn test_event_rate_ignores_days_argument() {
    let events = sample_events();
    let v = validator();
    assert_eq!(
        v.calculate_event_rate(&events, 1),
        v.calculate_event_rate(&events, 365)
    );
}

#[test]
fn test_event_batch_summary() {
    let mut events = sample_events();
    events.push(event("AE9", "XYZ", "2024-01-01", "Mild"));
    let v = validator();

    let batch = v.validate_batch(&events);
    assert_eq!(batch.valid.len(), 5);
    assert_eq!(batch.invalid.len(), 1);
    assert_eq!(batch.invalid[0].index, 5);

    let summary = v.get_validation_summary(&events);
    assert_eq!(summary.total, 6);
    assert_eq!(summary.invalid, 1);
}
