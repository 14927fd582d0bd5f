//! Integration tests for patient record validation.

use chrono::NaiveDate;
use serde_json::{Value, json};
use tdq_validate::{PatientValidator, Record, ReferenceTime};

fn validator() -> PatientValidator {
    let now = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    PatientValidator::new().with_reference_time(ReferenceTime::Fixed(now))
}

fn patient(id: &str, age: i64, consent: bool) -> Record {
    json!({
        "patient_id": id,
        "age": age,
        "gender": "F",
        "enrollment_date": "2024-02-10",
        "site_id": "SITE042",
        "consent_signed": consent
    })
    .as_object()
    .cloned()
    .unwrap()
}

#[test]
fn test_batch_partitions_in_order() {
    let records = vec![
        patient("PAT000001", 30, true),
        patient("PAT000002", 17, true),
        patient("PAT000003", 50, true),
        patient("PAT000004", 60, false),
        patient("PAT000005", 85, true),
    ];

    let batch = validator().validate_batch(&records);

    let valid_ids: Vec<&Value> = batch.valid.iter().map(|r| &r["patient_id"]).collect();
    assert_eq!(
        valid_ids,
        vec![&json!("PAT000001"), &json!("PAT000003"), &json!("PAT000005")]
    );

    assert_eq!(batch.invalid.len(), 2);
    assert_eq!(batch.invalid[0].index, 1);
    assert_eq!(
        batch.invalid[0].errors,
        vec!["$.age: 17 is less than the minimum of 18"]
    );
    assert_eq!(batch.invalid[1].index, 3);
    assert_eq!(
        batch.invalid[1].errors,
        vec!["consent_signed: Patient must have signed consent"]
    );
}

#[test]
fn test_summary_counts_and_rate() {
    let records = vec![
        patient("PAT000001", 30, true),
        patient("BAD", 30, true),
        patient("PAT000003", 30, true),
        patient("PAT000004", 30, true),
    ];

    let summary = validator().get_validation_summary(&records);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.valid, 3);
    assert_eq!(summary.invalid, 1);
    assert!((summary.validation_rate - 0.75).abs() < f64::EPSILON);
}

#[test]
fn test_summary_empty_batch() {
    let summary = validator().get_validation_summary(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.validation_rate, 0.0);
}

#[test]
fn test_wrong_types_are_reported_not_raised() {
    let record = json!({
        "patient_id": 123456,
        "age": "forty",
        "gender": null,
        "enrollment_date": ["2024-01-01"],
        "site_id": {"code": "SITE001"},
        "consent_signed": "yes"
    })
    .as_object()
    .cloned()
    .unwrap();

    let outcome = validator().validate(&record);

    assert!(!outcome.is_valid());
    // Six type errors plus the unparseable enrollment date.
    assert_eq!(outcome.errors.len(), 7);
    assert!(
        outcome
            .errors
            .iter()
            .any(|e| e == "enrollment_date: Invalid date format")
    );
}

#[test]
fn test_empty_record_reports_every_field() {
    let outcome = validator().validate(&Record::new());
    assert_eq!(outcome.errors.len(), 6);
    for error in &outcome.errors {
        assert!(error.ends_with("required field is missing"), "{error}");
    }
}

#[test]
fn test_wall_clock_rejects_far_future() {
    let mut record = patient("PAT000001", 30, true);
    record.insert("enrollment_date".into(), json!("2999-01-01"));
    let outcome = PatientValidator::new().validate(&record);
    assert_eq!(outcome.errors, vec!["enrollment_date: Cannot be in the future"]);
}
