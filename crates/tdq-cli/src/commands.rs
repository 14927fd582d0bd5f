use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use tdq_ingest::{load_events, load_patients};
use tdq_model::{BatchValidation, ParsedProtocol};
use tdq_protocol::ProtocolExtractor;
use tdq_validate::{AdverseEventValidator, PatientValidator, ReferenceTime};

use crate::logging::redact_value;
use crate::types::{EventReport, InvalidRow, PatientEvents, PatientReport};

/// Options for the adverse event command.
#[derive(Debug, Clone, Default)]
pub struct EventOptions {
    /// Also collect the events of this patient.
    pub patient: Option<String>,
    pub days: u32,
    pub reference_time: ReferenceTime,
}

pub fn run_patients(path: &Path, reference_time: ReferenceTime) -> Result<PatientReport> {
    let span = info_span!("patients", path = %path.display());
    let _guard = span.enter();

    let records = load_patients(path)
        .with_context(|| format!("load patients from {}", path.display()))?;
    let validator = PatientValidator::new().with_reference_time(reference_time);
    let batch = validator.validate_batch(&records);
    let summary = batch.summary();
    let invalid = invalid_rows(&batch, "patient_id");

    info!(
        total = summary.total,
        valid = summary.valid,
        invalid = summary.invalid,
        "validated patients"
    );
    Ok(PatientReport {
        source: path.to_path_buf(),
        summary,
        invalid,
    })
}

pub fn run_events(path: &Path, options: &EventOptions) -> Result<EventReport> {
    let span = info_span!("events", path = %path.display());
    let _guard = span.enter();

    let events =
        load_events(path).with_context(|| format!("load events from {}", path.display()))?;
    let validator = AdverseEventValidator::new().with_reference_time(options.reference_time);
    let batch = validator.validate_batch(&events);
    let summary = batch.summary();
    let invalid = invalid_rows(&batch, "event_id");

    let severity_counts = validator.categorize_by_severity(&events);
    let event_rate = validator.calculate_event_rate(&events, options.days);
    let patient = options.patient.as_ref().map(|patient_id| {
        let matching = validator.get_events_by_patient(&events, patient_id);
        debug!(
            patient_id = redact_value(patient_id),
            events = matching.len(),
            "filtered events by patient"
        );
        PatientEvents {
            patient_id: patient_id.clone(),
            events: matching.into_iter().cloned().collect(),
        }
    });

    info!(
        total = summary.total,
        valid = summary.valid,
        invalid = summary.invalid,
        event_rate,
        "validated adverse events"
    );
    Ok(EventReport {
        source: path.to_path_buf(),
        summary,
        invalid,
        severity_counts,
        event_rate,
        days: options.days,
        patient,
    })
}

pub fn run_protocol(path: &Path) -> Result<ParsedProtocol> {
    let span = info_span!("protocol", path = %path.display());
    let _guard = span.enter();

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read protocol {}", path.display()))?;
    let parsed = ProtocolExtractor::new().parse_protocol(&text);
    if parsed.is_empty() {
        warn!("no protocol number or criteria sections found");
    }
    Ok(parsed)
}

fn invalid_rows(batch: &BatchValidation<'_>, id_field: &str) -> Vec<InvalidRow> {
    batch
        .invalid
        .iter()
        .map(|invalid| {
            let row = InvalidRow::from_invalid(invalid, id_field);
            debug!(
                row = row.row,
                id = redact_value(row.id.as_deref().unwrap_or_default()),
                errors = row.errors.len(),
                "invalid record"
            );
            row
        })
        .collect()
}
