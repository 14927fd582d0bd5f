//! Subscriber installation writing to a log file.

use tdq_cli::logging::{LogConfig, LogFormat, REDACTED_VALUE, init_logging, redact_value};
use tempfile::TempDir;
use tracing::level_filters::LevelFilter;

#[test]
fn test_json_logs_go_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tdq.log");
    let mut config = LogConfig::default()
        .with_level_filter(LevelFilter::INFO)
        .with_format(LogFormat::Json)
        .with_ansi(false)
        .with_log_file(Some(path.clone()));
    config.use_env_filter = false;

    init_logging(&config).unwrap();
    tracing::info!(target: "tdq_cli", records = 3, "loaded records");
    tracing::debug!(target: "tdq_cli", "filtered out");
    tracing::info!(target: "other_crate", "filtered out too");

    let written = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 1, "{written}");
    let line: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(line["level"], "INFO");
    assert_eq!(line["fields"]["message"], "loaded records");
    assert_eq!(line["fields"]["records"], 3);
    assert_eq!(redact_value("PAT000001"), REDACTED_VALUE);
}
