//! JSON record files.

use std::path::Path;

use serde_json::Value;
use tdq_model::Record;

use crate::error::{IngestError, Result};

/// Read a JSON array of objects.
///
/// Values are kept exactly as written, so a quoted `"45"` age stays a
/// string and is reported by validation rather than coerced here.
pub fn read_json_records(path: &Path) -> Result<Vec<Record>> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let document: Value = serde_json::from_str(&content).map_err(|e| IngestError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    let Value::Array(items) = document else {
        return Err(IngestError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(IngestError::NotAnObject {
                path: path.to_path_buf(),
                index,
                found: json_kind(&other),
            }),
        })
        .collect::<Result<Vec<Record>>>()?;

    tracing::debug!(path = %path.display(), records = records.len(), "read JSON records");
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
