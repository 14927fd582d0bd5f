//! DataFrame to record conversion.

use polars::prelude::{AnyValue, DataFrame};
use serde_json::{Number, Value};
use tdq_model::Record;

/// Strip a UTF-8 byte-order mark and surrounding whitespace from a header.
pub fn normalize_column_name(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_string()
}

/// Convert a single Polars cell to a JSON value.
///
/// Nulls and non-finite floats become `null`; temporal and nested values
/// fall back to their display text.
pub fn any_to_json(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::String(s) => Value::String(s.to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        AnyValue::Int32(v) => Value::from(v),
        AnyValue::Int64(v) => Value::from(v),
        AnyValue::UInt32(v) => Value::from(v),
        AnyValue::UInt64(v) => Value::from(v),
        AnyValue::Float32(v) => float_to_json(f64::from(v)),
        AnyValue::Float64(v) => float_to_json(v),
        other => Value::String(other.to_string()),
    }
}

fn float_to_json(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

/// One record per row, keyed by normalized column name.
///
/// Every column appears in every record; empty cells are `null`.
pub fn dataframe_to_records(df: &DataFrame) -> Vec<Record> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_column_name(name.as_str()))
        .collect();
    let columns = df.get_columns();

    (0..df.height())
        .map(|idx| {
            names
                .iter()
                .zip(columns)
                .map(|(name, column)| {
                    let value = column.get(idx).map_or(Value::Null, any_to_json);
                    (name.clone(), value)
                })
                .collect()
        })
        .collect()
}
