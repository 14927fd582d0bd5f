//! Dynamically typed record helpers.

use serde_json::Value;

/// A single input row: field name to JSON value.
pub type Record = serde_json::Map<String, Value>;

/// Returns true when a field is absent, null, or an empty string.
///
/// Whitespace-only strings are not blank.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Human-readable form of a value for error messages.
///
/// Strings are shown without quotes, everything else in its JSON form.
pub fn value_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_values() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&Value::Null)));
        assert!(is_blank(Some(&json!(""))));
        assert!(!is_blank(Some(&json!(" "))));
        assert!(!is_blank(Some(&json!(0))));
        assert!(!is_blank(Some(&json!(false))));
    }

    #[test]
    fn labels() {
        assert_eq!(value_label(&json!("Mild")), "Mild");
        assert_eq!(value_label(&json!(3)), "3");
        assert_eq!(value_label(&Value::Null), "null");
    }
}
