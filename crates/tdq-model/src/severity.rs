//! Adverse event severity grading.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of an adverse event, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AeSeverity {
    Mild,
    Moderate,
    Severe,
    #[serde(rename = "Life-threatening")]
    LifeThreatening,
    Fatal,
}

impl AeSeverity {
    /// All grades in ascending order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Mild,
            Self::Moderate,
            Self::Severe,
            Self::LifeThreatening,
            Self::Fatal,
        ]
    }

    /// Canonical label as it appears in source data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
            Self::LifeThreatening => "Life-threatening",
            Self::Fatal => "Fatal",
        }
    }
}

impl fmt::Display for AeSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not one of the canonical severity labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(pub String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for AeSeverity {
    type Err = ParseSeverityError;

    /// Exact, case-sensitive match against the canonical labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!("Mild".parse::<AeSeverity>(), Ok(AeSeverity::Mild));
        assert_eq!(
            "Life-threatening".parse::<AeSeverity>(),
            Ok(AeSeverity::LifeThreatening)
        );
        assert!("mild".parse::<AeSeverity>().is_err());
        assert!("Life-Threatening".parse::<AeSeverity>().is_err());
        assert!(" Mild".parse::<AeSeverity>().is_err());
    }

    #[test]
    fn ordering_follows_grade() {
        assert!(AeSeverity::Mild < AeSeverity::Moderate);
        assert!(AeSeverity::LifeThreatening < AeSeverity::Fatal);
        let mut sorted = AeSeverity::all().to_vec();
        sorted.sort();
        assert_eq!(sorted, AeSeverity::all());
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&AeSeverity::LifeThreatening).unwrap();
        assert_eq!(json, "\"Life-threatening\"");
    }
}
