use serde::{Deserialize, Serialize};

/// Structured fields extracted from a protocol document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedProtocol {
    pub protocol_number: Option<String>,
    pub inclusion_criteria: Vec<String>,
    pub exclusion_criteria: Vec<String>,
}

impl ParsedProtocol {
    /// True when nothing could be extracted.
    pub fn is_empty(&self) -> bool {
        self.protocol_number.is_none()
            && self.inclusion_criteria.is_empty()
            && self.exclusion_criteria.is_empty()
    }
}
