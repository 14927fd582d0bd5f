//! Protocol field extraction.

use regex::Regex;
use tdq_model::ParsedProtocol;
use tracing::debug;

use crate::section::{SectionBounds, split_criteria};

/// Heading that opens the inclusion list ("Inclusion Criteria:", "inclusion criteri").
const INCLUSION_HEADING: &str = r"(?i)inclusion\s+criteria?:?\s*";
/// The inclusion list stops at the exclusion heading.
const INCLUSION_END: &str = r"(?i)exclusion\s+criteria";
const EXCLUSION_HEADING: &str = r"(?i)exclusion\s+criteria?:?\s*";
/// The exclusion list stops at a blank line followed by a capitalized line.
const EXCLUSION_END: &str = r"\r?\n[ \t]*\r?\n[A-Z]";
/// "Protocol Number", "Protocol ID" or "Protocol #", then a token of
/// letters, digits and hyphens, all matched without regard to case.
const PROTOCOL_NUMBER: &str = r"(?i)protocol\s+(?:number\b|id\b|#)\s*:?\s*([A-Z0-9-]+)";

/// Extracts structured fields from protocol text.
///
/// Patterns are compiled once in [`ProtocolExtractor::new`] and never change
/// afterwards, so one extractor can be shared freely.
#[derive(Debug, Clone)]
pub struct ProtocolExtractor {
    inclusion: SectionBounds,
    exclusion: SectionBounds,
    protocol_number: Regex,
}

impl Default for ProtocolExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolExtractor {
    pub fn new() -> Self {
        Self {
            inclusion: SectionBounds::new(
                Regex::new(INCLUSION_HEADING).expect("Invalid inclusion heading regex"),
                Regex::new(INCLUSION_END).expect("Invalid inclusion end regex"),
            ),
            exclusion: SectionBounds::new(
                Regex::new(EXCLUSION_HEADING).expect("Invalid exclusion heading regex"),
                Regex::new(EXCLUSION_END).expect("Invalid exclusion end regex"),
            ),
            protocol_number: Regex::new(PROTOCOL_NUMBER).expect("Invalid protocol number regex"),
        }
    }

    pub fn inclusion_bounds(&self) -> &SectionBounds {
        &self.inclusion
    }

    pub fn exclusion_bounds(&self) -> &SectionBounds {
        &self.exclusion
    }

    /// Inclusion criteria in document order; empty without a heading.
    pub fn extract_inclusion_criteria(&self, text: &str) -> Vec<String> {
        self.inclusion
            .find(text)
            .map(split_criteria)
            .unwrap_or_default()
    }

    /// Exclusion criteria in document order; empty without a heading.
    pub fn extract_exclusion_criteria(&self, text: &str) -> Vec<String> {
        self.exclusion
            .find(text)
            .map(split_criteria)
            .unwrap_or_default()
    }

    /// First protocol identifier in the text.
    pub fn extract_protocol_number(&self, text: &str) -> Option<String> {
        self.protocol_number
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn parse_protocol(&self, text: &str) -> ParsedProtocol {
        let parsed = ParsedProtocol {
            protocol_number: self.extract_protocol_number(text),
            inclusion_criteria: self.extract_inclusion_criteria(text),
            exclusion_criteria: self.extract_exclusion_criteria(text),
        };
        debug!(
            has_protocol_number = parsed.protocol_number.is_some(),
            inclusion = parsed.inclusion_criteria.len(),
            exclusion = parsed.exclusion_criteria.len(),
            "parsed protocol text"
        );
        parsed
    }
}
