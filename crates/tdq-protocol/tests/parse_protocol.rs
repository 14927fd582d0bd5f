//! End-to-end extraction over realistic protocol text.

use proptest::prelude::*;
use tdq_protocol::{ParsedProtocol, ProtocolExtractor};

const SYNOPSIS: &str = "\
CLINICAL STUDY PROTOCOL
Protocol Number: ONC-2024-017
Title: A Phase II Study of Drug X in Adults

Inclusion Criteria:
1. Age 18-85 years at screening
2. Histologically confirmed diagnosis
3. ECOG performance status 0-1
4. Signed informed consent

Exclusion Criteria:
1. Pregnancy or breastfeeding
2. Prior treatment with Drug X
- Known hypersensitivity to excipients

Study Design
Randomized, double-blind, placebo-controlled.
";

#[test]
fn test_parse_full_synopsis() {
    let parsed = ProtocolExtractor::new().parse_protocol(SYNOPSIS);

    insta::assert_json_snapshot!(parsed, @r#"
    {
      "protocol_number": "ONC-2024-017",
      "inclusion_criteria": [
        "Age 18-85 years at screening",
        "Histologically confirmed diagnosis",
        "ECOG performance status 0-1",
        "Signed informed consent"
      ],
      "exclusion_criteria": [
        "Pregnancy or breastfeeding",
        "Prior treatment with Drug X",
        "Known hypersensitivity to excipients"
      ]
    }
    "#);
}

#[test]
fn test_parse_without_sections() {
    let parsed = ProtocolExtractor::new().parse_protocol("Informed consent form, version 3.");
    assert_eq!(parsed, ParsedProtocol::default());
}

#[test]
fn test_inclusion_without_exclusion_runs_to_end() {
    let text = "Inclusion Criteria\n- Adults\n- Written consent\n";
    let extractor = ProtocolExtractor::new();
    assert_eq!(
        extractor.extract_inclusion_criteria(text),
        vec!["Adults", "Written consent"]
    );
    assert!(extractor.extract_exclusion_criteria(text).is_empty());
}

#[test]
fn test_trailing_whitespace_is_trimmed() {
    let text = "Inclusion Criteria:   \n1. Adults   \n2.   Consent\t\n\nExclusion Criteria:\n1. Minors  \n";
    let extractor = ProtocolExtractor::new();
    assert_eq!(
        extractor.extract_inclusion_criteria(text),
        vec!["Adults", "Consent"]
    );
    assert_eq!(extractor.extract_exclusion_criteria(text), vec!["Minors"]);
}

#[test]
fn test_wrapped_decimal_line_stays_with_its_criterion() {
    let text = "Inclusion Criteria:\n1. BMI between\n   18.5 and 30\n2. Consent";
    let criteria = ProtocolExtractor::new().extract_inclusion_criteria(text);
    assert_eq!(criteria, vec!["BMI between\n   18.5 and 30", "Consent"]);
}

#[test]
fn test_first_protocol_number_is_taken_as_written() {
    let text = "Protocol ID: AB12c\nAmendment 2\nProtocol Number: XYZ-1\n";
    assert_eq!(
        ProtocolExtractor::new().extract_protocol_number(text).as_deref(),
        Some("AB12c")
    );
}

fn criterion() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,30}[A-Za-z]"
}

proptest! {
    #[test]
    fn extraction_is_order_independent(
        number in "[A-Z]{2,4}-[0-9]{1,4}",
        inclusion in prop::collection::vec(criterion(), 1..6),
        exclusion in prop::collection::vec(criterion(), 1..6),
    ) {
        let mut text = format!("Protocol ID: {number}\n\nInclusion Criteria:\n");
        for (i, item) in inclusion.iter().enumerate() {
            text.push_str(&format!("{}. {item}\n", i + 1));
        }
        text.push_str("Exclusion Criteria:\n");
        for item in &exclusion {
            text.push_str(&format!("- {item}\n"));
        }

        let extractor = ProtocolExtractor::new();
        let exclusion_first = extractor.extract_exclusion_criteria(&text);
        let number_first = extractor.extract_protocol_number(&text);
        let parsed = extractor.parse_protocol(&text);

        prop_assert_eq!(parsed.protocol_number.as_deref(), Some(number.as_str()));
        prop_assert_eq!(&parsed.protocol_number, &number_first);
        prop_assert_eq!(&parsed.inclusion_criteria, &inclusion);
        prop_assert_eq!(&parsed.exclusion_criteria, &exclusion);
        prop_assert_eq!(&parsed.exclusion_criteria, &exclusion_first);
    }
}
