//! Protocol document extraction.
//!
//! Pulls the protocol number and the inclusion/exclusion criteria lists out
//! of free-text protocol documents. Extraction never fails: a heading that
//! cannot be found yields `None` or an empty list.
//!
//! ```
//! use tdq_protocol::ProtocolExtractor;
//!
//! let text = "Protocol Number: ABC-123\n\
//!             Inclusion Criteria:\n1. Age 18-85\n2. Signed consent\n\
//!             Exclusion Criteria:\n1. Pregnancy";
//! let parsed = ProtocolExtractor::new().parse_protocol(text);
//! assert_eq!(parsed.protocol_number.as_deref(), Some("ABC-123"));
//! assert_eq!(parsed.inclusion_criteria, ["Age 18-85", "Signed consent"]);
//! assert_eq!(parsed.exclusion_criteria, ["Pregnancy"]);
//! ```

mod extractor;
mod section;

pub use extractor::ProtocolExtractor;
pub use section::{SectionBounds, split_criteria};
pub use tdq_model::ParsedProtocol;
