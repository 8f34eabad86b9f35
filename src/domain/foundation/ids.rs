//! Strongly-typed identifier value objects.
//!
//! Analysis ids are opaque text supplied by the producer (`da-001`) or
//! generated as a UUID for fresh drafts. Risk and block ids are only unique
//! within their owning analysis.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

macro_rules! text_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates the id, returning error if empty. `field` names the source path.
            pub fn new(field: &str, id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field(field));
                }
                Ok(Self(id))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

text_id!(
    /// Unique identifier for a decision analysis.
    AnalysisId
);

text_id!(
    /// Identifier of a risk, unique within its analysis.
    RiskId
);

text_id!(
    /// Identifier of a decision block, unique within its analysis.
    BlockId
);

impl AnalysisId {
    /// Generates a fresh random id for a new analysis.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_id_accepts_opaque_text() {
        let id = AnalysisId::new("id", "da-001").unwrap();
        assert_eq!(id.as_str(), "da-001");
        assert_eq!(format!("{}", id), "da-001");
    }

    #[test]
    fn ids_reject_blank_text() {
        match BlockId::new("decisionBlocks[#0].id", "  ") {
            Err(ValidationError::EmptyField { field }) => {
                assert_eq!(field, "decisionBlocks[#0].id")
            }
            other => panic!("Expected EmptyField, got {:?}", other),
        }
        assert!(RiskId::new("risks[#0].id", "").is_err());
    }

    #[test]
    fn generated_analysis_ids_are_uuids_and_distinct() {
        let a = AnalysisId::generate();
        let b = AnalysisId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = RiskId::new("id", "r1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"r1\"");
    }
}
