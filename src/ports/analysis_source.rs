//! Analysis Source Port - where candidate analyses are read from.
//!
//! A source hands out *candidates*, never validated analyses. Validation
//! stays in the domain so every source is held to the same rules.

use thiserror::Error;

use crate::domain::decision_analysis::AnalysisCandidate;

/// Port for reading candidate analyses by key.
///
/// # Contract
///
/// Implementations must:
/// - Return keys in a stable (sorted) order
/// - Report an unknown key as `SourceError::NotFound`
/// - Report a document that is not JSON/YAML shaped like a candidate as
///   `SourceError::Parse`, without attempting validation
pub trait AnalysisSource: Send + Sync {
    /// Keys of every analysis this source can load.
    fn keys(&self) -> Result<Vec<String>, SourceError>;

    /// Loads the candidate stored under `key`.
    fn load(&self, key: &str) -> Result<AnalysisCandidate, SourceError>;
}

/// Errors that can occur while reading from a source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("Analysis not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Analysis '{key}' could not be parsed: {reason}")]
    Parse { key: String, reason: String },
}

impl SourceError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound(key.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    pub fn parse(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::io(err.to_string())
    }
}
