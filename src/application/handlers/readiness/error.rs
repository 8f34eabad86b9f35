use thiserror::Error;

use crate::domain::decision_analysis::AnalysisValidationError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::SourceError;

/// Errors from loading and validating an analysis for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadinessQueryError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Invalid(#[from] AnalysisValidationError),
}

impl From<ReadinessQueryError> for DomainError {
    fn from(err: ReadinessQueryError) -> Self {
        match err {
            ReadinessQueryError::Source(SourceError::NotFound(key)) => {
                DomainError::new(ErrorCode::AnalysisNotFound, format!("Analysis not found: {}", key))
                    .with_detail("key", key)
            }
            ReadinessQueryError::Source(other) => {
                DomainError::new(ErrorCode::SourceUnavailable, other.to_string())
            }
            ReadinessQueryError::Invalid(invalid) => {
                let count = invalid.len();
                DomainError::new(ErrorCode::ValidationFailed, invalid.to_string())
                    .with_detail("violations", count.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision_analysis::validate_json;

    #[test]
    fn not_found_maps_to_analysis_not_found() {
        let err: DomainError = ReadinessQueryError::from(SourceError::not_found("q1")).into();
        assert_eq!(err.code, ErrorCode::AnalysisNotFound);
        assert_eq!(err.details.get("key").map(String::as_str), Some("q1"));
    }

    #[test]
    fn io_maps_to_source_unavailable() {
        let err: DomainError = ReadinessQueryError::from(SourceError::io("disk gone")).into();
        assert_eq!(err.code, ErrorCode::SourceUnavailable);
    }

    #[test]
    fn invalid_maps_to_validation_failed_with_count() {
        let invalid = validate_json("{}").unwrap_err();
        let expected = invalid.len().to_string();
        let err: DomainError = ReadinessQueryError::from(invalid).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("violations"), Some(&expected));
    }
}
