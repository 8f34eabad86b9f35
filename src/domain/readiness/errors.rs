//! Classification errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, UnknownVariant};

/// An enumeration value outside its closed set reached the classifier.
///
/// This is a data-contract bug upstream. It is surfaced instead of picking a
/// fallback visual.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("unknown readiness state '{0}'")]
    UnknownReadinessState(String),

    #[error("unknown {kind} value '{value}'")]
    UnknownEnumValue { kind: &'static str, value: String },
}

impl ClassificationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ClassificationError::UnknownReadinessState(_) => ErrorCode::UnknownReadinessState,
            ClassificationError::UnknownEnumValue { .. } => ErrorCode::UnknownEnumValue,
        }
    }
}

impl From<UnknownVariant> for ClassificationError {
    fn from(err: UnknownVariant) -> Self {
        if err.kind == "readiness" {
            ClassificationError::UnknownReadinessState(err.value)
        } else {
            ClassificationError::UnknownEnumValue {
                kind: err.kind,
                value: err.value,
            }
        }
    }
}

impl From<ClassificationError> for DomainError {
    fn from(err: ClassificationError) -> Self {
        let value = match &err {
            ClassificationError::UnknownReadinessState(value) => value.clone(),
            ClassificationError::UnknownEnumValue { value, .. } => value.clone(),
        };
        DomainError::new(err.code(), err.to_string()).with_detail("value", value)
    }
}
