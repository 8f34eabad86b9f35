//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// A single violation found while validating a candidate value.
///
/// `field` is a path into the wire form, e.g. `decisionBlocks[db1].confidence`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    MissingField { field: String },

    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' has unknown value '{value}' (expected one of: {expected})")]
    UnknownVariant {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Field '{field}' repeats id '{id}'")]
    DuplicateId { field: String, id: String },
}

impl ValidationError {
    /// Creates a missing field validation error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ValidationError::MissingField { field: field.into() }
    }

    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown variant error from a failed enum parse.
    pub fn unknown_variant(field: impl Into<String>, source: &UnknownVariant) -> Self {
        ValidationError::UnknownVariant {
            field: field.into(),
            value: source.value.clone(),
            expected: source.expected.join(", "),
        }
    }

    /// Creates a duplicate id validation error.
    pub fn duplicate_id(field: impl Into<String>, id: impl Into<String>) -> Self {
        ValidationError::DuplicateId {
            field: field.into(),
            id: id.into(),
        }
    }

    /// Returns the field path this violation refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::UnknownVariant { field, .. }
            | ValidationError::DuplicateId { field, .. } => field,
        }
    }
}

/// A string that is not a member of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value '{value}'")]
pub struct UnknownVariant {
    /// Name of the enumeration, e.g. `readiness` or `severity`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Wire values the enumeration accepts.
    pub expected: &'static [&'static str],
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>, expected: &'static [&'static str]) -> Self {
        Self {
            kind,
            value: value.into(),
            expected,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Classification errors
    UnknownReadinessState,
    UnknownEnumValue,

    // Source errors
    AnalysisNotFound,
    SourceUnavailable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::UnknownReadinessState => "UNKNOWN_READINESS_STATE",
            ErrorCode::UnknownEnumValue => "UNKNOWN_ENUM_VALUE",
            ErrorCode::AnalysisNotFound => "ANALYSIS_NOT_FOUND",
            ErrorCode::SourceUnavailable => "SOURCE_UNAVAILABLE",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// This is the flattened form handed to presentation collaborators that
/// render an error state instead of an analysis.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::UnknownVariant { .. } => ErrorCode::UnknownEnumValue,
            ValidationError::MissingField { .. } | ValidationError::DuplicateId { .. } => {
                ErrorCode::ValidationFailed
            }
        };
        let field = err.field().to_string();
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}
