//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the decision readiness domain.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, UnknownVariant, ValidationError};
pub use ids::{AnalysisId, BlockId, RiskId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
