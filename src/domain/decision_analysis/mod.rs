//! Decision Analysis Model - the validated shape of an analysis result.
//!
//! # Module Organization
//!
//! - `readiness`, `risk`, `block`, `data_source` - closed enumerations and
//!   the entities of an analysis
//! - `aggregate` - the immutable [`DecisionAnalysis`] root
//! - `candidate` - the unvalidated wire form
//! - `validation` - [`validate`], the only gate from candidate to aggregate
//! - `fixtures` - embedded example analyses
//!
//! Nothing here depends on the readiness classifier.

#[macro_use]
mod macros;

mod aggregate;
mod block;
mod candidate;
mod data_source;
mod readiness;
mod risk;
mod validation;

pub mod fixtures;

pub use aggregate::DecisionAnalysis;
pub use block::{DecisionBlock, Metric, MetricStatus, Trend};
pub use candidate::{
    AnalysisCandidate, BlockCandidate, DataSourceCandidate, MetricCandidate, RiskCandidate,
};
pub use data_source::{DataSource, DataSourceType};
pub use readiness::Readiness;
pub use risk::{DecisionRisk, Severity};
pub use validation::{validate, validate_json, validate_value, AnalysisValidationError};
