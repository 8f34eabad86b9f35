//! Readiness query handlers.
//!
//! Read-only handlers that load candidate analyses from an
//! [`AnalysisSource`](crate::ports::AnalysisSource), validate them and
//! classify them for display.

mod error;
mod get_readiness_overview;
mod list_analyses;
mod validate_analysis;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::ReadinessQueryError;
pub use get_readiness_overview::{
    GetReadinessOverviewHandler, GetReadinessOverviewQuery, GetReadinessOverviewResult,
};
pub use list_analyses::{ListAnalysesHandler, ListAnalysesResult};
pub use validate_analysis::{ValidateAnalysisHandler, ValidateAnalysisQuery, ValidateAnalysisResult};
