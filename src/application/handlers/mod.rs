//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod readiness;

pub use readiness::{
    GetReadinessOverviewHandler, GetReadinessOverviewQuery, GetReadinessOverviewResult,
    ListAnalysesHandler, ListAnalysesResult, ReadinessQueryError, ValidateAnalysisHandler,
    ValidateAnalysisQuery, ValidateAnalysisResult,
};
