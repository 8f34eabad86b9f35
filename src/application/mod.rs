//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every operation here is a read: load, validate, classify.

pub mod handlers;

pub use handlers::{
    GetReadinessOverviewHandler, GetReadinessOverviewQuery, GetReadinessOverviewResult,
    ListAnalysesHandler, ListAnalysesResult, ReadinessQueryError, ValidateAnalysisHandler,
    ValidateAnalysisQuery, ValidateAnalysisResult,
};
