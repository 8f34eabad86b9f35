//! Dashboard view models assembled from a validated analysis.

pub mod readiness_overview;

pub use readiness_overview::{BlockSummary, ProvenanceSummary, ReadinessOverview, RiskSummary};
