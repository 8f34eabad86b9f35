//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `decision_analysis` - The `DecisionAnalysis` model and its validation
//! - `readiness` - Readiness & metric classifier (presentation facts)
//! - `dashboard` - View models combining the model with its presentation

pub mod dashboard;
pub mod decision_analysis;
pub mod foundation;
pub mod readiness;
