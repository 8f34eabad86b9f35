//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `analysis` - Analysis sources (embedded fixtures, files on disk)

pub mod analysis;

pub use analysis::{FileAnalysisSource, FixtureAnalysisSource};
