//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AnalysisSource` - where candidate analyses come from

mod analysis_source;

pub use analysis_source::{AnalysisSource, SourceError};
