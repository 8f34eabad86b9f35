//! Analysis source adapters.
//!
//! - `FixtureAnalysisSource` - the embedded example analyses
//! - `FileAnalysisSource` - JSON or YAML documents in a directory

mod file_source;
mod fixture_source;

pub use file_source::FileAnalysisSource;
pub use fixture_source::FixtureAnalysisSource;
