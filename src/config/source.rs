//! Analysis source configuration

use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::{FileAnalysisSource, FixtureAnalysisSource};
use crate::ports::AnalysisSource;

/// Where analyses are read from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceConfig {
    /// Directory of JSON/YAML analyses; embedded fixtures when absent
    pub analyses_dir: Option<PathBuf>,
}

impl SourceConfig {
    /// Builds the configured source.
    pub fn build(&self) -> Arc<dyn AnalysisSource> {
        match &self.analyses_dir {
            Some(dir) => Arc::new(FileAnalysisSource::new(dir.clone())),
            None => Arc::new(FixtureAnalysisSource::new()),
        }
    }

    /// Validate source configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.analyses_dir {
            Some(dir) if dir.as_os_str().is_empty() => Err(ValidationError::EmptyAnalysesDir),
            _ => Ok(()),
        }
    }
}
