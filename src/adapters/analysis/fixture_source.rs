//! Fixture Analysis Source - serves the embedded example analyses.

use crate::domain::decision_analysis::fixtures::{fixture_json, FIXTURE_KEYS};
use crate::domain::decision_analysis::AnalysisCandidate;
use crate::ports::{AnalysisSource, SourceError};

/// Source backed by the analyses compiled into the crate.
///
/// Used when no analyses directory is configured, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureAnalysisSource;

impl FixtureAnalysisSource {
    pub fn new() -> Self {
        Self
    }
}

impl AnalysisSource for FixtureAnalysisSource {
    fn keys(&self) -> Result<Vec<String>, SourceError> {
        let mut keys: Vec<String> = FIXTURE_KEYS.iter().map(|k| k.to_string()).collect();
        keys.sort();
        Ok(keys)
    }

    fn load(&self, key: &str) -> Result<AnalysisCandidate, SourceError> {
        let json = fixture_json(key).ok_or_else(|| SourceError::not_found(key))?;
        let candidate = serde_json::from_str(json).map_err(|e| SourceError::parse(key, e))?;
        tracing::debug!(key, "loaded embedded analysis");
        Ok(candidate)
    }
}
