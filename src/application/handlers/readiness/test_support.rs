//! In-memory source shared by the handler tests.

use std::collections::BTreeMap;

use crate::domain::decision_analysis::fixtures::{fixture_json, FIXTURE_KEYS};
use crate::domain::decision_analysis::AnalysisCandidate;
use crate::ports::{AnalysisSource, SourceError};

pub(crate) struct MockAnalysisSource {
    analyses: BTreeMap<String, AnalysisCandidate>,
    failure: Option<SourceError>,
}

impl MockAnalysisSource {
    pub(crate) fn empty() -> Self {
        Self {
            analyses: BTreeMap::new(),
            failure: None,
        }
    }

    pub(crate) fn with_fixtures() -> Self {
        let mut source = Self::empty();
        for key in FIXTURE_KEYS {
            let candidate = serde_json::from_str(fixture_json(key).unwrap()).unwrap();
            source = source.with(key, candidate);
        }
        source
    }

    pub(crate) fn with(mut self, key: &str, candidate: AnalysisCandidate) -> Self {
        self.analyses.insert(key.to_string(), candidate);
        self
    }

    pub(crate) fn failing(error: SourceError) -> Self {
        Self {
            analyses: BTreeMap::new(),
            failure: Some(error),
        }
    }
}

impl AnalysisSource for MockAnalysisSource {
    fn keys(&self) -> Result<Vec<String>, SourceError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self.analyses.keys().cloned().collect())
    }

    fn load(&self, key: &str) -> Result<AnalysisCandidate, SourceError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.analyses
            .get(key)
            .cloned()
            .ok_or_else(|| SourceError::not_found(key))
    }
}
