//! ValidateAnalysisHandler - Query handler that checks one stored analysis.

use std::sync::Arc;

use crate::domain::decision_analysis::{validate, DecisionAnalysis};
use crate::ports::AnalysisSource;

use super::ReadinessQueryError;

/// Query to validate the analysis stored under a key.
#[derive(Debug, Clone)]
pub struct ValidateAnalysisQuery {
    pub key: String,
}

/// Result of a successful validation.
pub type ValidateAnalysisResult = DecisionAnalysis;

/// Loads a candidate and runs full validation on it.
///
/// Every violation is reported at once in
/// [`ReadinessQueryError::Invalid`].
pub struct ValidateAnalysisHandler {
    source: Arc<dyn AnalysisSource>,
}

impl ValidateAnalysisHandler {
    pub fn new(source: Arc<dyn AnalysisSource>) -> Self {
        Self { source }
    }

    pub fn handle(
        &self,
        query: ValidateAnalysisQuery,
    ) -> Result<ValidateAnalysisResult, ReadinessQueryError> {
        let candidate = self.source.load(&query.key)?;
        validate(&candidate).map_err(|invalid| {
            tracing::warn!(
                key = %query.key,
                violations = invalid.len(),
                "analysis failed validation"
            );
            ReadinessQueryError::Invalid(invalid)
        })
    }
}
