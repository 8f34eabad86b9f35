//! GetReadinessOverviewHandler - Query handler for the readiness overview.
//!
//! Loads a candidate, validates it and classifies every facet the analysis
//! views render.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::dashboard::ReadinessOverview;
use crate::domain::decision_analysis::validate;
use crate::domain::readiness::StalenessPolicy;
use crate::ports::AnalysisSource;

use super::ReadinessQueryError;

/// Query to get the overview of one analysis.
#[derive(Debug, Clone)]
pub struct GetReadinessOverviewQuery {
    pub key: String,
    /// Day the staleness advisory is computed against.
    pub as_of: NaiveDate,
}

/// Result of a successful overview query.
pub type GetReadinessOverviewResult = ReadinessOverview;

pub struct GetReadinessOverviewHandler {
    source: Arc<dyn AnalysisSource>,
    policy: StalenessPolicy,
}

impl GetReadinessOverviewHandler {
    pub fn new(source: Arc<dyn AnalysisSource>, policy: StalenessPolicy) -> Self {
        Self { source, policy }
    }

    pub fn handle(
        &self,
        query: GetReadinessOverviewQuery,
    ) -> Result<GetReadinessOverviewResult, ReadinessQueryError> {
        let candidate = self.source.load(&query.key)?;
        let analysis = validate(&candidate).map_err(|invalid| {
            tracing::warn!(
                key = %query.key,
                violations = invalid.len(),
                "refusing to classify invalid analysis"
            );
            ReadinessQueryError::Invalid(invalid)
        })?;

        let overview = ReadinessOverview::build(&analysis, &self.policy, query.as_of);
        tracing::debug!(
            key = %query.key,
            readiness = %overview.readiness,
            high_risks = overview.high_risk_count,
            data_stale = overview.data_stale,
            "classified analysis"
        );
        Ok(overview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::readiness::test_support::MockAnalysisSource;
    use crate::domain::decision_analysis::fixtures::fixture_json;
    use crate::domain::decision_analysis::{AnalysisCandidate, Readiness};
    use crate::domain::readiness::{ColorToken, IconKind};
    use crate::ports::SourceError;

    // ─────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────

    fn handler_with(source: MockAnalysisSource) -> GetReadinessOverviewHandler {
        GetReadinessOverviewHandler::new(Arc::new(source), StalenessPolicy::default())
    }

    fn query(key: &str, as_of: NaiveDate) -> GetReadinessOverviewQuery {
        GetReadinessOverviewQuery {
            key: key.to_string(),
            as_of,
        }
    }

    fn jan_20() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn builds_overview_for_blocked_fixture() {
        let handler = handler_with(MockAnalysisSource::with_fixtures());

        let overview = handler.handle(query("blocked", jan_20())).unwrap();

        assert_eq!(overview.readiness, Readiness::Blocked);
        assert_eq!(overview.presentation.icon_kind, IconKind::XCircle);
        assert_eq!(overview.high_risk_count, 2);
        assert!(!overview.data_stale);
    }

    #[test]
    fn stale_data_is_flagged_with_custom_policy() {
        let handler = GetReadinessOverviewHandler::new(
            Arc::new(MockAnalysisSource::with_fixtures()),
            StalenessPolicy::new(5).unwrap(),
        );

        let overview = handler.handle(query("ready", jan_20())).unwrap();

        assert!(overview.data_stale);
        assert_eq!(overview.presentation.color_token, ColorToken::Green);
    }

    #[test]
    fn invalid_candidate_is_not_classified() {
        let mut candidate: AnalysisCandidate =
            serde_json::from_str(fixture_json("blocked").unwrap()).unwrap();
        candidate.readiness = Some(serde_json::json!("unknown"));
        let handler = handler_with(MockAnalysisSource::empty().with("corrupt", candidate));

        let err = handler.handle(query("corrupt", jan_20())).unwrap_err();

        match err {
            ReadinessQueryError::Invalid(invalid) => {
                assert_eq!(invalid.len(), 1);
                assert_eq!(invalid.violations()[0].field(), "readiness");
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn unknown_key_is_not_found() {
        let handler = handler_with(MockAnalysisSource::with_fixtures());

        assert_eq!(
            handler.handle(query("outdated", jan_20())).unwrap_err(),
            ReadinessQueryError::Source(SourceError::not_found("outdated"))
        );
    }

    #[test]
    fn source_failure_propagates() {
        let handler = handler_with(MockAnalysisSource::failing(SourceError::io("offline")));

        assert!(matches!(
            handler.handle(query("ready", jan_20())),
            Err(ReadinessQueryError::Source(SourceError::Io(_)))
        ));
    }
}
