use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::decision_analysis::{
    DataSource, DataSourceType, DecisionAnalysis, DecisionBlock, DecisionRisk, Readiness, Severity,
};
use crate::domain::foundation::{AnalysisId, BlockId, Percentage, RiskId, Timestamp};
use crate::domain::readiness::{
    ColorToken, GlyphKind, ReadinessClassifier, ReadinessPresentation, RiskPresentation,
    StalenessPolicy,
};

/// Everything the full and compact analysis views render, classified once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessOverview {
    pub analysis_id: AnalysisId,
    pub main_question: String,

    /// Verdict as supplied by the producer
    pub readiness: Readiness,
    pub presentation: ReadinessPresentation,
    pub readiness_description: String,

    /// Drives the "N hoge risico's" line; phrasing is left to the view
    pub high_risk_count: usize,

    /// In model order
    pub risks: Vec<RiskSummary>,
    pub blocks: Vec<BlockSummary>,

    pub mean_confidence: Option<Percentage>,
    pub provenance: ProvenanceSummary,

    /// Advisory only; never changes `readiness`
    pub data_stale: bool,
    pub generated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSummary {
    pub id: RiskId,
    pub severity: Severity,
    pub presentation: RiskPresentation,
    pub category: String,
    pub description: String,
    pub mitigation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    pub id: BlockId,
    pub question: String,
    pub metric_label: String,
    pub metric_value: String,
    pub metric_color: ColorToken,
    pub trend_glyph: GlyphKind,
    /// The compact view hides the glyph when no trend was supplied
    pub has_trend: bool,
    pub key_insight: String,
    pub implication: String,
    pub recommended_action: String,
    pub confidence: Percentage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceSummary {
    pub source_type: DataSourceType,
    pub method_label: &'static str,
    pub date: NaiveDate,
    pub participants: Option<u32>,
    pub assumptions: Vec<String>,
    pub assumption_count: usize,
    pub data_age_days: i64,
}

impl ReadinessOverview {
    /// Classifies every facet of `analysis` for display on `as_of`.
    pub fn build(analysis: &DecisionAnalysis, policy: &StalenessPolicy, as_of: NaiveDate) -> Self {
        Self {
            analysis_id: analysis.id().clone(),
            main_question: analysis.main_question().to_string(),
            readiness: analysis.readiness(),
            presentation: ReadinessClassifier::readiness_presentation(
                analysis.readiness(),
                analysis.readiness_label(),
            ),
            readiness_description: analysis.readiness_description().to_string(),
            high_risk_count: ReadinessClassifier::count_by_severity(analysis.risks(), Severity::High),
            risks: analysis.risks().iter().map(RiskSummary::from).collect(),
            blocks: analysis.decision_blocks().iter().map(BlockSummary::from).collect(),
            mean_confidence: ReadinessClassifier::mean_confidence(analysis.decision_blocks()),
            provenance: ProvenanceSummary::build(analysis.data_source(), policy, as_of),
            data_stale: policy.is_stale(analysis.data_source(), as_of),
            generated_at: analysis.generated_at(),
        }
    }

    /// True when there are no blocks to show.
    pub fn is_degenerate(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl From<&DecisionRisk> for RiskSummary {
    fn from(risk: &DecisionRisk) -> Self {
        Self {
            id: risk.id.clone(),
            severity: risk.severity,
            presentation: ReadinessClassifier::risk_presentation(risk.severity),
            category: risk.category.clone(),
            description: risk.description.clone(),
            mitigation: risk.mitigation.clone(),
        }
    }
}

impl From<&DecisionBlock> for BlockSummary {
    fn from(block: &DecisionBlock) -> Self {
        Self {
            id: block.id.clone(),
            question: block.question.clone(),
            metric_label: block.metric.label.clone(),
            metric_value: block.metric.value.clone(),
            metric_color: ReadinessClassifier::metric_presentation(block.metric.status).color_token,
            trend_glyph: ReadinessClassifier::trend_glyph(block.metric.trend),
            has_trend: block.metric.trend.is_some(),
            key_insight: block.key_insight.clone(),
            implication: block.implication.clone(),
            recommended_action: block.recommended_action.clone(),
            confidence: block.confidence,
        }
    }
}

impl ProvenanceSummary {
    fn build(source: &DataSource, policy: &StalenessPolicy, as_of: NaiveDate) -> Self {
        Self {
            source_type: source.source_type,
            method_label: ReadinessClassifier::source_label(source.source_type),
            date: source.date,
            participants: source.participants,
            assumption_count: source.assumption_count(),
            assumptions: source.assumptions.clone().unwrap_or_default(),
            data_age_days: policy.data_age_days(source, as_of),
        }
    }
}

#[cfg(test)]
#[path = "readiness_overview_test.rs"]
mod readiness_overview_test;
