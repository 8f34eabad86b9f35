//! Readiness & Metric Classifier - one mapping table per presentation fact.

use std::str::FromStr;

use crate::domain::decision_analysis::{
    DataSourceType, DecisionBlock, DecisionRisk, MetricStatus, Readiness, Severity, Trend,
};
use crate::domain::foundation::Percentage;

use super::{
    ClassificationError, ColorToken, GlyphKind, IconKind, MetricPresentation,
    ReadinessPresentation, RiskPresentation,
};

pub const READY_LABEL: &str = "Beslisklaar – Laag risico";
pub const UNCERTAIN_LABEL: &str = "Onzeker – Gemiddeld risico";
pub const BLOCKED_LABEL: &str = "Geblokkeerd – Hoog risico";
pub const OUTDATED_LABEL: &str = "Verouderd – Data niet meer actueel";

/// Stateless classifier from model values to presentation facts.
///
/// Typed operations are exhaustive matches and cannot fail. The `classify_*`
/// operations accept raw wire strings and fail on anything outside the
/// closed sets.
pub struct ReadinessClassifier;

impl ReadinessClassifier {
    /// Default label for a readiness state.
    pub fn default_label(readiness: Readiness) -> &'static str {
        match readiness {
            Readiness::Ready => READY_LABEL,
            Readiness::Uncertain => UNCERTAIN_LABEL,
            Readiness::Blocked => BLOCKED_LABEL,
            Readiness::Outdated => OUTDATED_LABEL,
        }
    }

    /// Icon, color and label for a verdict.
    ///
    /// A non-empty `override_label` replaces the default label.
    pub fn readiness_presentation(
        readiness: Readiness,
        override_label: Option<&str>,
    ) -> ReadinessPresentation {
        let (icon_kind, color_token) = match readiness {
            Readiness::Ready => (IconKind::CheckCircle, ColorToken::Green),
            Readiness::Uncertain => (IconKind::AlertCircle, ColorToken::Amber),
            Readiness::Blocked => (IconKind::XCircle, ColorToken::Red),
            Readiness::Outdated => (IconKind::Clock, ColorToken::Slate),
        };
        let label = override_label
            .filter(|label| !label.trim().is_empty())
            .unwrap_or_else(|| Self::default_label(readiness));

        ReadinessPresentation {
            icon_kind,
            color_token,
            label: label.to_string(),
        }
    }

    pub fn risk_presentation(severity: Severity) -> RiskPresentation {
        match severity {
            Severity::High => RiskPresentation {
                color_token: ColorToken::Red,
                label: "Hoog",
                rank: 1,
            },
            Severity::Medium => RiskPresentation {
                color_token: ColorToken::Amber,
                label: "Gemiddeld",
                rank: 2,
            },
            Severity::Low => RiskPresentation {
                color_token: ColorToken::Blue,
                label: "Laag",
                rank: 3,
            },
        }
    }

    /// Color for a metric. An absent status renders like `good`.
    pub fn metric_presentation(status: Option<MetricStatus>) -> MetricPresentation {
        let color_token = match status.unwrap_or(MetricStatus::Good) {
            MetricStatus::Good => ColorToken::Green,
            MetricStatus::Warning => ColorToken::Amber,
            MetricStatus::Critical => ColorToken::Red,
        };
        MetricPresentation { color_token }
    }

    /// Glyph for a trend. `stable` and no trend both render flat.
    pub fn trend_glyph(trend: Option<Trend>) -> GlyphKind {
        match trend {
            Some(Trend::Up) => GlyphKind::Up,
            Some(Trend::Down) => GlyphKind::Down,
            Some(Trend::Stable) | None => GlyphKind::Flat,
        }
    }

    /// Number of risks with the given severity.
    ///
    /// Returns a count, not a phrase; pluralizing is up to the caller.
    pub fn count_by_severity(risks: &[DecisionRisk], severity: Severity) -> usize {
        risks.iter().filter(|r| r.has_severity(severity)).count()
    }

    /// Risks ordered most severe first. Ties keep their model order.
    pub fn sorted_by_severity(risks: &[DecisionRisk]) -> Vec<&DecisionRisk> {
        let mut sorted: Vec<_> = risks.iter().collect();
        sorted.sort_by_key(|r| Self::risk_presentation(r.severity).rank);
        sorted
    }

    /// Mean block confidence for display; `None` when there are no blocks.
    pub fn mean_confidence(blocks: &[DecisionBlock]) -> Option<Percentage> {
        Percentage::mean(blocks.iter().map(|b| b.confidence))
    }

    /// Display name of a research method.
    pub fn source_label(source_type: DataSourceType) -> &'static str {
        match source_type {
            DataSourceType::AiAnalysis => "AI Exploratie",
            DataSourceType::Workshop => "Workshop",
            DataSourceType::Interview => "Interviews",
            DataSourceType::Questionnaire => "Questionnaire",
        }
    }

    /// Classifies a raw readiness string.
    ///
    /// # Errors
    ///
    /// [`ClassificationError::UnknownReadinessState`] for any value outside
    /// the four known states.
    pub fn classify_readiness(
        raw: &str,
        override_label: Option<&str>,
    ) -> Result<ReadinessPresentation, ClassificationError> {
        let readiness = parse::<Readiness>(raw)?;
        Ok(Self::readiness_presentation(readiness, override_label))
    }

    pub fn classify_severity(raw: &str) -> Result<RiskPresentation, ClassificationError> {
        parse::<Severity>(raw).map(Self::risk_presentation)
    }

    pub fn classify_metric_status(raw: Option<&str>) -> Result<MetricPresentation, ClassificationError> {
        let status = raw.map(parse::<MetricStatus>).transpose()?;
        Ok(Self::metric_presentation(status))
    }

    pub fn classify_trend(raw: Option<&str>) -> Result<GlyphKind, ClassificationError> {
        let trend = raw.map(parse::<Trend>).transpose()?;
        Ok(Self::trend_glyph(trend))
    }
}

fn parse<E>(raw: &str) -> Result<E, ClassificationError>
where
    E: FromStr<Err = crate::domain::foundation::UnknownVariant>,
{
    E::from_str(raw).map_err(|err| {
        tracing::warn!(kind = err.kind, value = %err.value, "unknown enumeration value reached the classifier");
        ClassificationError::from(err)
    })
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod classifier_test;
