//! Decision blocks and their supporting metrics.

use serde::Serialize;

use crate::domain::foundation::{BlockId, Percentage};

wire_enum! {
    /// Direction a metric is moving in.
    Trend, kind = "trend" {
        Up => "up",
        Down => "down",
        Stable => "stable",
    }
}

wire_enum! {
    /// Health of a metric value.
    MetricStatus, kind = "status" {
        Good => "good",
        Warning => "warning",
        Critical => "critical",
    }
}

/// Supporting figure for a decision block. Has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    /// Display string: a percentage, a count, or arbitrary formatted text.
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MetricStatus>,
}

/// One sub-question of an analysis with its metric and recommended action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionBlock {
    pub id: BlockId,
    pub question: String,
    pub metric: Metric,
    pub key_insight: String,
    pub implication: String,
    pub recommended_action: String,
    pub confidence: Percentage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn trend_and_status_parse_wire_values() {
        assert_eq!(Trend::from_str("stable").unwrap(), Trend::Stable);
        assert_eq!(MetricStatus::from_str("critical").unwrap(), MetricStatus::Critical);
        let err = MetricStatus::from_str("fine").unwrap_err();
        assert_eq!(err.kind, "status");
        assert_eq!(err.expected, &["good", "warning", "critical"]);
    }

    #[test]
    fn block_serializes_camel_case_and_omits_absent_metric_fields() {
        let block = DecisionBlock {
            id: BlockId::new("id", "db1").unwrap(),
            question: "Wat is onze kernwaarde?".to_string(),
            metric: Metric {
                label: "Brand coherentie".to_string(),
                value: "87%".to_string(),
                trend: None,
                status: Some(MetricStatus::Good),
            },
            key_insight: "insight".to_string(),
            implication: "implication".to_string(),
            recommended_action: "action".to_string(),
            confidence: Percentage::new(87),
        };

        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["keyInsight"], "insight");
        assert_eq!(json["recommendedAction"], "action");
        assert_eq!(json["confidence"], 87);
        assert_eq!(json["metric"]["status"], "good");
        assert!(json["metric"].get("trend").is_none());
    }
}
