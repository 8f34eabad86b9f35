//! Unvalidated wire form of a decision analysis.
//!
//! Every field is optional. Enumerations and numbers are kept as raw JSON
//! values, and dates as raw text, so that [`validate`](super::validate) can
//! report every problem in a document, type slips included, instead of
//! stopping at the first one.
//!
//! Candidates only decode from objects (JSON objects, YAML mappings). A
//! sequence is never read positionally.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{DecisionAnalysis, Readiness};
use crate::domain::foundation::{AnalysisId, Timestamp};

/// Routes (de)serialization through the derived `remote = "Self"` functions,
/// decoding a map first so that sequences are rejected.
macro_rules! object_form {
    ($($name:ident),+ $(,)?) => {$(
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $name::serialize(self, serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let fields = Map::<String, Value>::deserialize(deserializer)?;
                $name::deserialize(Value::Object(fields)).map_err(D::Error::custom)
            }
        }
    )+};
}

object_form!(
    AnalysisCandidate,
    RiskCandidate,
    BlockCandidate,
    MetricCandidate,
    DataSourceCandidate,
);

/// Candidate `DecisionAnalysis` as read from storage, an API, or a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct AnalysisCandidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risks: Option<Vec<RiskCandidate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_blocks: Option<Vec<BlockCandidate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSourceCandidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct RiskCandidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct BlockCandidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<MetricCandidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_insight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct MetricCandidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct DataSourceCandidate {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assumptions: Option<Vec<String>>,
}

impl AnalysisCandidate {
    /// Starts a fresh analysis with a generated id and `generatedAt = now`.
    ///
    /// Risks and blocks start empty; the data source is left for the
    /// producer to fill in before validating.
    pub fn draft(main_question: impl Into<String>, readiness: Readiness) -> Self {
        Self {
            id: Some(AnalysisId::generate().to_string()),
            main_question: Some(main_question.into()),
            readiness: Some(Value::from(readiness.as_str())),
            readiness_label: None,
            readiness_description: Some(String::new()),
            risks: Some(Vec::new()),
            decision_blocks: Some(Vec::new()),
            data_source: None,
            generated_at: Some(Timestamp::now().as_datetime().to_rfc3339()),
        }
    }
}

impl From<&DecisionAnalysis> for AnalysisCandidate {
    fn from(analysis: &DecisionAnalysis) -> Self {
        Self {
            id: Some(analysis.id().to_string()),
            main_question: Some(analysis.main_question().to_string()),
            readiness: Some(Value::from(analysis.readiness().as_str())),
            readiness_label: analysis.readiness_label().map(str::to_string),
            readiness_description: Some(analysis.readiness_description().to_string()),
            risks: Some(
                analysis
                    .risks()
                    .iter()
                    .map(|r| RiskCandidate {
                        id: Some(r.id.to_string()),
                        severity: Some(Value::from(r.severity.as_str())),
                        category: Some(r.category.clone()),
                        description: Some(r.description.clone()),
                        mitigation: r.mitigation.clone(),
                    })
                    .collect(),
            ),
            decision_blocks: Some(
                analysis
                    .decision_blocks()
                    .iter()
                    .map(|b| BlockCandidate {
                        id: Some(b.id.to_string()),
                        question: Some(b.question.clone()),
                        metric: Some(MetricCandidate {
                            label: Some(b.metric.label.clone()),
                            value: Some(b.metric.value.clone()),
                            trend: b.metric.trend.map(|t| Value::from(t.as_str())),
                            status: b.metric.status.map(|s| Value::from(s.as_str())),
                        }),
                        key_insight: Some(b.key_insight.clone()),
                        implication: Some(b.implication.clone()),
                        recommended_action: Some(b.recommended_action.clone()),
                        confidence: Some(Value::from(b.confidence.value())),
                    })
                    .collect(),
            ),
            data_source: Some(DataSourceCandidate {
                source_type: Some(Value::from(analysis.data_source().source_type.as_str())),
                date: Some(analysis.data_source().date.format("%Y-%m-%d").to_string()),
                participants: analysis.data_source().participants.map(Value::from),
                assumptions: analysis.data_source().assumptions.clone(),
            }),
            generated_at: Some(analysis.generated_at().as_datetime().to_rfc3339()),
        }
    }
}
