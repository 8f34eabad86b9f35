//! Provenance of the research behind an analysis.

use chrono::NaiveDate;
use serde::Serialize;

wire_enum! {
    /// How the underlying research was gathered.
    DataSourceType, kind = "data source type" {
        AiAnalysis => "ai-analysis",
        Workshop => "workshop",
        Interview => "interview",
        Questionnaire => "questionnaire",
    }
}

/// Provenance record of an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    #[serde(rename = "type")]
    pub source_type: DataSourceType,
    /// Day the research was conducted; distinct from `generatedAt`.
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assumptions: Option<Vec<String>>,
}

impl DataSource {
    /// Number of listed assumptions; zero when none were recorded.
    pub fn assumption_count(&self) -> usize {
        self.assumptions.as_ref().map_or(0, Vec::len)
    }
}
