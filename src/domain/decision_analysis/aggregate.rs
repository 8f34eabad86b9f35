//! DecisionAnalysis aggregate - the root of an analysis result.

use serde::{Deserialize, Serialize};

use super::{validate, AnalysisCandidate, AnalysisValidationError, DataSource, DecisionBlock, DecisionRisk, Readiness};
use crate::domain::foundation::{AnalysisId, Timestamp};

/// A validated, immutable analysis result.
///
/// There are no setters. A newer analysis supersedes this one by building a
/// fresh candidate (see [`AnalysisCandidate::from`]) and validating it again.
///
/// Deserializing goes through [`validate`], so an instance obtained from JSON
/// or YAML has passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AnalysisCandidate")]
pub struct DecisionAnalysis {
    id: AnalysisId,
    main_question: String,
    readiness: Readiness,
    #[serde(skip_serializing_if = "Option::is_none")]
    readiness_label: Option<String>,
    readiness_description: String,
    risks: Vec<DecisionRisk>,
    decision_blocks: Vec<DecisionBlock>,
    data_source: DataSource,
    generated_at: Timestamp,
}

impl DecisionAnalysis {
    /// Assembles an analysis from parts that have already been checked.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn from_parts(
        id: AnalysisId,
        main_question: String,
        readiness: Readiness,
        readiness_label: Option<String>,
        readiness_description: String,
        risks: Vec<DecisionRisk>,
        decision_blocks: Vec<DecisionBlock>,
        data_source: DataSource,
        generated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            main_question,
            readiness,
            readiness_label,
            readiness_description,
            risks,
            decision_blocks,
            data_source,
            generated_at,
        }
    }

    pub fn id(&self) -> &AnalysisId {
        &self.id
    }

    /// The strategic question this analysis answers.
    pub fn main_question(&self) -> &str {
        &self.main_question
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    /// Producer-supplied label overriding the default for the readiness state.
    pub fn readiness_label(&self) -> Option<&str> {
        self.readiness_label.as_deref()
    }

    pub fn readiness_description(&self) -> &str {
        &self.readiness_description
    }

    /// Risks in presentation order.
    pub fn risks(&self) -> &[DecisionRisk] {
        &self.risks
    }

    /// Decision blocks in presentation order. May be empty.
    pub fn decision_blocks(&self) -> &[DecisionBlock] {
        &self.decision_blocks
    }

    pub fn data_source(&self) -> &DataSource {
        &self.data_source
    }

    pub fn generated_at(&self) -> Timestamp {
        self.generated_at
    }
}

impl TryFrom<AnalysisCandidate> for DecisionAnalysis {
    type Error = AnalysisValidationError;

    fn try_from(candidate: AnalysisCandidate) -> Result<Self, Self::Error> {
        validate(&candidate)
    }
}
