//! Validation of candidate analyses.
//!
//! `validate` walks the whole candidate in document order and collects every
//! violation. Only a candidate with zero violations becomes a
//! [`DecisionAnalysis`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use thiserror::Error;

use super::{
    AnalysisCandidate, BlockCandidate, DataSource, DataSourceCandidate, DecisionAnalysis,
    DecisionBlock, DecisionRisk, Metric, MetricCandidate, RiskCandidate,
};
use crate::domain::foundation::{
    AnalysisId, BlockId, Percentage, RiskId, Timestamp, UnknownVariant, ValidationError,
};

/// Every violation found in one candidate, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct AnalysisValidationError {
    violations: Vec<ValidationError>,
}

impl AnalysisValidationError {
    fn single(violation: ValidationError) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violations reported against `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.violations.iter().filter(move |v| v.field() == field)
    }
}

impl fmt::Display for AnalysisValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "analysis failed validation with {} violation(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}

/// Validates a candidate analysis.
///
/// # Errors
///
/// Returns an [`AnalysisValidationError`] listing every violation.
pub fn validate(candidate: &AnalysisCandidate) -> Result<DecisionAnalysis, AnalysisValidationError> {
    let mut c = Collector::default();

    let id = c
        .non_empty_text("id", &candidate.id)
        .and_then(|raw| c.take(AnalysisId::new("id", raw)));
    let main_question = c.non_empty_text("mainQuestion", &candidate.main_question);
    let readiness = c
        .required("readiness", &candidate.readiness)
        .and_then(|raw| c.variant("readiness", raw));
    let readiness_label = candidate
        .readiness_label
        .as_ref()
        .filter(|label| !label.trim().is_empty())
        .cloned();
    let readiness_description = c.text("readinessDescription", &candidate.readiness_description);

    let risks = c.required("risks", &candidate.risks).map(|items| {
        let mut seen = HashSet::new();
        items
            .iter()
            .enumerate()
            .filter_map(|(index, risk)| validate_risk(&mut c, index, risk, &mut seen))
            .collect::<Vec<_>>()
    });

    let decision_blocks = c.required("decisionBlocks", &candidate.decision_blocks).map(|items| {
        let mut seen = HashSet::new();
        items
            .iter()
            .enumerate()
            .filter_map(|(index, block)| validate_block(&mut c, index, block, &mut seen))
            .collect::<Vec<_>>()
    });

    let data_source = c
        .required("dataSource", &candidate.data_source)
        .and_then(|source| validate_data_source(&mut c, source));

    let generated_at = c
        .required("generatedAt", &candidate.generated_at)
        .and_then(|raw| c.take(Timestamp::parse_rfc3339("generatedAt", raw)));

    match (
        id,
        main_question,
        readiness,
        readiness_description,
        risks,
        decision_blocks,
        data_source,
        generated_at,
    ) {
        (
            Some(id),
            Some(main_question),
            Some(readiness),
            Some(readiness_description),
            Some(risks),
            Some(decision_blocks),
            Some(data_source),
            Some(generated_at),
        ) if c.violations.is_empty() => Ok(DecisionAnalysis::from_parts(
            id,
            main_question,
            readiness,
            readiness_label,
            readiness_description,
            risks,
            decision_blocks,
            data_source,
            generated_at,
        )),
        _ => Err(AnalysisValidationError {
            violations: c.violations,
        }),
    }
}

/// Parses a JSON document and validates it.
///
/// A document whose structure does not fit the wire shape (a root that is
/// not an object, a number where a list or object is expected) yields a
/// single `InvalidFormat` violation on `$`. Mistyped enumeration and number
/// fields are reported on their own path like any other violation.
pub fn validate_json(text: &str) -> Result<DecisionAnalysis, AnalysisValidationError> {
    let candidate: AnalysisCandidate = serde_json::from_str(text)
        .map_err(|e| AnalysisValidationError::single(ValidationError::invalid_format("$", e.to_string())))?;
    validate(&candidate)
}

/// Validates an already-parsed JSON value.
pub fn validate_value(value: serde_json::Value) -> Result<DecisionAnalysis, AnalysisValidationError> {
    let candidate: AnalysisCandidate = serde_json::from_value(value)
        .map_err(|e| AnalysisValidationError::single(ValidationError::invalid_format("$", e.to_string())))?;
    validate(&candidate)
}

fn validate_risk(
    c: &mut Collector,
    index: usize,
    risk: &RiskCandidate,
    seen: &mut HashSet<String>,
) -> Option<DecisionRisk> {
    let path = format!("risks[{}]", item_label(index, &risk.id));

    let id = c
        .non_empty_text(&format!("{}.id", path), &risk.id)
        .and_then(|raw| c.unique(&format!("{}.id", path), raw, seen))
        .and_then(|raw| c.take(RiskId::new(&format!("{}.id", path), raw)));
    let severity = c
        .required(&format!("{}.severity", path), &risk.severity)
        .and_then(|raw| c.variant(&format!("{}.severity", path), raw));
    let category = c.text(&format!("{}.category", path), &risk.category);
    let description = c.non_empty_text(&format!("{}.description", path), &risk.description);

    Some(DecisionRisk {
        id: id?,
        severity: severity?,
        category: category?,
        description: description?,
        mitigation: risk.mitigation.clone(),
    })
}

fn validate_block(
    c: &mut Collector,
    index: usize,
    block: &BlockCandidate,
    seen: &mut HashSet<String>,
) -> Option<DecisionBlock> {
    let path = format!("decisionBlocks[{}]", item_label(index, &block.id));

    let id = c
        .non_empty_text(&format!("{}.id", path), &block.id)
        .and_then(|raw| c.unique(&format!("{}.id", path), raw, seen))
        .and_then(|raw| c.take(BlockId::new(&format!("{}.id", path), raw)));
    let question = c.non_empty_text(&format!("{}.question", path), &block.question);
    let metric = c
        .required(&format!("{}.metric", path), &block.metric)
        .and_then(|metric| validate_metric(c, &format!("{}.metric", path), metric));
    let key_insight = c.text(&format!("{}.keyInsight", path), &block.key_insight);
    let implication = c.text(&format!("{}.implication", path), &block.implication);
    let recommended_action = c.text(&format!("{}.recommendedAction", path), &block.recommended_action);
    let confidence_field = format!("{}.confidence", path);
    let confidence = c
        .required(&confidence_field, &block.confidence)
        .and_then(|raw| c.whole_number(&confidence_field, raw))
        .and_then(|n| c.take(Percentage::try_from_value(&confidence_field, n)));

    Some(DecisionBlock {
        id: id?,
        question: question?,
        metric: metric?,
        key_insight: key_insight?,
        implication: implication?,
        recommended_action: recommended_action?,
        confidence: confidence?,
    })
}

fn validate_metric(c: &mut Collector, path: &str, metric: &MetricCandidate) -> Option<Metric> {
    let label = c.non_empty_text(&format!("{}.label", path), &metric.label);
    let value = c.non_empty_text(&format!("{}.value", path), &metric.value);
    let trend = c.optional_variant(&format!("{}.trend", path), &metric.trend);
    let status = c.optional_variant(&format!("{}.status", path), &metric.status);

    Some(Metric {
        label: label?,
        value: value?,
        trend: trend?,
        status: status?,
    })
}

fn validate_data_source(c: &mut Collector, source: &DataSourceCandidate) -> Option<DataSource> {
    let source_type = c
        .required("dataSource.type", &source.source_type)
        .and_then(|raw| c.variant("dataSource.type", raw));
    let date = c
        .required("dataSource.date", &source.date)
        .and_then(|raw| c.take(parse_research_date("dataSource.date", raw)));
    let participants = match &source.participants {
        None => Some(None),
        Some(raw) => c
            .whole_number("dataSource.participants", raw)
            .and_then(|n| {
                c.take(u32::try_from(n).ok().filter(|n| *n >= 1).ok_or_else(|| {
                    ValidationError::out_of_range("dataSource.participants", 1, i64::from(u32::MAX), n)
                }))
            })
            .map(Some),
    };

    Some(DataSource {
        source_type: source_type?,
        date: date?,
        participants: participants?,
        assumptions: source.assumptions.clone(),
    })
}

/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose date part is kept.
fn parse_research_date(field: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| ValidationError::invalid_format(field, format!("'{}' is not an ISO date", raw)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Path segment for a list item: its id when usable, else `#index`.
fn item_label(index: usize, id: &Option<String>) -> String {
    match id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("#{}", index),
    }
}

#[derive(Default)]
struct Collector {
    violations: Vec<ValidationError>,
}

impl Collector {
    fn take<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.violations.push(violation);
                None
            }
        }
    }

    fn required<'a, T>(&mut self, field: &str, value: &'a Option<T>) -> Option<&'a T> {
        if value.is_none() {
            self.violations.push(ValidationError::missing_field(field));
        }
        value.as_ref()
    }

    /// Present text; empty is allowed.
    fn text(&mut self, field: &str, value: &Option<String>) -> Option<String> {
        self.required(field, value).cloned()
    }

    /// Present text with at least one non-whitespace character.
    fn non_empty_text(&mut self, field: &str, value: &Option<String>) -> Option<String> {
        let text = self.required(field, value)?;
        if text.trim().is_empty() {
            self.violations.push(ValidationError::empty_field(field));
            return None;
        }
        Some(text.clone())
    }

    fn variant<E>(&mut self, field: &str, raw: &Value) -> Option<E>
    where
        E: FromStr<Err = UnknownVariant>,
    {
        let Some(text) = raw.as_str() else {
            self.violations.push(ValidationError::invalid_format(
                field,
                format!("expected a string, got {}", json_kind(raw)),
            ));
            return None;
        };
        let parsed = E::from_str(text).map_err(|e| ValidationError::unknown_variant(field, &e));
        self.take(parsed)
    }

    /// An integer, or a float with no fractional part (`38.0`).
    ///
    /// Magnitudes beyond `i64` saturate, so range checks still report them.
    fn whole_number(&mut self, field: &str, raw: &Value) -> Option<i64> {
        let Value::Number(number) = raw else {
            self.violations.push(ValidationError::invalid_format(
                field,
                format!("expected a number, got {}", json_kind(raw)),
            ));
            return None;
        };
        if let Some(n) = number.as_i64() {
            return Some(n);
        }
        match number.as_f64() {
            Some(f) if f.fract() == 0.0 => Some(f as i64),
            _ => {
                self.violations.push(ValidationError::invalid_format(
                    field,
                    format!("expected a whole number, got {}", number),
                ));
                None
            }
        }
    }

    /// `Some(None)` when absent, `None` when present but invalid.
    fn optional_variant<E>(&mut self, field: &str, raw: &Option<Value>) -> Option<Option<E>>
    where
        E: FromStr<Err = UnknownVariant>,
    {
        match raw {
            None => Some(None),
            Some(raw) => self.variant(field, raw).map(Some),
        }
    }

    /// Records a repeat of `id` within one list.
    fn unique(&mut self, field: &str, id: String, seen: &mut HashSet<String>) -> Option<String> {
        if !seen.insert(id.clone()) {
            self.violations.push(ValidationError::duplicate_id(field, id));
            return None;
        }
        Some(id)
    }
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;
