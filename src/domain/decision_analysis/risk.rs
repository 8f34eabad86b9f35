//! Risks attached to a decision analysis.

use serde::Serialize;

use crate::domain::foundation::RiskId;

wire_enum! {
    /// How strongly a risk undermines confidence in the analysis.
    Severity, kind = "severity" {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

/// A named concern that may undermine confidence in the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRisk {
    pub id: RiskId,
    pub severity: Severity,
    /// Free-text grouping label, e.g. "Data kwaliteit".
    pub category: String,
    pub description: String,
    /// Recommended remediation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<String>,
}

impl DecisionRisk {
    pub fn has_severity(&self, severity: Severity) -> bool {
        self.severity == severity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn risk(severity: Severity, mitigation: Option<&str>) -> DecisionRisk {
        DecisionRisk {
            id: RiskId::new("id", "r1").unwrap(),
            severity,
            category: "Beperkte data".to_string(),
            description: "Analyse gebaseerd op 1 data source".to_string(),
            mitigation: mitigation.map(str::to_string),
        }
    }

    #[test]
    fn severity_parses_wire_values() {
        assert_eq!(Severity::from_str("high").unwrap(), Severity::High);
        assert_eq!(Severity::from_str("medium").unwrap(), Severity::Medium);
        assert_eq!(Severity::from_str("low").unwrap(), Severity::Low);
        assert!(Severity::from_str("critical").is_err());
    }

    #[test]
    fn has_severity_matches_exactly() {
        let r = risk(Severity::Medium, None);
        assert!(r.has_severity(Severity::Medium));
        assert!(!r.has_severity(Severity::High));
    }

    #[test]
    fn absent_mitigation_is_omitted_from_json() {
        let json = serde_json::to_value(risk(Severity::Low, None)).unwrap();
        assert!(json.get("mitigation").is_none());
        assert_eq!(json["severity"], "low");
    }

    #[test]
    fn present_mitigation_is_serialized() {
        let json = serde_json::to_value(risk(Severity::Low, Some("Test met questionnaire"))).unwrap();
        assert_eq!(json["mitigation"], "Test met questionnaire");
    }
}
