//! Presentation facts: language-neutral tokens handed to rendering code.
//!
//! How a token becomes a CSS class or an icon glyph is decided by the
//! rendering collaborator, not here.

use serde::Serialize;

/// Icon shown next to a readiness verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    CheckCircle,
    AlertCircle,
    XCircle,
    Clock,
}

/// Semantic color of a badge, verdict or metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Green,
    Amber,
    Red,
    Blue,
    Slate,
}

/// Direction glyph for a metric trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphKind {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessPresentation {
    pub icon_kind: IconKind,
    pub color_token: ColorToken,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskPresentation {
    pub color_token: ColorToken,
    pub label: &'static str,
    /// Sort key; 1 is the most severe.
    pub rank: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPresentation {
    pub color_token: ColorToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_kinds_serialize_kebab_case() {
        assert_eq!(serde_json::to_string(&IconKind::XCircle).unwrap(), "\"x-circle\"");
        assert_eq!(serde_json::to_string(&IconKind::CheckCircle).unwrap(), "\"check-circle\"");
    }

    #[test]
    fn readiness_presentation_serializes_camel_case() {
        let presentation = ReadinessPresentation {
            icon_kind: IconKind::Clock,
            color_token: ColorToken::Slate,
            label: "Verouderd".to_string(),
        };
        let json = serde_json::to_value(&presentation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"iconKind": "clock", "colorToken": "slate", "label": "Verouderd"})
        );
    }
}
