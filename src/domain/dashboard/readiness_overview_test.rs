#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::domain::dashboard::ReadinessOverview;
    use crate::domain::decision_analysis::fixtures::fixture_json;
    use crate::domain::decision_analysis::{validate, validate_json, AnalysisCandidate, Readiness};
    use crate::domain::foundation::Percentage;
    use crate::domain::readiness::{ColorToken, GlyphKind, IconKind, StalenessPolicy};

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
    }

    fn overview_for(key: &str) -> ReadinessOverview {
        let analysis = validate_json(fixture_json(key).unwrap()).unwrap();
        ReadinessOverview::build(&analysis, &StalenessPolicy::default(), as_of())
    }

    #[test]
    fn blocked_overview_counts_high_risks() {
        let overview = overview_for("blocked");

        assert_eq!(overview.readiness, Readiness::Blocked);
        assert_eq!(overview.presentation.icon_kind, IconKind::XCircle);
        assert_eq!(overview.presentation.label, "Geblokkeerd – Hoog risico");
        assert_eq!(overview.high_risk_count, 2);
        assert_eq!(overview.mean_confidence, Some(Percentage::new(42)));
    }

    #[test]
    fn risks_keep_model_order_with_presentation() {
        let overview = overview_for("blocked");

        let ids: Vec<&str> = overview.risks.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "r3"]);
        assert_eq!(overview.risks[2].presentation.label, "Gemiddeld");
    }

    #[test]
    fn block_summaries_carry_metric_facts() {
        let overview = overview_for("ready");

        let db3 = &overview.blocks[2];
        assert_eq!(db3.metric_value, "78%");
        assert_eq!(db3.metric_color, ColorToken::Amber);
        assert_eq!(db3.trend_glyph, GlyphKind::Down);
        assert!(db3.has_trend);

        let db2 = &overview.blocks[1];
        assert_eq!(db2.trend_glyph, GlyphKind::Flat);
        assert!(db2.has_trend);
    }

    #[test]
    fn provenance_summary_for_ai_analysis() {
        let overview = overview_for("uncertain");

        assert_eq!(overview.provenance.method_label, "AI Exploratie");
        assert_eq!(overview.provenance.assumption_count, 2);
        assert_eq!(overview.provenance.participants, None);
        assert_eq!(overview.provenance.data_age_days, 19);
        assert!(!overview.data_stale);
    }

    #[test]
    fn stale_research_is_flagged_without_touching_readiness() {
        let analysis = validate_json(fixture_json("ready").unwrap()).unwrap();
        let later = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();

        let overview = ReadinessOverview::build(&analysis, &StalenessPolicy::default(), later);

        assert!(overview.data_stale);
        assert_eq!(overview.readiness, Readiness::Ready);
        assert_eq!(overview.presentation.color_token, ColorToken::Green);
    }

    #[test]
    fn empty_analysis_is_degenerate_but_renderable() {
        let mut candidate: AnalysisCandidate =
            serde_json::from_str(fixture_json("uncertain").unwrap()).unwrap();
        candidate.decision_blocks = Some(Vec::new());
        candidate.risks = Some(Vec::new());
        let analysis = validate(&candidate).unwrap();

        let overview = ReadinessOverview::build(&analysis, &StalenessPolicy::default(), as_of());

        assert!(overview.is_degenerate());
        assert_eq!(overview.high_risk_count, 0);
        assert_eq!(overview.mean_confidence, None);
    }

    #[test]
    fn overview_serializes_camel_case_tokens() {
        let json = serde_json::to_value(overview_for("blocked")).unwrap();

        assert_eq!(json["analysisId"], "da-002");
        assert_eq!(json["highRiskCount"], 2);
        assert_eq!(json["presentation"]["iconKind"], "x-circle");
        assert_eq!(json["risks"][0]["presentation"]["colorToken"], "red");
        assert_eq!(json["blocks"][0]["trendGlyph"], "down");
        assert_eq!(json["provenance"]["sourceType"], "ai-analysis");
        assert_eq!(json["provenance"]["date"], "2026-01-13");
        assert_eq!(json["dataStale"], false);
    }
}
