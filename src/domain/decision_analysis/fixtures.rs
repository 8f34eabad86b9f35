//! Embedded example analyses.
//!
//! These stand in for a real analysis producer: one analysis per readiness
//! state the product demos (`ready`, `blocked`, `uncertain`).

/// Keys of the embedded fixtures, in display order.
pub const FIXTURE_KEYS: &[&str] = &["ready", "blocked", "uncertain"];

const READY: &str = include_str!("../../../fixtures/analyses/ready.json");
const BLOCKED: &str = include_str!("../../../fixtures/analyses/blocked.json");
const UNCERTAIN: &str = include_str!("../../../fixtures/analyses/uncertain.json");

/// Returns the wire-form JSON of a fixture.
pub fn fixture_json(key: &str) -> Option<&'static str> {
    match key {
        "ready" => Some(READY),
        "blocked" => Some(BLOCKED),
        "uncertain" => Some(UNCERTAIN),
        _ => None,
    }
}
