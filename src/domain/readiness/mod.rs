//! Readiness & Metric Classifier - pure mapping from model values to
//! presentation facts.
//!
//! Every view that shows an analysis goes through [`ReadinessClassifier`], so
//! there is one mapping table per fact instead of one per view.
//!
//! # Components
//!
//! - `presentation` - icon, color and glyph tokens plus the presentation tuples
//! - `classifier` - readiness, risk, metric and trend tables; severity counts
//! - `staleness` - advisory age check on the research date
//! - `errors` - [`ClassificationError`] for values outside a closed set

mod classifier;
mod errors;
mod presentation;
mod staleness;

pub use classifier::{
    ReadinessClassifier, BLOCKED_LABEL, OUTDATED_LABEL, READY_LABEL, UNCERTAIN_LABEL,
};
pub use errors::ClassificationError;
pub use presentation::{
    ColorToken, GlyphKind, IconKind, MetricPresentation, ReadinessPresentation, RiskPresentation,
};
pub use staleness::{StalenessPolicy, DEFAULT_MAX_DATA_AGE_DAYS};
