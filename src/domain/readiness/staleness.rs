//! Staleness advisory for the research behind an analysis.
//!
//! Staleness is reported beside the verdict. It never rewrites `readiness`;
//! `outdated` stays a decision of the producer.

use chrono::NaiveDate;

use crate::domain::decision_analysis::DataSource;
use crate::domain::foundation::ValidationError;

/// Roughly six months.
pub const DEFAULT_MAX_DATA_AGE_DAYS: u32 = 183;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalenessPolicy {
    max_data_age_days: u32,
}

impl StalenessPolicy {
    /// Creates a policy; a zero-day window is rejected.
    pub fn new(max_data_age_days: u32) -> Result<Self, ValidationError> {
        if max_data_age_days == 0 {
            return Err(ValidationError::out_of_range(
                "max_data_age_days",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        Ok(Self { max_data_age_days })
    }

    pub fn max_data_age_days(&self) -> u32 {
        self.max_data_age_days
    }

    /// Days between the research date and `as_of`. Negative for future dates.
    pub fn data_age_days(&self, source: &DataSource, as_of: NaiveDate) -> i64 {
        as_of.signed_duration_since(source.date).num_days()
    }

    /// True once the research is older than the allowed window.
    pub fn is_stale(&self, source: &DataSource, as_of: NaiveDate) -> bool {
        self.data_age_days(source, as_of) > i64::from(self.max_data_age_days)
    }
}

impl Default for StalenessPolicy {
    fn default() -> Self {
        Self {
            max_data_age_days: DEFAULT_MAX_DATA_AGE_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision_analysis::DataSourceType;

    fn source_dated(y: i32, m: u32, d: u32) -> DataSource {
        DataSource {
            source_type: DataSourceType::Workshop,
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            participants: Some(6),
            assumptions: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_window_is_183_days() {
        assert_eq!(StalenessPolicy::default().max_data_age_days(), 183);
    }

    #[test]
    fn zero_day_window_is_rejected() {
        assert!(StalenessPolicy::new(0).is_err());
        assert!(StalenessPolicy::new(1).is_ok());
    }

    #[test]
    fn age_counts_calendar_days() {
        let policy = StalenessPolicy::default();
        let source = source_dated(2026, 1, 13);
        assert_eq!(policy.data_age_days(&source, day(2026, 1, 13)), 0);
        assert_eq!(policy.data_age_days(&source, day(2026, 2, 13)), 31);
        assert_eq!(policy.data_age_days(&source, day(2026, 1, 10)), -3);
    }

    #[test]
    fn stale_only_past_the_window() {
        let policy = StalenessPolicy::new(30).unwrap();
        let source = source_dated(2026, 1, 1);
        assert!(!policy.is_stale(&source, day(2026, 1, 31)));
        assert!(policy.is_stale(&source, day(2026, 2, 1)));
    }

    #[test]
    fn future_research_date_is_not_stale() {
        let policy = StalenessPolicy::new(1).unwrap();
        assert!(!policy.is_stale(&source_dated(2027, 1, 1), day(2026, 1, 1)));
    }
}
