//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parses an RFC 3339 timestamp, normalizing any offset to UTC.
    pub fn parse_rfc3339(field: &str, raw: &str) -> Result<Self, ValidationError> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| {
                ValidationError::invalid_format(field, format!("'{}' is not an RFC 3339 timestamp: {}", raw, e))
            })
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the calendar date (UTC) of this timestamp.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn parse_rfc3339_accepts_zulu() {
        let ts = Timestamp::parse_rfc3339("generatedAt", "2026-01-13T14:32:00Z").unwrap();
        assert_eq!(ts.as_datetime().year(), 2026);
        assert_eq!(ts.as_datetime().hour(), 14);
    }

    #[test]
    fn parse_rfc3339_normalizes_offset_to_utc() {
        let ts = Timestamp::parse_rfc3339("generatedAt", "2026-01-13T15:32:00+01:00").unwrap();
        assert_eq!(ts.as_datetime().hour(), 14);
    }

    #[test]
    fn parse_rfc3339_rejects_plain_date() {
        match Timestamp::parse_rfc3339("generatedAt", "2026-01-13") {
            Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "generatedAt"),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn date_returns_utc_calendar_day() {
        let ts = Timestamp::parse_rfc3339("t", "2026-01-13T23:30:00-02:00").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
    }

    #[test]
    fn timestamp_serializes_round_trip() {
        let ts = Timestamp::parse_rfc3339("t", "2026-01-13T14:32:00Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2026-01-13T14:32:00Z\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
