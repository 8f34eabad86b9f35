//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage from an untrusted integer, naming `field` in the error.
    ///
    /// Out-of-range input is rejected rather than clamped.
    pub fn try_from_value(field: &str, value: i64) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range(field, 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Rounded arithmetic mean; `None` when there is nothing to average.
    pub fn mean<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Percentage>,
    {
        let (sum, count) = values
            .into_iter()
            .fold((0u64, 0u64), |(sum, count), p| (sum + u64::from(p.0), count + 1));
        if count == 0 {
            return None;
        }
        // Round half up in integer arithmetic.
        let mean = (sum * 2 + count) / (count * 2);
        Some(Self(mean as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn try_from_value_accepts_inclusive_bounds() {
        assert_eq!(Percentage::try_from_value("confidence", 0).unwrap(), Percentage::ZERO);
        assert_eq!(
            Percentage::try_from_value("confidence", 100).unwrap(),
            Percentage::HUNDRED
        );
    }

    #[test]
    fn try_from_value_rejects_over_100() {
        match Percentage::try_from_value("decisionBlocks[db1].confidence", 150) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "decisionBlocks[db1].confidence");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 150);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn try_from_value_rejects_negative() {
        assert!(Percentage::try_from_value("confidence", -1).is_err());
    }

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(Percentage::mean(Vec::new()), None);
    }

    #[test]
    fn mean_rounds_half_up() {
        let values = vec![Percentage::new(45), Percentage::new(38)];
        // 41.5 rounds to 42
        assert_eq!(Percentage::mean(values), Some(Percentage::new(42)));
    }

    #[test]
    fn mean_of_fixture_confidences() {
        let values = [87, 92, 78, 85].map(Percentage::new);
        // 85.5 rounds to 86
        assert_eq!(Percentage::mean(values), Some(Percentage::new(86)));
    }

    #[test]
    fn mean_of_a_long_series_does_not_overflow() {
        let values = std::iter::repeat(Percentage::HUNDRED).take(50_000_000);
        assert_eq!(Percentage::mean(values), Some(Percentage::HUNDRED));
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }

    #[test]
    fn percentage_serializes_to_json() {
        let json = serde_json::to_string(&Percentage::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    proptest! {
        #[test]
        fn try_from_value_agrees_with_range(value in -500i64..500) {
            let result = Percentage::try_from_value("confidence", value);
            prop_assert_eq!(result.is_ok(), (0..=100).contains(&value));
        }

        #[test]
        fn mean_stays_within_inputs(values in proptest::collection::vec(0u8..=100, 1..20)) {
            let min = *values.iter().min().unwrap();
            let max = *values.iter().max().unwrap();
            let mean = Percentage::mean(values.into_iter().map(Percentage::new)).unwrap();
            prop_assert!(mean.value() >= min && mean.value() <= max);
        }
    }
}
