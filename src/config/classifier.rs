//! Classifier configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::readiness::{StalenessPolicy, DEFAULT_MAX_DATA_AGE_DAYS};

/// Classifier configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Research older than this many days is flagged stale
    #[serde(default = "default_max_data_age_days")]
    pub max_data_age_days: u32,
}

impl ClassifierConfig {
    /// Staleness policy for the configured window.
    pub fn policy(&self) -> Result<StalenessPolicy, ValidationError> {
        StalenessPolicy::new(self.max_data_age_days).map_err(|_| ValidationError::InvalidMaxDataAge)
    }

    /// Validate classifier configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.policy().map(|_| ())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_data_age_days: default_max_data_age_days(),
        }
    }
}

fn default_max_data_age_days() -> u32 {
    DEFAULT_MAX_DATA_AGE_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = ClassifierConfig::default().policy().unwrap();
        assert_eq!(policy.max_data_age_days(), 183);
    }

    #[test]
    fn test_zero_age_rejected() {
        let config = ClassifierConfig { max_data_age_days: 0 };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxDataAge));
    }
}
