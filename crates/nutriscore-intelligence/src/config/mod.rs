// ABOUTME: Configuration module for the nutriscore-intelligence crate
// ABOUTME: Aggregates EER, scoring and intake settings with validation and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Engine Configuration
//!
//! Every coefficient, weight and threshold the engine uses lives here. The
//! defaults reproduce the published scoring rules; environment variables can
//! override a small set of tunables at startup.

/// EER regression coefficients
pub mod eer;
/// Configuration error types
pub mod error;
/// Score weights, macro targets and intake thresholds
pub mod scoring;

pub use eer::{EerCoefficients, EerConfig};
pub use error::ConfigError;
pub use scoring::{
    AdequacyConfig, IntakeConfig, PenaltyConfig, RatioConfig, RatioRange, ScoringConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main scoring engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// EER coefficient table
    pub eer: EerConfig,
    /// Composite score rules
    pub scoring: ScoringConfig,
    /// Detection aggregation
    pub intake: IntakeConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    ///
    /// Falls back to defaults when the environment overrides are invalid.
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error for inverted ranges, non-positive caps or weights,
    /// empty nutrient lists, or a minimum confidence outside [0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_eer()?;
        self.validate_scoring()?;

        let confidence = self.intake.min_confidence;
        if !(0.0..=1.0).contains(&confidence) {
            return Err(ConfigError::ValueOutOfRange(
                "intake min_confidence must be between 0 and 1",
            ));
        }

        Ok(())
    }

    fn validate_eer(&self) -> Result<(), ConfigError> {
        for (_, coefficients) in self.eer.groups() {
            let values = [
                coefficients.alpha,
                coefficients.beta,
                coefficients.gamma,
                coefficients.delta,
            ];
            if values.iter().any(|v| !v.is_finite()) {
                return Err(ConfigError::ValueOutOfRange(
                    "EER coefficients must be finite",
                ));
            }
            if coefficients.gamma <= 0.0 || coefficients.delta <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "EER weight and height coefficients must be positive",
                ));
            }
            if coefficients.pa.iter().any(|pa| *pa <= 0.0 || !pa.is_finite()) {
                return Err(ConfigError::ValueOutOfRange(
                    "EER activity coefficients must be positive",
                ));
            }
            if coefficients.pa.windows(2).any(|w| w[0] > w[1]) {
                return Err(ConfigError::InvalidRange(
                    "EER activity coefficients must be ascending",
                ));
            }
        }
        Ok(())
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;

        if scoring.base_score < 0.0 {
            return Err(ConfigError::ValueOutOfRange("base_score must not be negative"));
        }
        if scoring.energy_cap <= 0.0
            || scoring.ratio.points_per_macro <= 0.0
            || scoring.adequacy.points_per_nutrient <= 0.0
            || scoring.penalty.points_per_nutrient <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "score caps and per-item points must be positive",
            ));
        }

        for (name, range) in [
            ("carbohydrate target range must have min < max", &scoring.ratio.carbohydrate),
            ("protein target range must have min < max", &scoring.ratio.protein),
            ("fat target range must have min < max", &scoring.ratio.fat),
        ] {
            if range.min < 0.0 || range.max > 100.0 || range.min >= range.max {
                return Err(ConfigError::InvalidRange(name));
            }
        }

        if !(0.0..=100.0).contains(&scoring.ratio.transfat_limit_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "transfat_limit_percent must be between 0 and 100",
            ));
        }

        if scoring.adequacy.nutrients.is_empty() || scoring.penalty.nutrients.is_empty() {
            return Err(ConfigError::ValueOutOfRange(
                "adequacy and penalty nutrient lists must not be empty",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("NUTRISCORE_BASE_SCORE", &mut self.scoring.base_score)?;
        Self::apply_env_var(
            "NUTRISCORE_TRANSFAT_LIMIT_PERCENT",
            &mut self.scoring.ratio.transfat_limit_percent,
        )?;
        Self::apply_env_var(
            "NUTRISCORE_MIN_CONFIDENCE",
            &mut self.intake.min_confidence,
        )?;
        Self::apply_env_var(
            "NUTRISCORE_EER_ADULT_AGE",
            &mut self.eer.adult_age_threshold,
        )?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut config = IntelligenceConfig::default();
        config.scoring.ratio.protein = RatioRange::new(20.0, 7.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_min_confidence_bounds() {
        let mut config = IntelligenceConfig::default();
        config.intake.min_confidence = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_non_positive_cap_rejected() {
        let mut config = IntelligenceConfig::default();
        config.scoring.energy_cap = 0.0;
        assert!(config.validate().is_err());
    }
}
