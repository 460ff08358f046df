// ABOUTME: Estimated Energy Requirement (EER) from gender, age, height, weight and activity
// ABOUTME: Piecewise linear regression with child/adult coefficient sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Requirement Estimator
//!
//! Formula: `EER = alpha + beta * age + PA * (gamma * weight_kg + delta * height_cm / 100)`
//!
//! Coefficients are selected by gender and by whether the person has reached
//! the adult age threshold (19 years by default).

use crate::config::EerConfig;
use nutriscore_core::models::UserProfile;
use tracing::debug;

/// Estimate daily energy requirement in kcal/day
///
/// The profile is already validated, so activity code and age are in range.
///
/// # Arguments
/// * `profile` - Validated user profile
/// * `config` - EER coefficient table
#[must_use]
pub fn estimate_eer(profile: &UserProfile, config: &EerConfig) -> f64 {
    let coefficients = config.coefficients(profile.gender, profile.age);
    let pa = coefficients.pa_for(profile.activity);

    let body = coefficients
        .gamma
        .mul_add(profile.weight_kg, coefficients.delta * profile.height_cm / 100.0);
    let eer = pa.mul_add(
        body,
        coefficients.beta.mul_add(f64::from(profile.age), coefficients.alpha),
    );

    debug!(
        gender = %profile.gender,
        age = profile.age,
        height_cm = profile.height_cm,
        weight_kg = profile.weight_kg,
        activity = profile.activity.code(),
        pa,
        eer,
        "Estimated energy requirement"
    );

    eer
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscore_core::models::{ActivityLevel, Gender};

    #[test]
    fn test_adult_male_reference_value() {
        let profile =
            UserProfile::new(Gender::Male, 30, 180.0, 70.0, ActivityLevel::Active).unwrap();
        let eer = estimate_eer(&profile, &EerConfig::default());
        assert!((eer - 2982.325).abs() < 1e-6, "got {eer}");
    }

    #[test]
    fn test_sedentary_uses_unit_pa() {
        let profile =
            UserProfile::new(Gender::Female, 40, 160.0, 55.0, ActivityLevel::Sedentary).unwrap();
        // 354 - 6.91 * 40 + 1.0 * (9.36 * 55 + 726 * 1.6)
        assert!((estimate_eer(&profile, &EerConfig::default()) - 1754.0).abs() < 1e-6);
    }
}
