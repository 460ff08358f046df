// ABOUTME: Energy adequacy rule comparing daily kcal intake against the EER
// ABOUTME: Full points at kcal == EER, falling linearly to zero at 100% deviation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriscore_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Energy adequacy sub-score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyScore {
    /// Points awarded
    pub total: f64,
    /// Estimated energy requirement (kcal/day)
    #[serde(rename = "EER")]
    pub eer: f64,
    /// Energy intake (kcal)
    pub kcal: f64,
}

/// Score energy intake against the EER
///
/// Formula: `cap * max(0, 1 - |EER - kcal| / EER)`
///
/// # Errors
///
/// Returns `InvalidInput` if the EER is not positive
pub fn calculate_energy_score(eer: f64, kcal: f64, cap: f64) -> AppResult<EnergyScore> {
    if eer.is_nan() || eer <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "estimated energy requirement must be positive, got {eer}"
        ))
        .with_details(serde_json::json!({ "EER": eer })));
    }

    let deviation = (eer - kcal).abs() / eer;
    Ok(EnergyScore {
        total: cap * (1.0 - deviation).max(0.0),
        eer,
        kcal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_scores_cap() {
        let score = calculate_energy_score(2000.0, 2000.0, 10.0).unwrap();
        assert!((score.total - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_double_intake_scores_zero() {
        let score = calculate_energy_score(2000.0, 4500.0, 10.0).unwrap();
        assert!(score.total.abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_eer_rejected() {
        assert!(calculate_energy_score(0.0, 2000.0, 10.0).is_err());
        assert!(calculate_energy_score(-5.0, 2000.0, 10.0).is_err());
    }
}
