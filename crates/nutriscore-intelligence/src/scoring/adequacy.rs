// ABOUTME: Micronutrient adequacy rule comparing intake against each nutrient's RNI
// ABOUTME: Quadratic falloff points * (1 - shortfall^2), shortfall = max(0, (RNI - actual) / RNI)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::AdequacyConfig;
use crate::standards::NutrientStandard;
use nutriscore_core::errors::{AppError, AppResult};
use nutriscore_core::models::{Nutrient, NutrientIntake};
use serde::{Deserialize, Serialize};

/// Adequacy score for one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdequacyItem {
    /// Scored nutrient
    pub nutrient: Nutrient,
    /// Recommended intake
    pub rni: f64,
    /// Actual intake
    pub actual: f64,
    /// Fraction of the RNI not met (0 when met)
    pub shortfall: f64,
    /// Points awarded
    pub score: f64,
}

/// Nutrition adequacy sub-score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdequacyScore {
    /// Points awarded across all scored nutrients
    pub total: f64,
    /// Per-nutrient items in configured order
    pub items: Vec<AdequacyItem>,
}

/// Score micronutrient intake against the reference RNIs
///
/// # Errors
///
/// Returns `ConfigInvalid` if a scored nutrient has no positive RNI in the
/// selected standard
pub fn calculate_adequacy_score(
    standard: &NutrientStandard,
    intake: &NutrientIntake,
    config: &AdequacyConfig,
) -> AppResult<AdequacyScore> {
    let items = config
        .nutrients
        .iter()
        .map(|&nutrient| {
            let rni = standard
                .rni(nutrient)
                .filter(|rni| *rni > 0.0)
                .ok_or_else(|| {
                    AppError::config_invalid(format!(
                        "reference standard {} has no positive {nutrient}_RNI",
                        standard.age_group
                    ))
                })?;
            let actual = intake.get(nutrient);
            let shortfall = ((rni - actual) / rni).max(0.0);
            Ok(AdequacyItem {
                nutrient,
                rni,
                actual,
                shortfall,
                score: config.points_per_nutrient * shortfall.mul_add(-shortfall, 1.0),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(AdequacyScore {
        total: items.iter().map(|item| item.score).sum(),
        items,
    })
}
