// ABOUTME: Composite daily diet score with itemized sub-scores and penalties
// ABOUTME: Orchestrates EER, reference standard lookup and the four scoring rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Score Calculator
//!
//! `daily_score = base + energy + ratio + nutrition - penalty`
//!
//! | Rule | Default points |
//! |---|---|
//! | base | 20 |
//! | energy adequacy | 0-10 |
//! | macro energy ratio | 0-40 (10 per macro) |
//! | micronutrient adequacy | 0-35 (5 per nutrient) |
//! | upper-limit penalty | 0-20 (4 per nutrient) |
//!
//! The composite is not clamped. With non-negative intake it stays within
//! `[0, 105]` under the default weights.

/// Micronutrient adequacy rule
pub mod adequacy;
/// Energy adequacy rule
pub mod energy;
/// Upper-limit penalty rule
pub mod penalty;
/// Macronutrient energy-ratio rule
pub mod ratio;

pub use adequacy::{calculate_adequacy_score, AdequacyItem, AdequacyScore};
pub use energy::{calculate_energy_score, EnergyScore};
pub use penalty::{calculate_penalty, PenaltyItem, PenaltyScore};
pub use ratio::{
    calculate_ratio_score, energy_ratios, score_macro_ratio, EnergyRatios, MacroRatioScore,
    RatioScore, TransfatRatioScore,
};

use crate::config::IntelligenceConfig;
use crate::eer::estimate_eer;
use crate::standards::StandardStore;
use nutriscore_core::errors::{AppError, AppResult};
use nutriscore_core::models::{NutrientIntake, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Itemized sub-scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetail {
    /// Starting points
    pub base: f64,
    /// Energy adequacy
    pub energy_score: EnergyScore,
    /// Macro energy-ratio balance
    pub ratio_score: RatioScore,
    /// Micronutrient adequacy
    pub nutrition_score: AdequacyScore,
    /// Upper-limit penalty (subtracted)
    pub penalty: PenaltyScore,
}

/// Composite daily score with its full breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// `base + energy + ratio + nutrition - penalty`
    pub daily_score: f64,
    /// Sub-scores and per-nutrient items
    pub detail: ScoreDetail,
}

/// Score one day of intake for a user
///
/// Pure: identical inputs yield bit-identical output.
///
/// # Arguments
/// * `profile` - Validated user profile
/// * `intake` - Validated daily nutrient totals
/// * `store` - Reference standard tables
/// * `config` - Coefficients and weights
///
/// # Errors
///
/// Returns `InvalidInput` if the EER or the total macro energy is not positive,
/// or if the composite overflows to a non-finite value,
/// `LookupMiss` if no standard exists for the profile, and `ConfigInvalid` if
/// a scored nutrient has no RNI in the selected standard
pub fn calculate_daily_score(
    profile: &UserProfile,
    intake: &NutrientIntake,
    store: &StandardStore,
    config: &IntelligenceConfig,
) -> AppResult<ScoreBreakdown> {
    let scoring = &config.scoring;

    let eer = estimate_eer(profile, &config.eer);
    let standard = store.get_standard(profile.gender, profile.age)?;

    let energy_score = calculate_energy_score(eer, intake.kcal, scoring.energy_cap)?;
    let ratio_score = calculate_ratio_score(intake, &scoring.ratio)?;
    let nutrition_score = calculate_adequacy_score(standard, intake, &scoring.adequacy)?;
    let penalty = calculate_penalty(standard, intake, &scoring.penalty);

    let subtotal = scoring.base_score + energy_score.total + ratio_score.total;
    let daily_score = subtotal + nutrition_score.total - penalty.total;
    if !daily_score.is_finite() {
        return Err(AppError::invalid_input(format!(
            "daily score is not a finite number ({daily_score})"
        ))
        .with_details(serde_json::json!({
            "energy": energy_score.total,
            "ratio": ratio_score.total,
            "nutrition": nutrition_score.total,
            "penalty": penalty.total,
        })));
    }

    debug!(
        daily_score,
        energy = energy_score.total,
        ratio = ratio_score.total,
        nutrition = nutrition_score.total,
        penalty = penalty.total,
        age_group = %standard.age_group,
        "Calculated daily score"
    );

    Ok(ScoreBreakdown {
        daily_score,
        detail: ScoreDetail {
            base: scoring.base_score,
            energy_score,
            ratio_score,
            nutrition_score,
            penalty,
        },
    })
}
