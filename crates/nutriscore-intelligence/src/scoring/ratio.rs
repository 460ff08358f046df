// ABOUTME: Macronutrient energy-ratio rule for carbohydrate, protein, fat and transfat
// ABOUTME: Scores each macro's share of energy against its target range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy-ratio balance
//!
//! Total macro energy uses 4 kcal/g for carbohydrate and protein and 9 kcal/g
//! for fat and transfat. A macro inside its target range earns full points;
//! outside it loses `distance_to_nearest_bound / 100 * points`. Transfat
//! earns full points at or below its limit and nothing above it.

use crate::config::{RatioConfig, RatioRange};
use nutriscore_core::constants::energy_density::{
    CARBOHYDRATE_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G, TRANSFAT_KCAL_PER_G,
};
use nutriscore_core::errors::{AppError, AppResult};
use nutriscore_core::models::NutrientIntake;
use serde::{Deserialize, Serialize};

/// Score for one macro with a target range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatioScore {
    /// Share of total macro energy (percent)
    pub ratio_percent: f64,
    /// Target lower bound (percent)
    pub target_min: f64,
    /// Target upper bound (percent)
    pub target_max: f64,
    /// Points awarded
    pub score: f64,
}

/// Score for the transfat share
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransfatRatioScore {
    /// Share of total macro energy (percent)
    pub ratio_percent: f64,
    /// Share above which no points are awarded (percent)
    pub limit_percent: f64,
    /// Points awarded
    pub score: f64,
}

/// Energy-ratio sub-score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioScore {
    /// Points awarded across all four macros
    pub total: f64,
    /// Energy from carbohydrate, protein, fat and transfat (kcal)
    pub total_energy_kcal: f64,
    /// Carbohydrate item
    pub carbohydrate: MacroRatioScore,
    /// Protein item
    pub protein: MacroRatioScore,
    /// Fat item
    pub fat: MacroRatioScore,
    /// Transfat item
    pub transfat: TransfatRatioScore,
}

/// Energy shares of each macro (percent of total macro energy)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyRatios {
    /// Total macro energy (kcal)
    pub total_kcal: f64,
    /// Carbohydrate share
    pub carbohydrate: f64,
    /// Protein share
    pub protein: f64,
    /// Fat share
    pub fat: f64,
    /// Transfat share
    pub transfat: f64,
}

/// Compute each macro's share of energy
///
/// # Errors
///
/// Returns `InvalidInput` if the total macro energy is not positive and finite
pub fn energy_ratios(intake: &NutrientIntake) -> AppResult<EnergyRatios> {
    let carbohydrate = intake.carbohydrate * CARBOHYDRATE_KCAL_PER_G;
    let protein = intake.protein * PROTEIN_KCAL_PER_G;
    let fat = intake.fat * FAT_KCAL_PER_G;
    let transfat = intake.transfat * TRANSFAT_KCAL_PER_G;
    let total = carbohydrate + protein + fat + transfat;

    if !total.is_finite() || total <= 0.0 {
        return Err(AppError::invalid_input(
            "total macronutrient energy must be a positive finite number of kcal",
        )
        .with_details(serde_json::json!({ "total_energy_kcal": total })));
    }

    let percent = |kcal: f64| kcal / total * 100.0;
    Ok(EnergyRatios {
        total_kcal: total,
        carbohydrate: percent(carbohydrate),
        protein: percent(protein),
        fat: percent(fat),
        transfat: percent(transfat),
    })
}

/// Score one macro ratio against its target range
#[must_use]
pub fn score_macro_ratio(ratio: f64, range: RatioRange, points: f64) -> MacroRatioScore {
    let score = if range.contains(ratio) {
        points
    } else {
        points * (1.0 - range.distance(ratio) / 100.0)
    };
    MacroRatioScore {
        ratio_percent: ratio,
        target_min: range.min,
        target_max: range.max,
        score,
    }
}

/// Score the macronutrient energy balance of a day's intake
///
/// # Errors
///
/// Returns `InvalidInput` if the total macro energy is not positive and finite
pub fn calculate_ratio_score(
    intake: &NutrientIntake,
    config: &RatioConfig,
) -> AppResult<RatioScore> {
    let ratios = energy_ratios(intake)?;
    let points = config.points_per_macro;

    let carbohydrate = score_macro_ratio(ratios.carbohydrate, config.carbohydrate, points);
    let protein = score_macro_ratio(ratios.protein, config.protein, points);
    let fat = score_macro_ratio(ratios.fat, config.fat, points);
    let transfat = TransfatRatioScore {
        ratio_percent: ratios.transfat,
        limit_percent: config.transfat_limit_percent,
        score: if ratios.transfat > config.transfat_limit_percent {
            0.0
        } else {
            points
        },
    };

    Ok(RatioScore {
        total: carbohydrate.score + protein.score + fat.score + transfat.score,
        total_energy_kcal: ratios.total_kcal,
        carbohydrate,
        protein,
        fat,
        transfat,
    })
}
