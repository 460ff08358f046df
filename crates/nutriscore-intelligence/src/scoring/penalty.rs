// ABOUTME: Upper-limit penalty rule for phosphorus, sodium, iron, zinc and cholesterol
// ABOUTME: Flat deduction per nutrient whose intake exceeds its UL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::PenaltyConfig;
use crate::standards::NutrientStandard;
use nutriscore_core::models::{Nutrient, NutrientIntake};
use serde::{Deserialize, Serialize};

/// Penalty for one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyItem {
    /// Checked nutrient
    pub nutrient: Nutrient,
    /// Upper limit, when the standard defines one
    pub ul: Option<f64>,
    /// Actual intake
    pub actual: f64,
    /// Whether the intake is above the UL
    pub exceeded: bool,
    /// Points deducted
    pub penalty: f64,
}

/// Penalty sub-score (subtracted from the composite)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyScore {
    /// Points deducted across all checked nutrients
    pub total: f64,
    /// Per-nutrient items in configured order
    pub items: Vec<PenaltyItem>,
}

/// Deduct points for every nutrient above its upper limit
///
/// A nutrient without a UL in the selected standard is never penalized.
#[must_use]
pub fn calculate_penalty(
    standard: &NutrientStandard,
    intake: &NutrientIntake,
    config: &PenaltyConfig,
) -> PenaltyScore {
    let items: Vec<PenaltyItem> = config
        .nutrients
        .iter()
        .map(|&nutrient| {
            let ul = standard.ul(nutrient);
            let actual = intake.get(nutrient);
            let exceeded = ul.is_some_and(|ul| actual > ul);
            PenaltyItem {
                nutrient,
                ul,
                actual,
                exceeded,
                penalty: if exceeded {
                    config.points_per_nutrient
                } else {
                    0.0
                },
            }
        })
        .collect();

    PenaltyScore {
        total: items.iter().map(|item| item.penalty).sum(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscore_core::models::NutrientValues;

    #[test]
    fn test_missing_ul_never_penalized() {
        let standard = NutrientStandard::new(
            "1-2",
            NutrientValues::new(),
            NutrientValues::new().with(Nutrient::Zinc, 6.0),
        );
        let intake = NutrientIntake {
            zinc: 7.0,
            cholesterol: 10_000.0,
            ..NutrientIntake::default()
        };
        let penalty = calculate_penalty(&standard, &intake, &PenaltyConfig::default());
        assert!((penalty.total - 4.0).abs() < f64::EPSILON);
        let cholesterol = penalty
            .items
            .iter()
            .find(|item| item.nutrient == Nutrient::Cholesterol)
            .unwrap();
        assert!(!cholesterol.exceeded);
        assert_eq!(cholesterol.ul, None);
    }

    #[test]
    fn test_intake_equal_to_ul_not_penalized() {
        let standard = NutrientStandard::new(
            "30-49",
            NutrientValues::new(),
            NutrientValues::new().with(Nutrient::Iron, 45.0),
        );
        let intake = NutrientIntake {
            iron: 45.0,
            ..NutrientIntake::default()
        };
        assert!(calculate_penalty(&standard, &intake, &PenaltyConfig::default())
            .total
            .abs()
            < f64::EPSILON);
    }
}
