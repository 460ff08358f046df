// ABOUTME: Daily score weights, macro energy-ratio targets, and scored nutrient lists
// ABOUTME: Base score 20, energy 10, ratio 40, adequacy 35, penalty up to 20
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriscore_core::models::Nutrient;
use serde::{Deserialize, Serialize};

/// Inclusive target range for a macronutrient's share of energy (percent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioRange {
    /// Lower bound (percent)
    pub min: f64,
    /// Upper bound (percent)
    pub max: f64,
}

impl RatioRange {
    /// Build a range from bounds in percent
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether a ratio falls within the range (bounds inclusive)
    #[must_use]
    pub fn contains(&self, ratio: f64) -> bool {
        ratio >= self.min && ratio <= self.max
    }

    /// Distance from a ratio to the nearer bound
    #[must_use]
    pub fn distance(&self, ratio: f64) -> f64 {
        (ratio - self.min).abs().min((ratio - self.max).abs())
    }
}

/// Macronutrient energy-ratio rule settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioConfig {
    /// Points per macro (carbohydrate, protein, fat, transfat)
    pub points_per_macro: f64,
    /// Carbohydrate target (55-65%)
    pub carbohydrate: RatioRange,
    /// Protein target (7-20%)
    pub protein: RatioRange,
    /// Fat target (15-30%)
    pub fat: RatioRange,
    /// Transfat share above which the transfat item scores 0 (1%)
    pub transfat_limit_percent: f64,
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self {
            points_per_macro: 10.0,
            carbohydrate: RatioRange::new(55.0, 65.0),
            protein: RatioRange::new(7.0, 20.0),
            fat: RatioRange::new(15.0, 30.0),
            transfat_limit_percent: 1.0,
        }
    }
}

/// Micronutrient adequacy rule settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdequacyConfig {
    /// Points per nutrient
    pub points_per_nutrient: f64,
    /// Nutrients scored against their RNI
    pub nutrients: Vec<Nutrient>,
}

impl Default for AdequacyConfig {
    fn default() -> Self {
        Self {
            points_per_nutrient: 5.0,
            nutrients: vec![
                Nutrient::Carbohydrate,
                Nutrient::Protein,
                Nutrient::Calcium,
                Nutrient::Phosphorus,
                Nutrient::Magnesium,
                Nutrient::Iron,
                Nutrient::Zinc,
            ],
        }
    }
}

/// Upper-limit penalty rule settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyConfig {
    /// Points deducted per nutrient above its UL
    pub points_per_nutrient: f64,
    /// Nutrients checked against their UL
    pub nutrients: Vec<Nutrient>,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self {
            points_per_nutrient: 4.0,
            nutrients: vec![
                Nutrient::Phosphorus,
                Nutrient::Natrium,
                Nutrient::Iron,
                Nutrient::Zinc,
                Nutrient::Cholesterol,
            ],
        }
    }
}

/// Composite daily score configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points every diet starts with
    pub base_score: f64,
    /// Maximum energy adequacy points
    pub energy_cap: f64,
    /// Macro energy-ratio rule
    pub ratio: RatioConfig,
    /// Micronutrient adequacy rule
    pub adequacy: AdequacyConfig,
    /// Upper-limit penalty rule
    pub penalty: PenaltyConfig,
}

impl ScoringConfig {
    /// Highest composite score reachable with this configuration
    #[must_use]
    pub fn max_score(&self) -> f64 {
        self.adequacy.points_per_nutrient.mul_add(
            self.adequacy.nutrients.len() as f64,
            self.ratio
                .points_per_macro
                .mul_add(4.0, self.base_score + self.energy_cap),
        )
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 20.0,
            energy_cap: 10.0,
            ratio: RatioConfig::default(),
            adequacy: AdequacyConfig::default(),
            penalty: PenaltyConfig::default(),
        }
    }
}

/// Detection-record aggregation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Detections with lower confidence are ignored (0.3, the detector threshold)
    pub min_confidence: f64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_score_is_105() {
        assert!((ScoringConfig::default().max_score() - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let range = RatioRange::new(55.0, 65.0);
        assert!(range.contains(55.0));
        assert!(range.contains(65.0));
        assert!(!range.contains(54.999));
        assert!((range.distance(50.0) - 5.0).abs() < 1e-12);
        assert!((range.distance(70.0) - 5.0).abs() < 1e-12);
    }
}
