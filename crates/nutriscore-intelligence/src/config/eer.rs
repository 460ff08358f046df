// ABOUTME: Estimated Energy Requirement regression coefficients per gender and age group
// ABOUTME: Defaults follow the Korean Dietary Reference Intakes EER equations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! EER Configuration
//!
//! `EER = alpha + beta * age + PA * (gamma * weight_kg + delta * height_m)`
//!
//! One coefficient set per gender, split at the adult age threshold. `PA` is
//! the physical activity coefficient indexed by activity code 0-3.

use nutriscore_core::models::{ActivityLevel, Gender};
use serde::{Deserialize, Serialize};

/// Regression coefficients for one gender/age group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EerCoefficients {
    /// Intercept (kcal)
    pub alpha: f64,
    /// Age coefficient (kcal per year)
    pub beta: f64,
    /// Weight coefficient (kcal per kg)
    pub gamma: f64,
    /// Height coefficient (kcal per m)
    pub delta: f64,
    /// Physical activity coefficient by activity code
    pub pa: [f64; 4],
}

impl EerCoefficients {
    /// PA coefficient for an activity level
    #[must_use]
    pub const fn pa_for(&self, activity: ActivityLevel) -> f64 {
        self.pa[activity.code() as usize]
    }
}

/// EER coefficient table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EerConfig {
    /// First age (years) that uses the adult coefficients
    pub adult_age_threshold: u32,
    /// Male, below the adult threshold
    pub male_child: EerCoefficients,
    /// Male, at or above the adult threshold
    pub male_adult: EerCoefficients,
    /// Female, below the adult threshold
    pub female_child: EerCoefficients,
    /// Female, at or above the adult threshold
    pub female_adult: EerCoefficients,
}

impl EerConfig {
    /// Coefficient set for a gender and age
    #[must_use]
    pub const fn coefficients(&self, gender: Gender, age: u32) -> &EerCoefficients {
        let adult = age >= self.adult_age_threshold;
        match (gender, adult) {
            (Gender::Male, false) => &self.male_child,
            (Gender::Male, true) => &self.male_adult,
            (Gender::Female, false) => &self.female_child,
            (Gender::Female, true) => &self.female_adult,
        }
    }

    /// All four coefficient sets with a label, for validation and diagnostics
    #[must_use]
    pub const fn groups(&self) -> [(&'static str, &EerCoefficients); 4] {
        [
            ("male_child", &self.male_child),
            ("male_adult", &self.male_adult),
            ("female_child", &self.female_child),
            ("female_adult", &self.female_adult),
        ]
    }
}

impl Default for EerConfig {
    fn default() -> Self {
        Self {
            adult_age_threshold: 19,
            male_child: EerCoefficients {
                alpha: 88.5,
                beta: -61.9,
                gamma: 26.7,
                delta: 903.0,
                pa: [1.00, 1.13, 1.26, 1.42],
            },
            male_adult: EerCoefficients {
                alpha: 662.0,
                beta: -9.53,
                gamma: 15.91,
                delta: 539.6,
                pa: [1.00, 1.11, 1.25, 1.48],
            },
            female_child: EerCoefficients {
                alpha: 135.3,
                beta: 30.8,
                gamma: 10.0,
                delta: 934.0,
                pa: [1.00, 1.16, 1.31, 1.56],
            },
            female_adult: EerCoefficients {
                alpha: 354.0,
                beta: -6.91,
                gamma: 9.36,
                delta: 726.0,
                pa: [1.00, 1.12, 1.27, 1.45],
            },
        }
    }
}
