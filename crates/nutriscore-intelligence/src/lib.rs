// ABOUTME: Nutrition scoring engine for the NutriScore platform
// ABOUTME: Reference standard store, EER estimator, score calculator and intake aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriScore Intelligence
//!
//! Deterministic formulas that turn a user profile and a day of nutrient intake
//! into a composite diet score.
//!
//! ## Modules
//!
//! - **standards**: Age/gender reference tables (RNI and UL per nutrient)
//! - **eer**: Estimated Energy Requirement from profile and activity level
//! - **scoring**: Energy, macro ratio, adequacy and penalty rules plus the composite
//! - **intake**: Summing detection-record nutrient facts into daily totals
//! - **config**: Coefficients, weights and thresholds with validation

/// Scoring engine configuration (EER coefficients, weights, thresholds)
pub mod config;

/// Estimated Energy Requirement
pub mod eer;

/// Daily intake aggregation from food detection records
pub mod intake;

/// Daily score calculation
pub mod scoring;

/// Age/gender nutrient reference standards
pub mod standards;

pub use config::{ConfigError, EerConfig, IntakeConfig, IntelligenceConfig, ScoringConfig};
pub use eer::estimate_eer;
pub use intake::aggregate_daily_intake;
pub use scoring::{calculate_daily_score, ScoreBreakdown, ScoreDetail};
pub use standards::{bracket_index, NutrientStandard, StandardStore, AGE_BRACKETS};
