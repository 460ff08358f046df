// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference profiles, intake fixtures and a test router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nutriscore_server`

use axum::Router;
use nutriscore_core::models::{
    ActivityLevel, Gender, Nutrient, NutrientIntake, NutrientIntakeRequest, NutrientValues,
    UserProfile,
};
use nutriscore_intelligence::{IntelligenceConfig, StandardStore};
use nutriscore_server::{config::ServerConfig, resources::ServerResources, server::build_router};
use serde_json::{json, Value};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Built-in reference tables validated against the default scored nutrients
pub fn builtin_store() -> StandardStore {
    let config = IntelligenceConfig::default();
    StandardStore::builtin(&config.scoring.adequacy.nutrients).expect("built-in tables load")
}

/// Profile helper
pub fn profile(
    gender: Gender,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity: ActivityLevel,
) -> UserProfile {
    UserProfile::new(gender, age, height_cm, weight_kg, activity).expect("valid profile")
}

/// Female, 30 years, 180 cm, 70 kg, active
pub fn reference_profile() -> UserProfile {
    profile(Gender::Female, 30, 180.0, 70.0, ActivityLevel::Active)
}

/// `daily_nutrient` body of the reference scenario
pub fn reference_daily_nutrient() -> Value {
    json!({
        "carbohydrate": 77.13,
        "protein": 8.84,
        "fat": 17.12,
        "transfat": 0,
        "kcal": 2500,
        "calcium": 1000,
        "phosphorus": 700,
        "magnesium": 350,
        "iron": 0,
        "zinc": 11,
        "natrium": 2000,
        "cholesterol": 300
    })
}

/// Validated intake of the reference scenario
pub fn reference_intake() -> NutrientIntake {
    let request: NutrientIntakeRequest =
        serde_json::from_value(reference_daily_nutrient()).expect("fixture parses");
    request.validate().expect("fixture validates")
}

/// Intake that meets every RNI, stays under every UL and sits inside every macro range
pub fn balanced_intake() -> NutrientIntake {
    let mut values = NutrientValues::new();
    for (nutrient, value) in [
        (Nutrient::Kcal, 2200.0),
        (Nutrient::Carbohydrate, 330.0),
        (Nutrient::Protein, 80.0),
        (Nutrient::Fat, 50.0),
        (Nutrient::Transfat, 0.5),
        (Nutrient::Calcium, 900.0),
        (Nutrient::Phosphorus, 900.0),
        (Nutrient::Magnesium, 400.0),
        (Nutrient::Iron, 15.0),
        (Nutrient::Zinc, 12.0),
        (Nutrient::Natrium, 1500.0),
        (Nutrient::Cholesterol, 200.0),
    ] {
        values.set(nutrient, Some(value));
    }
    NutrientIntakeRequest(values).validate().expect("balanced intake validates")
}

/// Server resources with built-in tables and default scoring
pub fn test_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(
        ServerConfig::default(),
        IntelligenceConfig::default(),
        builtin_store(),
    ))
}

/// Full application router with all middleware
pub fn test_router() -> Router {
    build_router(&test_resources())
}
