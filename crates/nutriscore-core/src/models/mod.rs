// ABOUTME: Core domain models for nutrition scoring
// ABOUTME: User profiles, tracked nutrients, intake records, and food detection records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models shared by the scoring engine and the service layer.
//!
//! Raw request shapes (`*Request`) carry optional fields exactly as they
//! arrive over the wire; their `validate` methods produce the typed values
//! the engine works with.

/// Food detection records supplied by the image analysis collaborator
pub mod detection;
/// Tracked nutrients, intake records and enum-indexed nutrient values
pub mod nutrient;
/// User profile (gender, age, body measurements, activity level)
pub mod profile;

pub use detection::{BoundingBox, DetectedFood, DetectionResult};
pub use nutrient::{Nutrient, NutrientIntake, NutrientIntakeRequest, NutrientValues};
pub use profile::{
    validate_age, ActivityLevel, Gender, GenderInput, UserProfile, UserProfileRequest,
};
