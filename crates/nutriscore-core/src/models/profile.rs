// ABOUTME: User profile model with boundary validation for scoring requests
// ABOUTME: Gender and activity-level enums with their integer wire codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound accepted for age (years)
const MAX_AGE_YEARS: i64 = 150;
/// Upper bound accepted for height (cm)
const MAX_HEIGHT_CM: f64 = 300.0;
/// Upper bound accepted for weight (kg)
const MAX_WEIGHT_KG: f64 = 300.0;

/// Gender used to select EER coefficients and reference tables
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (wire code 0)
    Male,
    /// Female (wire code 1)
    Female,
}

impl Gender {
    /// Integer wire code
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Male => 0,
            Self::Female => 1,
        }
    }

    /// Parse the integer wire code
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for any code other than 0 or 1
    pub fn from_code(code: i64) -> AppResult<Self> {
        match code {
            0 => Ok(Self::Male),
            1 => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "gender must be 0 (male) or 1 (female), got {other}"
            ))
            .with_resource_id("gender")),
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender as it may arrive on the wire: integer code or name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum GenderInput {
    /// `0` = male, `1` = female
    Code(i64),
    /// `"male"` / `"female"` (case-insensitive)
    Name(String),
}

impl TryFrom<GenderInput> for Gender {
    type Error = AppError;

    fn try_from(input: GenderInput) -> Result<Self, Self::Error> {
        match input {
            GenderInput::Code(code) => Self::from_code(code),
            GenderInput::Name(name) => match name.trim().to_ascii_lowercase().as_str() {
                "male" | "m" => Ok(Self::Male),
                "female" | "f" => Ok(Self::Female),
                _ => Err(AppError::invalid_input(format!(
                    "gender must be \"male\" or \"female\", got \"{name}\""
                ))
                .with_resource_id("gender")),
            },
        }
    }
}

/// Physical activity level, encoded 0-3 on the wire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "i64", into = "u8")]
pub enum ActivityLevel {
    /// Sedentary (code 0)
    Sedentary,
    /// Low active (code 1)
    LowActive,
    /// Active (code 2)
    Active,
    /// Very active (code 3)
    VeryActive,
}

impl ActivityLevel {
    /// All levels in code order
    pub const ALL: [Self; 4] = [
        Self::Sedentary,
        Self::LowActive,
        Self::Active,
        Self::VeryActive,
    ];

    /// Integer wire code (also the index into PA tables)
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Sedentary => 0,
            Self::LowActive => 1,
            Self::Active => 2,
            Self::VeryActive => 3,
        }
    }

    /// Parse the integer wire code
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for codes outside 0-3
    pub fn from_code(code: i64) -> AppResult<Self> {
        match code {
            0 => Ok(Self::Sedentary),
            1 => Ok(Self::LowActive),
            2 => Ok(Self::Active),
            3 => Ok(Self::VeryActive),
            other => Err(AppError::invalid_input(format!(
                "activity must be an integer code between 0 and 3, got {other}"
            ))
            .with_resource_id("activity")),
        }
    }
}

impl TryFrom<i64> for ActivityLevel {
    type Error = AppError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<ActivityLevel> for u8 {
    fn from(level: ActivityLevel) -> Self {
        level.code()
    }
}

/// Validated user profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Gender
    pub gender: Gender,
    /// Age in whole years
    pub age: u32,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Activity level
    pub activity: ActivityLevel,
}

impl UserProfile {
    /// Build a profile, validating body measurements
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if age, height or weight fall outside accepted bounds
    pub fn new(
        gender: Gender,
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        activity: ActivityLevel,
    ) -> AppResult<Self> {
        if i64::from(age) > MAX_AGE_YEARS {
            return Err(AppError::out_of_range(
                "age",
                format!("age must be between 0 and {MAX_AGE_YEARS} years"),
            ));
        }
        if !height_cm.is_finite() || height_cm <= 0.0 || height_cm > MAX_HEIGHT_CM {
            return Err(AppError::out_of_range(
                "height",
                format!("height must be between 0 and {MAX_HEIGHT_CM} cm"),
            ));
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg > MAX_WEIGHT_KG {
            return Err(AppError::out_of_range(
                "weight",
                format!("weight must be between 0 and {MAX_WEIGHT_KG} kg"),
            ));
        }

        Ok(Self {
            gender,
            age,
            height_cm,
            weight_kg,
            activity,
        })
    }
}

/// Parse a non-negative integer age
///
/// # Errors
///
/// Returns `InvalidInput` for negative ages and `ValueOutOfRange` past the upper bound
pub fn validate_age(age: i64) -> AppResult<u32> {
    if age < 0 {
        return Err(
            AppError::invalid_input(format!("age must not be negative, got {age}"))
                .with_resource_id("age"),
        );
    }
    if age > MAX_AGE_YEARS {
        return Err(AppError::out_of_range(
            "age",
            format!("age must be between 0 and {MAX_AGE_YEARS} years"),
        ));
    }
    u32::try_from(age).map_err(|_| AppError::out_of_range("age", "age does not fit in u32"))
}

/// User profile as received over the wire (`user_info`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfileRequest {
    /// Gender code or name
    pub gender: Option<GenderInput>,
    /// Age in years
    pub age: Option<i64>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    /// Activity code 0-3
    pub activity: Option<i64>,
}

impl UserProfileRequest {
    /// Validate presence and ranges, producing a typed profile
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for absent keys, `InvalidInput` for bad
    /// gender/activity codes or negative age, `ValueOutOfRange` for bad measurements
    pub fn validate(self) -> AppResult<UserProfile> {
        let gender =
            Gender::try_from(self.gender.ok_or_else(|| AppError::missing_field("gender"))?)?;
        let age = validate_age(self.age.ok_or_else(|| AppError::missing_field("age"))?)?;
        let height = self.height.ok_or_else(|| AppError::missing_field("height"))?;
        let weight = self.weight.ok_or_else(|| AppError::missing_field("weight"))?;
        let activity = ActivityLevel::from_code(
            self.activity.ok_or_else(|| AppError::missing_field("activity"))?,
        )?;

        UserProfile::new(gender, age, height, weight, activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn request() -> UserProfileRequest {
        UserProfileRequest {
            gender: Some(GenderInput::Code(0)),
            age: Some(30),
            height: Some(180.0),
            weight: Some(70.0),
            activity: Some(2),
        }
    }

    #[test]
    fn test_valid_request_produces_profile() {
        let profile = request().validate().unwrap();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.age, 30);
        assert_eq!(profile.activity, ActivityLevel::Active);
    }

    #[test]
    fn test_gender_accepts_names() {
        let mut req = request();
        req.gender = Some(GenderInput::Name("Female".to_owned()));
        assert_eq!(req.validate().unwrap().gender, Gender::Female);
    }

    #[test]
    fn test_missing_field_reported_by_name() {
        let mut req = request();
        req.weight = None;
        let err = req.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert_eq!(err.context.resource_id.as_deref(), Some("weight"));
    }

    #[test]
    fn test_out_of_range_codes_are_invalid_input() {
        let mut req = request();
        req.activity = Some(4);
        assert_eq!(req.validate().unwrap_err().code, ErrorCode::InvalidInput);

        let mut req = request();
        req.gender = Some(GenderInput::Code(2));
        assert_eq!(req.validate().unwrap_err().code, ErrorCode::InvalidInput);

        let mut req = request();
        req.age = Some(-1);
        assert_eq!(req.validate().unwrap_err().code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let mut req = request();
        req.weight = Some(0.0);
        assert_eq!(req.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_activity_serializes_as_code() {
        let profile = request().validate().unwrap();
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["activity"], 2);
        assert_eq!(json["gender"], "male");
        assert_eq!(json["height"], 180.0);
    }
}
