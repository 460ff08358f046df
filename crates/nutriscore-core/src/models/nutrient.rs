// ABOUTME: Tracked nutrient enum, daily intake record, and enum-indexed nutrient values
// ABOUTME: Replaces string-keyed nutrient lookups with typed access validated at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Nutrients tracked by intake records and reference standards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Kcal,
    /// Carbohydrate (g)
    Carbohydrate,
    /// Total sugars (g)
    Sugar,
    /// Fat (g)
    Fat,
    /// Protein (g)
    Protein,
    /// Calcium (mg)
    Calcium,
    /// Phosphorus (mg)
    Phosphorus,
    /// Sodium (mg)
    Natrium,
    /// Potassium (mg)
    Kalium,
    /// Magnesium (mg)
    Magnesium,
    /// Iron (mg)
    Iron,
    /// Zinc (mg)
    Zinc,
    /// Cholesterol (mg)
    Cholesterol,
    /// Trans fat (g)
    Transfat,
}

impl Nutrient {
    /// Number of tracked nutrients
    pub const COUNT: usize = 14;

    /// All nutrients in declaration order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Kcal,
        Self::Carbohydrate,
        Self::Sugar,
        Self::Fat,
        Self::Protein,
        Self::Calcium,
        Self::Phosphorus,
        Self::Natrium,
        Self::Kalium,
        Self::Magnesium,
        Self::Iron,
        Self::Zinc,
        Self::Cholesterol,
        Self::Transfat,
    ];

    /// Position in [`Nutrient::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire name (`"carbohydrate"`, `"natrium"`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kcal => "kcal",
            Self::Carbohydrate => "carbohydrate",
            Self::Sugar => "sugar",
            Self::Fat => "fat",
            Self::Protein => "protein",
            Self::Calcium => "calcium",
            Self::Phosphorus => "phosphorus",
            Self::Natrium => "natrium",
            Self::Kalium => "kalium",
            Self::Magnesium => "magnesium",
            Self::Iron => "iron",
            Self::Zinc => "zinc",
            Self::Cholesterol => "cholesterol",
            Self::Transfat => "transfat",
        }
    }

    /// Look up a nutrient by wire name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.as_str() == name)
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional value per nutrient, indexed by [`Nutrient`]
///
/// Serializes as a map of the present entries keyed by wire name. Deserialization
/// ignores keys that are not tracked nutrients.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientValues([Option<f64>; Nutrient::COUNT]);

impl NutrientValues {
    /// Empty set of values
    #[must_use]
    pub const fn new() -> Self {
        Self([None; Nutrient::COUNT])
    }

    /// Value for a nutrient, if defined
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.0[nutrient.index()]
    }

    /// Set or clear the value for a nutrient
    pub fn set(&mut self, nutrient: Nutrient, value: Option<f64>) {
        self.0[nutrient.index()] = value;
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, nutrient: Nutrient, value: f64) -> Self {
        self.set(nutrient, Some(value));
        self
    }

    /// Iterate over defined values in nutrient order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL
            .into_iter()
            .filter_map(|n| self.get(n).map(|v| (n, v)))
    }
}

impl Serialize for NutrientValues {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        for (nutrient, value) in self.iter() {
            map.serialize_entry(nutrient.as_str(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NutrientValues {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NutrientValuesVisitor;

        impl<'de> Visitor<'de> for NutrientValuesVisitor {
            type Value = NutrientValues;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of nutrient names to numbers")
            }

            fn visit_map<V>(self, mut map: V) -> Result<NutrientValues, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut values = NutrientValues::new();
                while let Some(key) = map.next_key::<String>()? {
                    match Nutrient::from_name(&key) {
                        Some(nutrient) => values.set(nutrient, map.next_value::<Option<f64>>()?),
                        None => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                Ok(values)
            }
        }

        deserializer.deserialize_map(NutrientValuesVisitor)
    }
}

/// Validated daily nutrient intake totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientIntake {
    /// Energy (kcal)
    pub kcal: f64,
    /// Carbohydrate (g)
    pub carbohydrate: f64,
    /// Total sugars (g)
    pub sugar: f64,
    /// Fat (g)
    pub fat: f64,
    /// Protein (g)
    pub protein: f64,
    /// Calcium (mg)
    pub calcium: f64,
    /// Phosphorus (mg)
    pub phosphorus: f64,
    /// Sodium (mg)
    pub natrium: f64,
    /// Potassium (mg)
    pub kalium: f64,
    /// Magnesium (mg)
    pub magnesium: f64,
    /// Iron (mg)
    pub iron: f64,
    /// Zinc (mg)
    pub zinc: f64,
    /// Cholesterol (mg)
    pub cholesterol: f64,
    /// Trans fat (g)
    pub transfat: f64,
}

impl NutrientIntake {
    /// Nutrients that must be present in a `daily_nutrient` request
    pub const REQUIRED: [Nutrient; 12] = [
        Nutrient::Kcal,
        Nutrient::Carbohydrate,
        Nutrient::Fat,
        Nutrient::Protein,
        Nutrient::Calcium,
        Nutrient::Phosphorus,
        Nutrient::Natrium,
        Nutrient::Magnesium,
        Nutrient::Iron,
        Nutrient::Zinc,
        Nutrient::Cholesterol,
        Nutrient::Transfat,
    ];

    /// Intake value for a nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Kcal => self.kcal,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Sugar => self.sugar,
            Nutrient::Fat => self.fat,
            Nutrient::Protein => self.protein,
            Nutrient::Calcium => self.calcium,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Natrium => self.natrium,
            Nutrient::Kalium => self.kalium,
            Nutrient::Magnesium => self.magnesium,
            Nutrient::Iron => self.iron,
            Nutrient::Zinc => self.zinc,
            Nutrient::Cholesterol => self.cholesterol,
            Nutrient::Transfat => self.transfat,
        }
    }

    /// Mutable access to the intake value for a nutrient
    pub fn get_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Kcal => &mut self.kcal,
            Nutrient::Carbohydrate => &mut self.carbohydrate,
            Nutrient::Sugar => &mut self.sugar,
            Nutrient::Fat => &mut self.fat,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Phosphorus => &mut self.phosphorus,
            Nutrient::Natrium => &mut self.natrium,
            Nutrient::Kalium => &mut self.kalium,
            Nutrient::Magnesium => &mut self.magnesium,
            Nutrient::Iron => &mut self.iron,
            Nutrient::Zinc => &mut self.zinc,
            Nutrient::Cholesterol => &mut self.cholesterol,
            Nutrient::Transfat => &mut self.transfat,
        }
    }
}

/// Daily intake as received over the wire (`daily_nutrient`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientIntakeRequest(pub NutrientValues);

impl NutrientIntakeRequest {
    /// Validate presence and ranges, producing typed totals
    ///
    /// `sugar` and `kalium` feed no scoring rule and default to 0 when absent.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for an absent required nutrient and
    /// `ValueOutOfRange` for negative or non-finite values
    pub fn validate(self) -> AppResult<NutrientIntake> {
        for nutrient in NutrientIntake::REQUIRED {
            if self.0.get(nutrient).is_none() {
                return Err(AppError::missing_field(nutrient.as_str()));
            }
        }

        let mut intake = NutrientIntake::default();
        for (nutrient, value) in self.0.iter() {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::out_of_range(
                    nutrient.as_str(),
                    format!("{nutrient} must be a non-negative number, got {value}"),
                ));
            }
            *intake.get_mut(nutrient) = value;
        }
        Ok(intake)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_nutrient_names_round_trip() {
        for nutrient in Nutrient::ALL {
            assert_eq!(Nutrient::from_name(nutrient.as_str()), Some(nutrient));
            assert_eq!(Nutrient::ALL[nutrient.index()], nutrient);
        }
        assert_eq!(Nutrient::from_name("sodium"), None);
    }

    #[test]
    fn test_values_ignore_unknown_keys() {
        let values: NutrientValues =
            serde_json::from_str(r#"{"kcal": 250.0, "food_name": "rice", "iron": null}"#).unwrap();
        assert_eq!(values.get(Nutrient::Kcal), Some(250.0));
        assert_eq!(values.get(Nutrient::Iron), None);
        assert_eq!(values.iter().count(), 1);
    }

    #[test]
    fn test_intake_request_defaults_untracked_nutrients() {
        let request: NutrientIntakeRequest = serde_json::from_str(
            r#"{"carbohydrate": 77.13, "protein": 8.84, "fat": 17.12, "transfat": 0,
                "kcal": 2500, "calcium": 1000, "phosphorus": 700, "magnesium": 350,
                "iron": 0, "zinc": 11, "natrium": 2000, "cholesterol": 300}"#,
        )
        .unwrap();
        let intake = request.validate().unwrap();
        assert_eq!(intake.sugar, 0.0);
        assert_eq!(intake.kalium, 0.0);
        assert!((intake.carbohydrate - 77.13).abs() < f64::EPSILON);
    }

    #[test]
    fn test_intake_request_missing_required() {
        let request: NutrientIntakeRequest =
            serde_json::from_str(r#"{"kcal": 2000, "carbohydrate": 300}"#).unwrap();
        let err = request.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
    }

    #[test]
    fn test_intake_request_rejects_negative() {
        let mut values = NutrientValues::new();
        for nutrient in NutrientIntake::REQUIRED {
            values.set(nutrient, Some(1.0));
        }
        values.set(Nutrient::Zinc, Some(-3.0));
        let err = NutrientIntakeRequest(values).validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.context.resource_id.as_deref(), Some("zinc"));
    }
}
