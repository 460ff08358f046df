// ABOUTME: Age/gender nutrient reference standards (RNI and UL) with bracket lookup
// ABOUTME: Immutable store loaded once at startup and shared read-only across requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference Standard Store
//!
//! One table per gender, eleven rows each, indexed by age bracket. Every row
//! maps nutrients to an optional Recommended Nutrient Intake (RNI) and an
//! optional Upper Limit (UL). The built-in tables carry Korean Dietary
//! Reference Intakes values; replacement tables can be loaded from a directory.

mod loader;

use crate::config::ConfigError;
use nutriscore_core::errors::{AppError, AppResult};
use nutriscore_core::models::{Gender, Nutrient, NutrientValues};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Built-in male reference table
const BUILTIN_MALE_JSON: &str = include_str!("../../data/standards/std_male.json");
/// Built-in female reference table
const BUILTIN_FEMALE_JSON: &str = include_str!("../../data/standards/std_female.json");

/// File name of the male table inside a standards directory
pub const MALE_TABLE_FILE: &str = "std_male.json";
/// File name of the female table inside a standards directory
pub const FEMALE_TABLE_FILE: &str = "std_female.json";

/// Inclusive upper age bound of every bracket but the last
pub const AGE_BRACKETS: [u32; 10] = [2, 5, 8, 11, 14, 18, 29, 49, 64, 74];

/// Number of age brackets (rows per table)
pub const BRACKET_COUNT: usize = AGE_BRACKETS.len() + 1;

/// Age bracket index (0-10) for an age in years
#[must_use]
pub fn bracket_index(age: u32) -> usize {
    AGE_BRACKETS
        .iter()
        .position(|upper| age <= *upper)
        .unwrap_or(AGE_BRACKETS.len())
}

/// Which reference value a table column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardKind {
    /// Recommended Nutrient Intake
    Rni,
    /// Tolerable Upper Intake Level
    Ul,
}

impl StandardKind {
    /// Column suffix
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Rni => "RNI",
            Self::Ul => "UL",
        }
    }
}

/// A `<nutrient>_RNI` or `<nutrient>_UL` table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardColumn {
    /// Nutrient the column refers to
    pub nutrient: Nutrient,
    /// RNI or UL
    pub kind: StandardKind,
}

impl StandardColumn {
    /// Parse a column name such as `zinc_UL`
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let (nutrient, suffix) = name.rsplit_once('_')?;
        let kind = match suffix {
            "RNI" => StandardKind::Rni,
            "UL" => StandardKind::Ul,
            _ => return None,
        };
        Some(Self {
            nutrient: Nutrient::from_name(nutrient)?,
            kind,
        })
    }
}

impl fmt::Display for StandardColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.nutrient, self.kind.suffix())
    }
}

/// Reference values for one gender and age bracket
///
/// Serializes as a flat map of `age_group` plus `<nutrient>_RNI` / `<nutrient>_UL`
/// keys; columns the table defines without a value serialize as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientStandard {
    /// Age group label (`"30-49"`)
    pub age_group: String,
    /// Recommended intake per nutrient
    pub rni: NutrientValues,
    /// Upper limit per nutrient
    pub ul: NutrientValues,
    columns: Vec<StandardColumn>,
}

impl NutrientStandard {
    /// Build a row from its values; the column set is every defined value
    #[must_use]
    pub fn new(age_group: impl Into<String>, rni: NutrientValues, ul: NutrientValues) -> Self {
        let mut columns: Vec<StandardColumn> = rni
            .iter()
            .map(|(nutrient, _)| StandardColumn {
                nutrient,
                kind: StandardKind::Rni,
            })
            .chain(ul.iter().map(|(nutrient, _)| StandardColumn {
                nutrient,
                kind: StandardKind::Ul,
            }))
            .collect();
        columns.sort_unstable();
        Self {
            age_group: age_group.into(),
            rni,
            ul,
            columns,
        }
    }

    /// Recommended intake for a nutrient, if defined
    #[must_use]
    pub const fn rni(&self, nutrient: Nutrient) -> Option<f64> {
        self.rni.get(nutrient)
    }

    /// Upper limit for a nutrient, if defined
    #[must_use]
    pub const fn ul(&self, nutrient: Nutrient) -> Option<f64> {
        self.ul.get(nutrient)
    }

    /// Value of a column, if defined
    #[must_use]
    pub const fn value(&self, column: StandardColumn) -> Option<f64> {
        match column.kind {
            StandardKind::Rni => self.rni.get(column.nutrient),
            StandardKind::Ul => self.ul.get(column.nutrient),
        }
    }

    /// Columns the source table defined for this row
    #[must_use]
    pub fn columns(&self) -> &[StandardColumn] {
        &self.columns
    }
}

impl Serialize for NutrientStandard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len() + 1))?;
        map.serialize_entry("age_group", &self.age_group)?;
        for column in &self.columns {
            map.serialize_entry(&column.to_string(), &self.value(*column))?;
        }
        map.end()
    }
}

/// Male and female reference tables
#[derive(Debug, Clone, PartialEq)]
pub struct StandardStore {
    male: Vec<NutrientStandard>,
    female: Vec<NutrientStandard>,
}

impl StandardStore {
    /// Load the compiled-in tables
    ///
    /// # Arguments
    /// * `required_rni` - Nutrients that must have a positive RNI in every row
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded tables fail validation
    pub fn builtin(required_rni: &[Nutrient]) -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_MALE_JSON, BUILTIN_FEMALE_JSON, required_rni)
    }

    /// Parse both tables from JSON text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTable` for malformed JSON, unknown columns,
    /// a row count other than eleven, or a missing/non-positive required RNI
    pub fn from_json(
        male_json: &str,
        female_json: &str,
        required_rni: &[Nutrient],
    ) -> Result<Self, ConfigError> {
        let male = loader::parse_table("std_male", male_json, required_rni)?;
        let female = loader::parse_table("std_female", female_json, required_rni)?;
        Ok(Self { male, female })
    }

    /// Read `std_male.json` and `std_female.json` from a directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if a file cannot be read, or any error of
    /// [`StandardStore::from_json`]
    pub fn from_dir(dir: &Path, required_rni: &[Nutrient]) -> Result<Self, ConfigError> {
        let male = loader::read_table_file(&dir.join(MALE_TABLE_FILE))?;
        let female = loader::read_table_file(&dir.join(FEMALE_TABLE_FILE))?;
        let store = Self::from_json(&male, &female, required_rni)?;
        info!(dir = %dir.display(), "Loaded nutrient reference standards from directory");
        Ok(store)
    }

    /// Load from a directory when given, otherwise use the built-in tables
    ///
    /// # Errors
    ///
    /// Returns any error of [`StandardStore::from_dir`] or [`StandardStore::builtin`]
    pub fn load(dir: Option<&Path>, required_rni: &[Nutrient]) -> Result<Self, ConfigError> {
        dir.map_or_else(
            || Self::builtin(required_rni),
            |dir| Self::from_dir(dir, required_rni),
        )
    }

    /// Table rows for a gender, in bracket order
    #[must_use]
    pub fn table(&self, gender: Gender) -> &[NutrientStandard] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Reference standard for a gender and age
    ///
    /// # Errors
    ///
    /// Returns `LookupMiss` if the selected table has no row for the bracket
    pub fn get_standard(&self, gender: Gender, age: u32) -> AppResult<&NutrientStandard> {
        let index = bracket_index(age);
        let standard = self.table(gender).get(index).ok_or_else(|| {
            AppError::lookup_miss(format!(
                "no {gender} reference standard for age {age} (bracket {index})"
            ))
        })?;
        debug!(
            %gender,
            age,
            bracket = index,
            age_group = %standard.age_group,
            "Selected reference standard"
        );
        Ok(standard)
    }
}
