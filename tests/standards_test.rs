// ABOUTME: Integration tests for the reference standard store and age bracket lookup
// ABOUTME: Covers built-in tables, directory loading, table validation, and serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::builtin_store;
use nutriscore_core::errors::ErrorCode;
use nutriscore_core::models::{Gender, Nutrient};
use nutriscore_intelligence::standards::{FEMALE_TABLE_FILE, MALE_TABLE_FILE};
use nutriscore_intelligence::{bracket_index, ConfigError, StandardStore, AGE_BRACKETS};
use std::fs;

const BUILTIN_MALE: &str =
    include_str!("../crates/nutriscore-intelligence/data/standards/std_male.json");
const BUILTIN_FEMALE: &str =
    include_str!("../crates/nutriscore-intelligence/data/standards/std_female.json");

const REQUIRED: [Nutrient; 2] = [Nutrient::Protein, Nutrient::Calcium];

// ============================================================================
// Bracket Lookup
// ============================================================================

#[test]
fn test_every_age_maps_to_one_monotonic_bracket() {
    let mut previous = 0;
    for age in 0..=120 {
        let index = bracket_index(age);
        assert!(index <= AGE_BRACKETS.len());
        assert!(index >= previous, "bracket went backwards at age {age}");
        assert!(index - previous <= 1, "bracket skipped at age {age}");
        previous = index;
    }
    assert_eq!(previous, AGE_BRACKETS.len());
}

#[test]
fn test_upper_bounds_are_inclusive() {
    for (index, upper) in AGE_BRACKETS.iter().enumerate() {
        assert_eq!(bracket_index(*upper), index);
        assert_eq!(bracket_index(upper + 1), index + 1);
    }
}

#[test]
fn test_lookup_returns_labelled_rows() {
    common::init_test_logging();
    let store = builtin_store();
    let cases = [
        (0, "1-2"),
        (2, "1-2"),
        (3, "3-5"),
        (18, "15-18"),
        (19, "19-29"),
        (30, "30-49"),
        (49, "30-49"),
        (50, "50-64"),
        (74, "65-74"),
        (75, "75+"),
        (110, "75+"),
    ];
    for gender in [Gender::Male, Gender::Female] {
        for (age, label) in cases {
            let standard = store.get_standard(gender, age).unwrap();
            assert_eq!(standard.age_group, label, "{gender} age {age}");
        }
    }
}

#[test]
fn test_builtin_values_for_adult_rows() {
    let store = builtin_store();
    let male = store.get_standard(Gender::Male, 30).unwrap();
    let female = store.get_standard(Gender::Female, 30).unwrap();

    assert_eq!(male.rni(Nutrient::Protein), Some(65.0));
    assert_eq!(female.rni(Nutrient::Protein), Some(50.0));
    assert_eq!(female.rni(Nutrient::Iron), Some(14.0));
    assert_eq!(male.ul(Nutrient::Natrium), Some(2300.0));
    assert_eq!(male.ul(Nutrient::Cholesterol), Some(300.0));
    assert_eq!(male.ul(Nutrient::Magnesium), None);
    assert_eq!(male.rni(Nutrient::Cholesterol), None);
}

#[test]
fn test_child_rows_have_no_cholesterol_limit() {
    let store = builtin_store();
    for age in [1, 4, 7, 10, 13, 16] {
        let standard = store.get_standard(Gender::Female, age).unwrap();
        assert_eq!(standard.ul(Nutrient::Cholesterol), None, "age {age}");
    }
}

// ============================================================================
// Directory Loading
// ============================================================================

#[test]
fn test_from_dir_reads_both_tables() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(MALE_TABLE_FILE), BUILTIN_MALE).unwrap();
    fs::write(dir.path().join(FEMALE_TABLE_FILE), BUILTIN_FEMALE).unwrap();

    let loaded = StandardStore::from_dir(dir.path(), &REQUIRED).unwrap();
    let builtin = StandardStore::builtin(&REQUIRED).unwrap();
    assert_eq!(loaded, builtin);
}

#[test]
fn test_load_without_dir_uses_builtin() {
    let store = StandardStore::load(None, &REQUIRED).unwrap();
    assert_eq!(store, StandardStore::builtin(&REQUIRED).unwrap());
}

#[test]
fn test_from_dir_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(MALE_TABLE_FILE), BUILTIN_MALE).unwrap();

    let err = StandardStore::from_dir(dir.path(), &REQUIRED).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "{err:?}");
}

#[test]
fn test_truncated_table_is_rejected() {
    let mut rows: Vec<serde_json::Value> = serde_json::from_str(BUILTIN_FEMALE).unwrap();
    rows.pop();
    let truncated = serde_json::to_string(&rows).unwrap();

    let err = StandardStore::from_json(BUILTIN_MALE, &truncated, &REQUIRED).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTable { .. }), "{err:?}");
}

#[test]
fn test_missing_required_rni_is_rejected() {
    let mut rows: Vec<serde_json::Value> = serde_json::from_str(BUILTIN_MALE).unwrap();
    rows[3]["calcium_RNI"] = serde_json::Value::Null;
    let patched = serde_json::to_string(&rows).unwrap();

    assert!(StandardStore::from_json(&patched, BUILTIN_FEMALE, &REQUIRED).is_err());
    assert!(StandardStore::from_json(&patched, BUILTIN_FEMALE, &[Nutrient::Protein]).is_ok());
}

#[test]
fn test_config_error_converts_to_config_invalid() {
    let err = StandardStore::from_json("not json", BUILTIN_FEMALE, &REQUIRED).unwrap_err();
    let app_error: nutriscore_core::errors::AppError = err.into();
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_standard_serializes_flat_columns() {
    let store = builtin_store();
    let standard = store.get_standard(Gender::Male, 30).unwrap();
    let json = serde_json::to_value(standard).unwrap();

    assert_eq!(json["age_group"], "30-49");
    assert_eq!(json["protein_RNI"], 65.0);
    assert_eq!(json["natrium_UL"], 2300.0);
    assert!(json["magnesium_UL"].is_null());
    assert!(json.as_object().unwrap().contains_key("magnesium_UL"));
}
