// ABOUTME: Parses reference standard tables from JSON row arrays
// ABOUTME: Validates column names, row count, and positive RNIs for scored nutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{NutrientStandard, StandardColumn, StandardKind, BRACKET_COUNT};
use crate::config::ConfigError;
use nutriscore_core::models::{Nutrient, NutrientValues};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Identifier column present in every row
const AGE_GROUP_COLUMN: &str = "age_group";

pub(super) fn read_table_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub(super) fn parse_table(
    table: &'static str,
    json: &str,
    required_rni: &[Nutrient],
) -> Result<Vec<NutrientStandard>, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidTable { table, reason };

    let rows: Vec<Map<String, Value>> =
        serde_json::from_str(json).map_err(|e| invalid(format!("not an array of rows: {e}")))?;

    if rows.len() != BRACKET_COUNT {
        return Err(invalid(format!(
            "expected {BRACKET_COUNT} age-bracket rows, found {}",
            rows.len()
        )));
    }

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let standard =
                parse_row(row).map_err(|reason| invalid(format!("row {index}: {reason}")))?;
            for nutrient in required_rni {
                if !standard.rni(*nutrient).is_some_and(|rni| rni > 0.0) {
                    return Err(invalid(format!(
                        "row {index} ({}): {nutrient}_RNI must be a positive number",
                        standard.age_group
                    )));
                }
            }
            Ok(standard)
        })
        .collect()
}

fn parse_row(row: &Map<String, Value>) -> Result<NutrientStandard, String> {
    let age_group = match row.get(AGE_GROUP_COLUMN) {
        Some(Value::String(label)) => label.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => return Err(format!("missing {AGE_GROUP_COLUMN} column")),
    };

    let mut rni = NutrientValues::new();
    let mut ul = NutrientValues::new();
    let mut columns = Vec::with_capacity(row.len().saturating_sub(1));

    for (name, value) in row {
        if name == AGE_GROUP_COLUMN {
            continue;
        }
        let column = StandardColumn::parse(name).ok_or_else(|| format!("unknown column {name}"))?;
        let value = match value {
            Value::Null => None,
            Value::Number(number) => {
                let value = number
                    .as_f64()
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .ok_or_else(|| format!("{name} must be a non-negative number"))?;
                Some(value)
            }
            other => return Err(format!("{name} must be a number or null, got {other}")),
        };
        match column.kind {
            StandardKind::Rni => rni.set(column.nutrient, value),
            StandardKind::Ul => ul.set(column.nutrient, value),
        }
        columns.push(column);
    }
    columns.sort_unstable();

    Ok(NutrientStandard {
        age_group,
        rni,
        ul,
        columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(row: &str) -> String {
        let rows = vec![row; BRACKET_COUNT];
        format!("[{}]", rows.join(","))
    }

    #[test]
    fn test_null_means_undefined() {
        let json = table_with(r#"{"age_group": "30-49", "zinc_RNI": 8, "zinc_UL": null}"#);
        let rows = parse_table("std_test", &json, &[Nutrient::Zinc]).unwrap();
        assert_eq!(rows[0].rni(Nutrient::Zinc), Some(8.0));
        assert_eq!(rows[0].ul(Nutrient::Zinc), None);
        assert_eq!(rows[0].columns().len(), 2);
    }

    #[test]
    fn test_unknown_column_fails() {
        let json = table_with(r#"{"age_group": "30-49", "sodium_UL": 2300}"#);
        let err = parse_table("std_test", &json, &[]).unwrap_err();
        assert!(err.to_string().contains("sodium_UL"));
    }

    #[test]
    fn test_wrong_row_count_fails() {
        let json = r#"[{"age_group": "1-2", "zinc_RNI": 3}]"#;
        assert!(matches!(
            parse_table("std_test", json, &[]),
            Err(ConfigError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_required_rni_must_be_positive() {
        let json = table_with(r#"{"age_group": "30-49", "iron_RNI": 0}"#);
        let err = parse_table("std_test", &json, &[Nutrient::Iron]).unwrap_err();
        assert!(err.to_string().contains("iron_RNI"));
    }
}
