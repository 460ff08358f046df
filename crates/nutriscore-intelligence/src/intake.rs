// ABOUTME: Sums nutrient facts of detected foods across images into daily intake totals
// ABOUTME: Skips detections below the confidence threshold and rejects invalid facts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::IntakeConfig;
use nutriscore_core::errors::{AppError, AppResult};
use nutriscore_core::models::{DetectionResult, NutrientIntake};
use tracing::{debug, warn};

/// Aggregate detection records into one day of nutrient intake
///
/// Nutrients a record omits contribute 0. Detections with a confidence below
/// `config.min_confidence` are skipped.
///
/// # Errors
///
/// Returns `InvalidInput` naming the food class if a counted detection has a
/// negative or non-finite nutrient value, and `InvalidInput` naming the
/// nutrient if a daily total overflows
pub fn aggregate_daily_intake(
    results: &[DetectionResult],
    config: &IntakeConfig,
) -> AppResult<NutrientIntake> {
    let mut intake = NutrientIntake::default();
    let mut counted = 0_usize;
    let mut skipped = 0_usize;

    for food in results.iter().flat_map(|image| &image.result) {
        if food.confidence.is_nan() || food.confidence < config.min_confidence {
            warn!(
                class = %food.class_name,
                confidence = food.confidence,
                min_confidence = config.min_confidence,
                "Skipping low-confidence detection"
            );
            skipped += 1;
            continue;
        }

        for (nutrient, value) in food.nut.iter() {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "detected food \"{}\" has invalid {nutrient} value {value}",
                    food.class_name
                ))
                .with_resource_id(food.class_name.clone()));
            }
            let total = intake.get_mut(nutrient);
            *total += value;
            if !total.is_finite() {
                return Err(AppError::invalid_input(format!(
                    "daily {nutrient} total overflowed after adding \"{}\"",
                    food.class_name
                ))
                .with_resource_id(nutrient.as_str()));
            }
        }
        counted += 1;
    }

    debug!(
        images = results.len(),
        counted,
        skipped,
        kcal = intake.kcal,
        "Aggregated daily intake"
    );

    Ok(intake)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscore_core::models::{BoundingBox, DetectedFood, Nutrient, NutrientValues};

    fn food(class_name: &str, confidence: f64, nut: NutrientValues) -> DetectedFood {
        DetectedFood {
            cls: 0,
            class_name: class_name.to_owned(),
            confidence,
            bnd: BoundingBox::default(),
            nut,
        }
    }

    #[test]
    fn test_empty_input_is_zero() {
        let intake = aggregate_daily_intake(&[], &IntakeConfig::default()).unwrap();
        assert_eq!(intake, NutrientIntake::default());
    }

    #[test]
    fn test_nan_confidence_skipped() {
        let results = [DetectionResult {
            path: None,
            result: vec![food("rice", f64::NAN, NutrientValues::new().with(Nutrient::Kcal, 300.0))],
        }];
        let intake = aggregate_daily_intake(&results, &IntakeConfig::default()).unwrap();
        assert!(intake.kcal.abs() < f64::EPSILON);
    }
}
