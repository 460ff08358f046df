// ABOUTME: Food detection records produced by the image analysis collaborator
// ABOUTME: Per-image detected food class, confidence, bounding box, and nutrient facts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrient::NutrientValues;
use serde::{Deserialize, Serialize};

/// Pixel bounding box of a detected food item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub min_x: i64,
    /// Top edge
    pub min_y: i64,
    /// Right edge
    pub max_x: i64,
    /// Bottom edge
    pub max_y: i64,
}

/// One detected food item with the nutrient facts of its class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedFood {
    /// Detector class index
    pub cls: u32,
    /// Food class name
    #[serde(rename = "class")]
    pub class_name: String,
    /// Detector confidence (0-1)
    pub confidence: f64,
    /// Location in the image
    #[serde(default)]
    pub bnd: BoundingBox,
    /// Nutrient facts for one serving of this class
    #[serde(default)]
    pub nut: NutrientValues,
}

/// Detections for one analyzed image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Source image path, when the detector reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Detected food items
    #[serde(default)]
    pub result: Vec<DetectedFood>,
}
