// ABOUTME: HTTP route modules for the NutriScore API
// ABOUTME: Health checks and nutrition scoring endpoints plus shared body parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route modules
//!
//! Each module exposes a route struct with a `routes()` constructor returning
//! an axum `Router`.

/// Liveness and readiness checks
pub mod health;
/// EER, reference standard, daily score and intake endpoints
pub mod nutrition;

pub use health::HealthRoutes;
pub use nutrition::NutritionRoutes;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use nutriscore_core::errors::AppError;

/// Unwrap a JSON body, reporting malformed input through the error envelope
pub(crate) fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::invalid_format(rejection.body_text()))
}
