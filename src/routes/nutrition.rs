// ABOUTME: Nutrition scoring route handlers (EER, reference standard, daily score, intake)
// ABOUTME: Validates raw JSON bodies into typed profiles and intake before calling the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition scoring routes
//!
//! Thin HTTP layer around `nutriscore_intelligence`. Every handler validates
//! its body once at the boundary; the engine only sees typed values.

use super::parse_body;
use crate::constants::endpoints;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use nutriscore_core::errors::AppError;
use nutriscore_core::models::{
    validate_age, DetectionResult, Gender, GenderInput, NutrientIntakeRequest, UserProfileRequest,
};
use nutriscore_intelligence::{aggregate_daily_intake, calculate_daily_score, estimate_eer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Body of `POST /EER`
#[derive(Debug, Deserialize)]
pub struct EerRequest {
    /// User profile
    pub user_info: Option<UserProfileRequest>,
}

/// Response of `POST /EER`
#[derive(Debug, Serialize, Deserialize)]
pub struct EerResponse {
    /// Estimated energy requirement (kcal/day)
    #[serde(rename = "EER")]
    pub eer: f64,
}

/// Body of `POST /standard`
#[derive(Debug, Deserialize)]
pub struct StandardRequest {
    /// Gender code or name
    pub gender: Option<GenderInput>,
    /// Age in years
    pub age: Option<i64>,
}

/// Body of `POST /score`
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    /// User profile
    pub user_info: Option<UserProfileRequest>,
    /// Daily nutrient totals
    pub daily_nutrient: Option<NutrientIntakeRequest>,
}

/// Body of `POST /intake`
#[derive(Debug, Deserialize)]
pub struct IntakeRequest {
    /// Detection records, one entry per image
    pub results: Option<Vec<DetectionResult>>,
}

/// Nutrition scoring routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition scoring routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::EER, post(Self::handle_eer))
            .route(endpoints::STANDARD, post(Self::handle_standard))
            .route(endpoints::SCORE, post(Self::handle_score))
            .route(endpoints::INTAKE, post(Self::handle_intake))
            .with_state(resources)
    }

    /// Handle `POST /EER`
    async fn handle_eer(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<EerRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = parse_body(payload)?;
        let profile = request
            .user_info
            .ok_or_else(|| AppError::missing_field("user_info"))?
            .validate()?;

        let eer = estimate_eer(&profile, &resources.intelligence.eer);
        info!(
            gender = %profile.gender,
            age = profile.age,
            activity = profile.activity.code(),
            eer,
            "EER estimated"
        );

        Ok(Json(EerResponse { eer }).into_response())
    }

    /// Handle `POST /standard`
    ///
    /// The row is flat: every `<nutrient>_RNI` / `<nutrient>_UL` column plus the
    /// matched `age_group` label. `age_group` is the one identifier column kept so
    /// callers can see which bracket was selected.
    async fn handle_standard(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<StandardRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = parse_body(payload)?;
        let gender = Gender::try_from(
            request
                .gender
                .ok_or_else(|| AppError::missing_field("gender"))?,
        )?;
        let age = validate_age(request.age.ok_or_else(|| AppError::missing_field("age"))?)?;

        let standard = resources.standards.get_standard(gender, age)?;
        info!(%gender, age, age_group = %standard.age_group, "Reference standard served");

        Ok(Json(standard).into_response())
    }

    /// Handle `POST /score`
    async fn handle_score(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<ScoreRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = parse_body(payload)?;
        let profile = request
            .user_info
            .ok_or_else(|| AppError::missing_field("user_info"))?
            .validate()?;
        let intake = request
            .daily_nutrient
            .ok_or_else(|| AppError::missing_field("daily_nutrient"))?
            .validate()?;

        let breakdown = calculate_daily_score(
            &profile,
            &intake,
            &resources.standards,
            &resources.intelligence,
        )?;
        info!(
            gender = %profile.gender,
            age = profile.age,
            daily_score = breakdown.daily_score,
            penalty = breakdown.detail.penalty.total,
            "Daily score calculated"
        );

        Ok(Json(breakdown).into_response())
    }

    /// Handle `POST /intake`
    async fn handle_intake(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<IntakeRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = parse_body(payload)?;
        let results = request
            .results
            .ok_or_else(|| AppError::missing_field("results"))?;

        let intake = aggregate_daily_intake(&results, &resources.intelligence.intake)?;
        info!(images = results.len(), kcal = intake.kcal, "Daily intake aggregated");

        Ok(Json(intake).into_response())
    }
}
