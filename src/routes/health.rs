// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use crate::constants::{endpoints, service_names};
use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use nutriscore_core::models::Gender;
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::HEALTH_CHECK, get(Self::health_handler))
            .route(endpoints::READY_CHECK, get(Self::ready_handler))
            .with_state(resources)
    }

    async fn health_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": service_names::NUTRISCORE_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn ready_handler(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "ready",
            "standards": {
                "male_rows": resources.standards.table(Gender::Male).len(),
                "female_rows": resources.standards.table(Gender::Female).len()
            },
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
