// ABOUTME: HTTP server assembly: router, middleware layers, and graceful shutdown
// ABOUTME: Binds the configured address and serves the nutrition scoring API on tokio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::middleware::{request_id_header, setup_cors, HttpMakeSpan, HttpOnResponse};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, NutritionRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the application router with all routes and middleware
#[must_use]
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let config = &resources.config;

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(NutritionRoutes::routes(Arc::clone(resources)))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(HttpMakeSpan)
                        .on_response(HttpOnResponse),
                )
                .layer(PropagateRequestIdLayer::new(request_id_header()))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.request_timeout_secs,
                )))
                .map_response(|res: http::Response<_>| res.map(axum::body::Body::new))
                .layer(RequestBodyLimitLayer::new(config.max_request_body_bytes)),
        )
        .layer(setup_cors(config))
}

/// Bind the configured address and serve until ctrl-c
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = resources.config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    serve(listener, resources).await
}

/// Serve on an already-bound listener until ctrl-c
///
/// # Errors
///
/// Returns an error if the server fails
pub async fn serve(listener: TcpListener, resources: Arc<ServerResources>) -> Result<()> {
    let router = build_router(&resources);
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!(%addr, "NutriScore HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("NutriScore HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
