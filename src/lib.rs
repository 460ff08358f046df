// ABOUTME: Main library entry point for the NutriScore nutrition scoring server
// ABOUTME: Wires configuration, logging, shared resources and HTTP routes around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriScore Server
//!
//! HTTP service that scores a day of nutrient intake against age/gender
//! reference standards and an estimated energy requirement.
//!
//! ## Architecture
//!
//! - **nutriscore-core**: errors, domain models, constants
//! - **nutriscore-intelligence**: reference standards, EER, scoring rules
//! - **this crate**: environment configuration, logging, axum routes, server bootstrap
//!
//! ## Example
//!
//! ```rust,no_run
//! use nutriscore_server::config::ServerConfig;
//! use nutriscore_server::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::load(config)?);
//!     nutriscore_server::server::run(resources).await
//! }
//! ```

/// Configuration management
pub mod config;

/// Logging configuration and initialization
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Shared state handed to route handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Error types and HTTP error envelope
pub use nutriscore_core::errors;

/// Application constants
pub use nutriscore_core::constants;

/// Domain models
pub use nutriscore_core::models;

/// Scoring engine
pub use nutriscore_intelligence as intelligence;
