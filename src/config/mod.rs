// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-driven listen address, standards location and HTTP limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the NutriScore server
//!
//! - **Environment**: Server configuration from environment variables
//!
//! Scoring coefficients and weights live in
//! [`nutriscore_intelligence::IntelligenceConfig`].

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, ServerConfig};
