// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses listen address, standards directory, CORS origins and HTTP limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{env_config, limits, ports};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::info;

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: IpAddr,
    /// Deployment environment
    pub environment: Environment,
    /// Directory with replacement reference standard tables
    pub standards_dir: Option<PathBuf>,
    /// Allowed CORS origins (`*` for any)
    pub cors_allowed_origins: Vec<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum request body size in bytes
    pub max_request_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            host: IpAddr::from([0, 0, 0, 0]),
            environment: Environment::Development,
            standards_dir: None,
            cors_allowed_origins: vec!["*".to_owned()],
            request_timeout_secs: limits::DEFAULT_REQUEST_TIMEOUT_SECS,
            max_request_body_bytes: limits::DEFAULT_MAX_REQUEST_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or address variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or(env_config::HTTP_PORT, &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_var_or(env_config::HOST, "0.0.0.0")
                .parse()
                .context("Invalid HOST value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            standards_dir: env::var(env_config::STANDARDS_DIR)
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            cors_allowed_origins: parse_origins(&env_var_or(
                env_config::CORS_ALLOWED_ORIGINS,
                "*",
            )),
            request_timeout_secs: env_var_or(
                env_config::REQUEST_TIMEOUT_SECS,
                &limits::DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid REQUEST_TIMEOUT_SECS value")?,
            max_request_body_bytes: env_var_or(
                env_config::MAX_REQUEST_BODY_BYTES,
                &limits::DEFAULT_MAX_REQUEST_BODY_BYTES.to_string(),
            )
            .parse()
            .context("Invalid MAX_REQUEST_BODY_BYTES value")?,
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Socket address to bind
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Whether any origin is allowed
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|origin| origin == "*")
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "NutriScore Server Configuration:\n\
             - Listen: {}\n\
             - Environment: {}\n\
             - Reference Standards: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Max Body: {} bytes",
            self.socket_addr(),
            self.environment,
            self.standards_dir
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |dir| dir.display().to_string()),
            self.cors_allowed_origins.join(", "),
            self.request_timeout_secs,
            self.max_request_body_bytes,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://localhost:3000, https://app.example.com ,"),
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }

    #[test]
    fn test_summary_mentions_built_in_tables() {
        let summary = ServerConfig::default().summary();
        assert!(summary.contains("0.0.0.0:8081"));
        assert!(summary.contains("built-in"));
    }
}
