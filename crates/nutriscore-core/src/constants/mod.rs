// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the NutriScore platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Service identity used in structured logs
pub mod service_names {
    /// Service name for the scoring API server
    pub const NUTRISCORE_SERVER: &str = "nutriscore-server";
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
    /// Estimated energy requirement endpoint
    pub const EER: &str = "/EER";
    /// Nutrient reference standard endpoint
    pub const STANDARD: &str = "/standard";
    /// Daily score endpoint
    pub const SCORE: &str = "/score";
    /// Detection-to-intake aggregation endpoint
    pub const INTAKE: &str = "/intake";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Environment variable names
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Directory holding replacement `std_male.json` / `std_female.json`
    pub const STANDARDS_DIR: &str = "NUTRISCORE_STANDARDS_DIR";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Maximum accepted request body in bytes
    pub const MAX_REQUEST_BODY_BYTES: &str = "MAX_REQUEST_BODY_BYTES";
}

/// Default limits for the HTTP layer
pub mod limits {
    /// Default per-request timeout (seconds)
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default maximum request body (1 MiB)
    pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
}

/// Energy density of macronutrients (Atwater factors, kcal per gram)
pub mod energy_density {
    /// Carbohydrate kcal per gram
    pub const CARBOHYDRATE_KCAL_PER_G: f64 = 4.0;
    /// Protein kcal per gram
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Fat kcal per gram
    pub const FAT_KCAL_PER_G: f64 = 9.0;
    /// Trans fat kcal per gram (same density as fat)
    pub const TRANSFAT_KCAL_PER_G: f64 = 9.0;
}
