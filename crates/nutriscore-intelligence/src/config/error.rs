// ABOUTME: Configuration error types for scoring engine validation and table loading
// ABOUTME: Defines error variants for invalid ranges, parse failures, and malformed standard tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for scoring engine validation.

use nutriscore_core::errors::AppError;
use std::io;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range bounds are inverted or empty
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Reference standard table is malformed
    #[error("Invalid standard table {table}: {reason}")]
    InvalidTable {
        /// Table name (`std_male`, `std_female`)
        table: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Reference standard file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}
