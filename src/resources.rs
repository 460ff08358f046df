// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Holds the immutable reference standard store and the scoring configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use nutriscore_intelligence::{IntelligenceConfig, StandardStore};
use std::sync::Arc;
use tracing::info;

/// Read-only state shared by all request handlers
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Scoring coefficients and weights
    pub intelligence: Arc<IntelligenceConfig>,
    /// Reference standard tables
    pub standards: Arc<StandardStore>,
}

impl ServerResources {
    /// Create resources from already-built parts
    #[must_use]
    pub fn new(
        config: ServerConfig,
        intelligence: IntelligenceConfig,
        standards: StandardStore,
    ) -> Self {
        Self {
            config: Arc::new(config),
            intelligence: Arc::new(intelligence),
            standards: Arc::new(standards),
        }
    }

    /// Load the scoring configuration and reference standards for a server config
    ///
    /// Standards come from `config.standards_dir` when set, otherwise from the
    /// built-in tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference standard tables fail to load or validate
    pub fn load(config: ServerConfig) -> Result<Self> {
        let intelligence = IntelligenceConfig::global().clone();
        let standards = StandardStore::load(
            config.standards_dir.as_deref(),
            &intelligence.scoring.adequacy.nutrients,
        )
        .context("Failed to load nutrient reference standards")?;

        info!(
            source = config
                .standards_dir
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |dir| dir.display().to_string()),
            "Reference standards ready"
        );

        Ok(Self::new(config, intelligence, standards))
    }
}
