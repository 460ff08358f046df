// ABOUTME: NutriScore HTTP server binary
// ABOUTME: Loads configuration and reference standards, then serves the scoring API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # NutriScore Server Binary
//!
//! Starts the nutrition scoring API: EER estimation, reference standards,
//! composite daily score and detection-record aggregation.

use anyhow::Result;
use clap::Parser;
use nutriscore_server::{config::ServerConfig, logging, resources::ServerResources, server};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nutriscore-server")]
#[command(about = "NutriScore - daily nutrition adequacy scoring API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Directory with replacement std_male.json / std_female.json tables
    #[arg(long)]
    standards_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(dir) = args.standards_dir {
        config.standards_dir = Some(dir);
    }

    info!("Starting NutriScore server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::load(config)?);

    if let Err(e) = server::run(resources).await {
        error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
