// ABOUTME: Server binary for the Training Notebook API
// ABOUTME: Loads configuration, runs migrations, and serves until interrupted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use training_notebook::{
    auth::AuthManager,
    config::ServerConfig,
    database::Database,
    server::{self, ServerResources},
};

/// Training Notebook API server
#[derive(Parser)]
#[command(name = "training-notebook", version, about)]
struct Args {
    /// Port to bind, overriding TRAINING_HTTP_PORT
    #[arg(long)]
    port: Option<u16>,

    /// Database URL, overriding TRAINING_DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(url) = args.database_url {
        config.database_url = url;
    }

    info!(database_url = %config.database_url, "starting training notebook server");

    let database = Database::new(&config.database_url).await?;
    let auth_manager = AuthManager::new(&config.jwt_secret, config.session_ttl_secs);

    let resources = Arc::new(ServerResources::new(database, auth_manager, config));
    server::serve(resources).await?;

    Ok(())
}
