use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::database::{schema, DatabaseManager};
use crate::routes;
use crate::services::CloudinaryStorage;
use crate::state::{AppState, Stores};

#[derive(Parser)]
#[command(name = "taman-pempek-api")]
#[command(about = "Taman Pempek shop backend")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Bind address (overrides HOST)")]
    pub host: Option<String>,

    #[arg(long, global = true, help = "Listen port (overrides PORT)")]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve,

    #[command(about = "Create missing tables and seed the settings row, then exit")]
    Migrate,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Migrate => migrate(config).await,
    }
}

async fn migrate(config: AppConfig) -> anyhow::Result<()> {
    let db = DatabaseManager::connect_lazy(&config.database)?;
    schema::migrate(db.pool()).await?;
    db.close().await;
    Ok(())
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Taman Pempek API in {:?} mode", config.environment);

    let db = DatabaseManager::connect_lazy(&config.database)?;
    if config.database.auto_migrate {
        if let Err(e) = schema::migrate(db.pool()).await {
            tracing::error!("Auto-migration failed, continuing without it: {}", e);
        }
    }

    let storage = CloudinaryStorage::from_config(&config.upload)?;
    let stores = Stores::postgres(db.pool());
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState::new(config, stores, Arc::new(storage), Some(db.clone()))?;
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
