//! Bluvia - groundwater heavy-metal prediction service
//!
//! # Usage
//!
//! ```bash
//! # Serve on the default address (0.0.0.0:8080)
//! cargo run --release
//!
//! # Reproducible draws
//! ./bluvia --seed 42
//!
//! # Explicit config file
//! ./bluvia --config ./bluvia.toml --addr 127.0.0.1:9000
//! ```
//!
//! # Environment Variables
//!
//! - `BLUVIA_CONFIG`: Path to a TOML config file
//! - `BLUVIA_SERVER_ADDR`: Bind address override
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use bluvia::api::{create_app, ApiState};
use bluvia::config::{self, ServiceConfig};
use bluvia::sites::SiteRegistry;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "bluvia")]
#[command(about = "Bluvia groundwater heavy-metal prediction service")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file (overrides BLUVIA_CONFIG and ./bluvia.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long, env = "BLUVIA_SERVER_ADDR")]
    addr: Option<String>,

    /// Seed the prediction RNG for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

/// Resolve the service config from CLI, env and file, with CLI overrides applied.
fn resolve_config(args: &CliArgs) -> Result<ServiceConfig> {
    let mut config = match &args.config {
        Some(path) => ServiceConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ServiceConfig::load(),
    };

    if let Some(addr) = &args.addr {
        config.server.addr.clone_from(addr);
    }
    if args.seed.is_some() {
        config.prediction.seed = args.seed;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

// ============================================================================
// HTTP Server
// ============================================================================

async fn run_server(config: &ServiceConfig, cancel: CancellationToken) -> Result<()> {
    let state = ApiState::from_config(config);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.server.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.addr))?;
    info!(addr = %config.server.addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
            info!("[HttpServer] Received shutdown signal");
        })
        .await
        .context("HTTP server error")?;

    info!("[HttpServer] Graceful shutdown complete");
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let service_config = resolve_config(&args)?;
    config::init(service_config);
    let service_config = config::get();

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  BLUVIA - Groundwater Heavy-Metal Prediction");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!(
        sites = SiteRegistry::arizona().len(),
        radius_km = service_config.prediction.match_radius_km,
        seeded = service_config.prediction.seed.is_some(),
        "Prediction engine ready"
    );

    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            return;
        }
        info!("Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    run_server(service_config, cancel_token).await?;

    info!("Bluvia shutdown complete");
    Ok(())
}
