//! HTTP server for the Tip Pool Engine.
//!
//! Environment:
//! - `TIP_POOL_LOG`: tracing filter directives (default `info`)
//! - `TIP_POOL_CONFIG`: directory containing `policy.yaml` (default: built-in policy)
//! - `TIP_POOL_ADDR`: listen address (default `127.0.0.1:3000`)

use tip_pool_engine::api::{AppState, create_router};
use tip_pool_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("TIP_POOL_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received interrupt, shutting down gracefully...");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = match std::env::var("TIP_POOL_CONFIG") {
        Ok(dir) => {
            let loader = ConfigLoader::load(&dir)?;
            info!(config_dir = %dir, venue = %loader.venue().name, "Loaded pay policy");
            loader
        }
        Err(_) => {
            info!("TIP_POOL_CONFIG not set, using built-in pay policy");
            ConfigLoader::default()
        }
    };

    let addr = std::env::var("TIP_POOL_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, version = env!("CARGO_PKG_VERSION"), "Tip pool server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
