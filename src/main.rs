//! Severance Engine HTTP server.
//!
//! Reads the rule set from `SEVERANCE_CONFIG_DIR` (default `./config/clt`)
//! and listens on `SEVERANCE_BIND_ADDR` (default `127.0.0.1:3000`). Log
//! verbosity follows `RUST_LOG`.

use std::error::Error;

use severance_engine::api::{AppState, create_router};
use severance_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/clt";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("SEVERANCE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        std::env::var("SEVERANCE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %listener.local_addr()?, "severance-engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
