pub mod api;
pub mod models;
pub mod services;

use std::env;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::AppState;
use services::{HttpParaphraseClient, Humanizer};

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Initialize console logging; RUST_LOG overrides the default level.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer().with_writer(std::io::stdout).with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// Server entry point: build the pipeline, bind and serve until ctrl-c.
pub async fn run() -> anyhow::Result<()> {
    init_logging();
    info!("=== Humanizer Started ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let listen_addr =
        env::var("HUMANIZER_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

    let humanizer = Humanizer::new(HttpParaphraseClient::new());
    let state = Arc::new(AppState::new(humanizer));
    let app = api::build_router(state);

    let listener = TcpListener::bind(&listen_addr).await?;
    info!(%listen_addr, "humanizer server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("=== Humanizer Exited ===");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to capture Ctrl+C signal");
    }
}
