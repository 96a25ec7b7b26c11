mod config;
mod handlers;
mod services;
mod types;

use anyhow::Context;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing_subscriber::EnvFilter;

use config::Config;
use handlers::{get_log_blocks, redirect_to_viewer};

pub fn router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/logblocks", get(get_log_blocks))
        .route("/log", get(redirect_to_viewer))
        .fallback_service(ServeDir::new(config.static_dir()))
        .layer(CorsLayer::permissive())
        .with_state(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("log_server=info")),
        )
        .init();

    let config = Arc::new(Config::from_env());
    let app = router(config.clone());

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address))?;

    tracing::info!(
        "Serving {} on http://{}",
        config.log_file().display(),
        config.bind_address
    );
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
