//! Future MD Academy site server
//!
//! Axum-based server hosting the WASM landing page and relaying
//! consultation requests to the external form processor.

mod config;
mod handlers;
mod relay;
mod state;

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{health_check, submit_contact};
use crate::relay::HttpContactRelay;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    let state = match config.form_endpoint.as_deref() {
        Some(endpoint) => {
            tracing::info!(
                "✓ Contact relay -> {} (timeout {}s)",
                endpoint,
                config.form_timeout.as_secs()
            );
            AppState::with_relay(Arc::new(HttpContactRelay::new(endpoint, config.form_timeout)?))
        }
        None => {
            tracing::warn!("⚠ FORM_ENDPOINT not set - contact form disabled");
            AppState::default()
        }
    };

    if !config.static_dir.join("index.html").exists() {
        tracing::warn!(
            "⚠ No index.html in {} - build the frontend with trunk first",
            config.static_dir.display()
        );
    }

    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🎓 academy-server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  POST /api/contact  - Consultation request");
    tracing::info!("  GET  /*            - Landing page ({})", config.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router
pub fn router(state: AppState, static_dir: &Path) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let site = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/contact", post(submit_contact))
        .fallback_service(site)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
