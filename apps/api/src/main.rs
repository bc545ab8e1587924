mod auth;
mod config;
mod errors;
mod extract;
mod routes;
mod scoring;
mod screening;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ScorerKind};
use crate::routes::build_router;
use crate::scoring::{Scorer, SkillOverlapScorer, TfIdfScorer};
use crate::state::AppState;
use crate::storage::Storage;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Shortlist API v{}", env!("CARGO_PKG_VERSION"));

    // Create the data-directory layout
    let storage = Storage::init(&config.data_dir)?;
    info!("Storage initialized under {}", config.data_dir.display());

    // Select the scorer backend (SkillOverlapScorer by default — swap via SCORER)
    let scorer: Arc<dyn Scorer> = match config.scorer {
        ScorerKind::SkillOverlap => Arc::new(SkillOverlapScorer),
        ScorerKind::TfIdf => Arc::new(TfIdfScorer),
    };
    info!("Scorer backend: {}", scorer.backend());

    // Build app state
    let state = AppState {
        config: config.clone(),
        scorer,
        storage,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
