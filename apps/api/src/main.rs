mod ats_client;
mod board;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ats_client::HttpStageGateway;
use crate::board::tracker::TransitionTracker;
use crate::board::Board;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Board API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the ATS gateway
    let gateway = Arc::new(HttpStageGateway::new(
        &config.ats_base_url,
        config.ats_api_token.clone(),
    ));
    info!("ATS gateway initialized (base: {})", config.ats_base_url);

    // Initialize the transition tracker
    let tracker = Arc::new(TransitionTracker::new(Duration::from_millis(
        config.settle_delay_ms,
    )));
    info!("Transition tracker initialized (settle delay: {}ms)", config.settle_delay_ms);

    // The board starts empty; the owner populates it through the refresh
    // endpoints once stages and candidates are known.
    let board = Arc::new(RwLock::new(Board::default()));

    // Build app state
    let state = AppState {
        board,
        tracker,
        gateway,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
