pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::board::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Board API
        .route("/api/v1/board", get(handlers::handle_get_board))
        .route("/api/v1/board/drop", post(handlers::handle_drop))
        // Owner refresh (the only paths that mutate the source of truth)
        .route(
            "/api/v1/board/candidates",
            put(handlers::handle_replace_candidates),
        )
        .route(
            "/api/v1/board/stages",
            put(handlers::handle_replace_stages),
        )
        .with_state(state)
}
