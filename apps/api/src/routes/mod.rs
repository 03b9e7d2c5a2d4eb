pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

/// Multipart framing on top of the raw resume bytes.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_resume_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/ai/recommendations",
            get(handlers::handle_recommendations),
        )
        .route(
            "/api/ai/analyze-resume",
            post(handlers::handle_analyze_resume),
        )
        .route(
            "/api/ai/generate-description",
            post(handlers::handle_generate_description),
        )
        .route("/api/ai/match-score", post(handlers::handle_match_score))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
