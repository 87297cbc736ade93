pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::assist::handlers as assist;
use crate::ingest::handlers as ingest;
use crate::state::AppState;

/// Headroom over the upload cap for multipart boundaries and JSON framing.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + BODY_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis/compare", post(analysis::handle_compare))
        .route(
            "/api/v1/analysis/standalone",
            post(analysis::handle_standalone),
        )
        // Assist API (LLM-backed)
        .route("/api/v1/domains/detect", post(assist::handle_detect_domain))
        .route("/api/v1/cv/optimize", post(assist::handle_optimize))
        // Documents API
        .route("/api/v1/documents/extract", post(ingest::handle_extract))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
