//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the completion API and serves the built UI bundle from
//! the same origin, so the page can call `/api/completion` without CORS.
//! Unknown paths fall back to the bundle's `index.html`.

pub mod completion;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::Level;

use crate::state::AppState;

/// API routes. `/api/openai` is the path earlier page builds posted to.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/completion", post(completion::handle_completion))
        .route("/api/openai", post(completion::handle_completion))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: API routes plus the static UI bundle.
///
/// Request spans only. Handler failures are logged by the handler itself,
/// so the trace layer reports 5xx at DEBUG.
pub fn app(state: AppState, client_dist_dir: &Path) -> Router {
    let ui = ServeDir::new(client_dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(client_dist_dir.join("index.html")));

    api_routes(state)
        .fallback_service(ui)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http().on_failure(DefaultOnFailure::new().level(Level::DEBUG)))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
