//! Axum router for the preview server.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::generate::NOT_FOUND_FILE;
use crate::handlers;
use crate::state::PreviewState;

/// Build the preview router.
///
/// - `GET /` -- list rendered from `q`, `type`, `sort`, `per_page`, `page`
/// - `GET /healthz` -- liveness probe
/// - anything else -- static files from the site root, `404.html` with a
///   404 status when nothing matches
pub fn build_router(state: Arc<PreviewState>) -> Router {
    let static_files = ServeDir::new(&state.root)
        .not_found_service(ServeFile::new(state.root.join(NOT_FOUND_FILE)));

    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(|| async { "ok" }))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
