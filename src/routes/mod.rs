//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the page-rendering endpoints under a single Axum
//! router: HTML documents at `/pages/:slug`, the structured render tree at
//! `/api/pages/:slug`, and a CMS-less raw-render endpoint for preview
//! tooling at `/api/render`.

pub mod pages;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/pages/{slug}", get(pages::get_page_html))
        .route("/api/pages/{slug}", get(pages::get_page_json))
        .route("/api/render", post(pages::render_raw))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}
