//! Page rendering routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use serde::{Deserialize, Serialize};

use crate::blocks::{ContentNode, RenderResult, Renderer};
use crate::cms::{CmsError, PageRecord, Version};
use crate::error::ErrorCode;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PageQuery {
    pub version: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub html: String,
    pub tree: RenderResult,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /pages/:slug` — fetch a page from the CMS and render it as a full
/// HTML document. `?version=draft` fetches the draft copy and styles
/// fallback placeholders visibly for content editors.
pub async fn get_page_html(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, StatusCode> {
    let (version, page, result) = fetch_and_render(&state, &slug, &query).await?;

    let title = page.title.as_deref().unwrap_or(&page.slug);
    Ok(Html(html_document(title, version, &result.to_html())))
}

/// `GET /api/pages/:slug` — fetch a page from the CMS and return the render
/// tree as JSON, for the visual-editing overlay and other structured clients.
pub async fn get_page_json(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<RenderResult>, StatusCode> {
    let (_, _, result) = fetch_and_render(&state, &slug, &query).await?;
    Ok(Json(result))
}

/// `POST /api/render` — render a raw content-node tree from the request
/// body. Works without a configured CMS client; used by preview tooling.
pub async fn render_raw(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<RenderResponse>, StatusCode> {
    let node = decode_node(&body)?;
    let tree = Renderer::new(&state.registry)
        .with_max_depth(state.max_depth)
        .render(&node);
    Ok(Json(RenderResponse { html: tree.to_html(), tree }))
}

// =============================================================================
// SHARED STEPS
// =============================================================================

async fn fetch_and_render(
    state: &AppState,
    slug: &str,
    query: &PageQuery,
) -> Result<(Version, PageRecord, RenderResult), StatusCode> {
    let Some(version) = Version::from_param(query.version.as_deref()) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let Some(cms) = &state.cms else {
        tracing::warn!(%slug, "page requested but no CMS client configured");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let page = cms
        .fetch_page(slug, version)
        .await
        .map_err(cms_error_to_status)?;

    let node = decode_node_from_cms(slug, &page.content)?;
    let result = Renderer::new(&state.registry)
        .with_max_depth(state.max_depth)
        .render(&node);

    Ok((version, page, result))
}

fn decode_node(raw: &serde_json::Value) -> Result<ContentNode, StatusCode> {
    ContentNode::from_value(raw).map_err(|e| {
        tracing::warn!(error = %e, "render request body is not a content node");
        StatusCode::UNPROCESSABLE_ENTITY
    })
}

fn decode_node_from_cms(slug: &str, raw: &serde_json::Value) -> Result<ContentNode, StatusCode> {
    ContentNode::from_value(raw).map_err(|e| {
        tracing::warn!(%slug, error = %e, "CMS page content is not a content node");
        StatusCode::BAD_GATEWAY
    })
}

fn cms_error_to_status(err: CmsError) -> StatusCode {
    tracing::warn!(
        code = err.error_code(),
        retryable = err.retryable(),
        error = %err,
        "CMS fetch failed"
    );
    match err {
        CmsError::PageNotFound { .. } => StatusCode::NOT_FOUND,
        CmsError::Request(_) | CmsError::Response { .. } | CmsError::Parse(_) => {
            StatusCode::BAD_GATEWAY
        }
        CmsError::ConfigParse(_) | CmsError::MissingToken { .. } | CmsError::HttpClientBuild(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

// =============================================================================
// HTML SHELL
// =============================================================================

/// Wrap a rendered fragment in a minimal HTML document. Draft documents
/// outline fallback placeholders so editors notice broken mappings;
/// published documents hide them.
fn html_document(title: &str, version: Version, body: &str) -> String {
    let fallback_css = match version {
        Version::Draft => {
            ".block-fallback{outline:2px dashed #c62828;padding:8px;color:#c62828;}"
        }
        Version::Published => ".block-fallback{display:none;}",
    };
    format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>{}</title>\
         <style>{fallback_css}</style></head>\n<body>{body}</body></html>\n",
        crate::blocks::output::escape_text(title)
    )
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
