use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::cms::PageSource;
use crate::state::test_helpers::{test_app_state, test_app_state_with_cms};

// =============================================================================
// MOCK CMS
// =============================================================================

/// Serves one fixed page for any slug, or a fixed error.
struct MockCms {
    response: Result<PageRecord, fn(&str) -> CmsError>,
}

impl MockCms {
    fn with_page(content: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(PageRecord { slug: "home".into(), title: Some("Home".into()), content }),
        })
    }

    fn with_error(make: fn(&str) -> CmsError) -> Arc<Self> {
        Arc::new(Self { response: Err(make) })
    }
}

#[async_trait::async_trait]
impl PageSource for MockCms {
    async fn fetch_page(&self, slug: &str, _version: Version) -> Result<PageRecord, CmsError> {
        match &self.response {
            Ok(page) => Ok(page.clone()),
            Err(make) => Err(make(slug)),
        }
    }
}

fn page_content() -> serde_json::Value {
    json!({
        "id": "root", "component": "page", "title": "Home",
        "body": [
            {"id": "b1", "component": "button", "label": "Go"},
            {"id": "b2", "component": "widget_from_the_future"}
        ]
    })
}

// =============================================================================
// HTML ROUTE
// =============================================================================

#[tokio::test]
async fn page_html_renders_document() {
    let state = test_app_state_with_cms(MockCms::with_page(page_content()));
    let Html(html) = get_page_html(
        State(state),
        Path("home".into()),
        Query(PageQuery { version: None }),
    )
    .await
    .unwrap();

    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<title>Home</title>"));
    assert!(html.contains("data-block-id=\"root\""));
    assert!(html.contains("data-block-id=\"b1\""));
    // published mode hides fallbacks
    assert!(html.contains(".block-fallback{display:none;}"));
}

#[tokio::test]
async fn page_html_draft_marks_fallbacks_visibly() {
    let state = test_app_state_with_cms(MockCms::with_page(page_content()));
    let Html(html) = get_page_html(
        State(state),
        Path("home".into()),
        Query(PageQuery { version: Some("draft".into()) }),
    )
    .await
    .unwrap();

    assert!(html.contains("outline:2px dashed"));
    assert!(html.contains("data-block-component=\"widget_from_the_future\""));
}

#[tokio::test]
async fn page_html_rejects_bad_version() {
    let state = test_app_state_with_cms(MockCms::with_page(page_content()));
    let err = get_page_html(
        State(state),
        Path("home".into()),
        Query(PageQuery { version: Some("nightly".into()) }),
    )
    .await
    .unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn page_html_without_cms_is_unavailable() {
    let state = test_app_state();
    let err = get_page_html(
        State(state),
        Path("home".into()),
        Query(PageQuery { version: None }),
    )
    .await
    .unwrap_err();
    assert_eq!(err, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn page_html_maps_cms_errors() {
    let not_found = |slug: &str| CmsError::PageNotFound { slug: slug.to_owned() };
    let state = test_app_state_with_cms(MockCms::with_error(not_found));
    let err = get_page_html(
        State(state),
        Path("gone".into()),
        Query(PageQuery { version: None }),
    )
    .await
    .unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);

    let upstream = |_: &str| CmsError::Response { status: 500, body: String::new() };
    let state = test_app_state_with_cms(MockCms::with_error(upstream));
    let err = get_page_html(
        State(state),
        Path("home".into()),
        Query(PageQuery { version: None }),
    )
    .await
    .unwrap_err();
    assert_eq!(err, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn page_html_rejects_non_object_content() {
    let state = test_app_state_with_cms(MockCms::with_page(json!("not a node")));
    let err = get_page_html(
        State(state),
        Path("home".into()),
        Query(PageQuery { version: None }),
    )
    .await
    .unwrap_err();
    assert_eq!(err, StatusCode::BAD_GATEWAY);
}

// =============================================================================
// JSON ROUTES
// =============================================================================

#[tokio::test]
async fn page_json_returns_render_tree() {
    let state = test_app_state_with_cms(MockCms::with_page(page_content()));
    let Json(tree) = get_page_json(
        State(state),
        Path("home".into()),
        Query(PageQuery { version: None }),
    )
    .await
    .unwrap();

    assert_eq!(tree.block_id(), "root");
    assert!(!tree.is_fallback());
}

#[tokio::test]
async fn render_raw_works_without_cms() {
    let state = test_app_state();
    let Json(response) = render_raw(
        State(state),
        Json(json!({"id": "1", "component": "text", "text": "inline"})),
    )
    .await
    .unwrap();

    assert!(response.html.contains("inline"));
    assert_eq!(response.tree.block_id(), "1");
}

#[tokio::test]
async fn render_raw_rejects_non_object_body() {
    let state = test_app_state();
    let err = render_raw(State(state), Json(json!([1, 2])))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// SHELL
// =============================================================================

#[test]
fn html_document_escapes_title() {
    let doc = html_document("a<b>", Version::Published, "<main></main>");
    assert!(doc.contains("<title>a&lt;b&gt;</title>"));
}
