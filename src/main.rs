mod blocks;
mod cms;
mod error;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let max_depth: usize = std::env::var("RENDER_MAX_DEPTH")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(blocks::DEFAULT_MAX_DEPTH);

    let registry = blocks::Registry::with_defaults();
    registry.validate().expect("component registry incomplete");

    // Initialize CMS client (non-fatal: page routes disabled if config missing).
    let cms: Option<Arc<dyn cms::PageSource>> = match cms::CmsClient::from_env() {
        Ok(client) => {
            tracing::info!(base_url = client.base_url(), "CMS client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "CMS client not configured — serving raw render endpoint only");
            None
        }
    };

    let state = state::AppState::new(registry, cms).with_max_depth(max_depth);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "blockserve listening");
    axum::serve(listener, app).await.expect("server failed");
}
