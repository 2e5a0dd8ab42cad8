//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the startup-validated component registry (read-only for the life of
//! the process) and an optional CMS client. A missing CMS configuration is
//! degraded operation, not a startup failure: the raw-render preview endpoint
//! keeps working without it.

use std::sync::Arc;

use crate::blocks::{DEFAULT_MAX_DEPTH, Registry};
use crate::cms::PageSource;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    /// Component registry, validated at startup, read-only afterwards.
    pub registry: Arc<Registry>,
    /// Optional CMS client. `None` if CMS env vars are not configured.
    pub cms: Option<Arc<dyn PageSource>>,
    /// Recursion depth limit for the block renderer.
    pub max_depth: usize,
}

impl AppState {
    #[must_use]
    pub fn new(registry: Registry, cms: Option<Arc<dyn PageSource>>) -> Self {
        Self { registry: Arc::new(registry), cms, max_depth: DEFAULT_MAX_DEPTH }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
