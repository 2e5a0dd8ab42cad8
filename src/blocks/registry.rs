//! Component registry — the closed mapping from block type to renderer.
//!
//! DESIGN
//! ======
//! The block vocabulary is a closed enum, so "is every known block wired to
//! a renderer" is a startup-time question answered by `validate`, not a
//! runtime surprise. Genuinely unknown CMS discriminators still happen (a
//! content editor ships a component the deploy does not know about) and stay
//! a runtime concern: `resolve` returns `None` and the renderer substitutes
//! a fallback. The registry is built once at startup, then read-only.

use std::collections::HashMap;

use super::render::Props;
use crate::blocks::RenderResult;
use crate::error::ErrorCode;

// =============================================================================
// BLOCK KIND
// =============================================================================

/// The closed set of block types this service knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Page,
    Section,
    Grid,
    Card,
    Hero,
    Heading,
    Text,
    Button,
    Image,
    Divider,
}

impl BlockKind {
    /// Every known kind, in registration order.
    pub const ALL: &'static [BlockKind] = &[
        BlockKind::Page,
        BlockKind::Section,
        BlockKind::Grid,
        BlockKind::Card,
        BlockKind::Hero,
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Button,
        BlockKind::Image,
        BlockKind::Divider,
    ];

    /// The discriminator string the CMS uses for this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Page => "page",
            BlockKind::Section => "section",
            BlockKind::Grid => "grid",
            BlockKind::Card => "card",
            BlockKind::Hero => "hero",
            BlockKind::Heading => "heading",
            BlockKind::Text => "text",
            BlockKind::Button => "button",
            BlockKind::Image => "image",
            BlockKind::Divider => "divider",
        }
    }

    /// Resolve a CMS discriminator string to a known kind.
    #[must_use]
    pub fn from_discriminator(raw: &str) -> Option<Self> {
        BlockKind::ALL.iter().copied().find(|kind| kind.name() == raw)
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// A component renderer: source node id plus constructed props, out comes
/// the rendered tree for that block.
pub type RenderFn = fn(&str, &Props) -> RenderResult;

/// Startup-populated, read-only mapping from [`BlockKind`] to renderer.
pub struct Registry {
    entries: HashMap<BlockKind, RenderFn>,
}

/// Errors from registry validation at startup.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// One or more known block kinds have no registered renderer.
    #[error("no renderer registered for block kinds: {0}")]
    MissingRenderers(String),
}

impl ErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRenderers(_) => "E_MISSING_RENDERERS",
        }
    }
}

impl Registry {
    /// An empty registry. Callers register renderers before first render.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// A registry wired to the full default catalog.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        super::catalog::register_defaults(&mut registry);
        registry
    }

    /// Register the renderer for one block kind. Startup only; the registry
    /// is treated as read-only once rendering begins.
    pub fn register(&mut self, kind: BlockKind, renderer: RenderFn) {
        self.entries.insert(kind, renderer);
    }

    /// Pure lookup from discriminator string to renderer. Empty or unknown
    /// discriminators resolve to `None`.
    #[must_use]
    pub fn resolve(&self, discriminator: &str) -> Option<RenderFn> {
        let kind = BlockKind::from_discriminator(discriminator)?;
        self.entries.get(&kind).copied()
    }

    /// Verify every known block kind has a renderer.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingRenderers`] naming the unwired kinds.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let missing: Vec<&str> = BlockKind::ALL
            .iter()
            .filter(|kind| !self.entries.contains_key(*kind))
            .map(|kind| kind.name())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::MissingRenderers(missing.join(", ")))
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
