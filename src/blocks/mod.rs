//! Content block rendering.
//!
//! ARCHITECTURE
//! ============
//! The pipeline is decode → dispatch → render. Raw CMS JSON crosses into
//! typed [`ContentNode`] trees exactly once (`node`), the discriminator is
//! resolved against a closed, startup-validated [`Registry`] (`registry`),
//! and the recursive [`Renderer`] (`render`) produces a [`RenderResult`]
//! element tree (`output`) that serializes to HTML or JSON. Unknown block
//! types degrade to per-node fallback placeholders; one broken block never
//! takes down its siblings or the page.

pub mod catalog;
pub mod node;
pub mod output;
pub mod registry;
pub mod render;

pub use node::{ContentNode, FieldValue, NodeError};
pub use output::{Child, Element, RenderResult};
pub use registry::{BlockKind, Registry, RegistryError};
pub use render::{DEFAULT_MAX_DEPTH, PropValue, Props, Renderer};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
