//! Block renderer — recursive dispatch from content nodes to rendered output.
//!
//! DESIGN
//! ======
//! Rendering is a pure, synchronous tree transformation. For each node the
//! renderer resolves the discriminator against the registry, builds a props
//! map (scalar fields pass through, nested blocks are rendered first and
//! substituted), and invokes the resolved renderer once. Resolution failures
//! are local: the failing node becomes a fallback placeholder and siblings
//! render normally. A depth guard bounds recursion so a cyclic or absurdly
//! deep tree degrades to fallbacks instead of exhausting the stack; cyclic
//! input remains a precondition violation, not a supported case.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::node::{ContentNode, FieldValue};
use super::output::RenderResult;
use super::registry::Registry;

/// Default recursion depth limit. CMS page trees are a handful of levels
/// deep in practice; anything near this limit is broken content.
pub const DEFAULT_MAX_DEPTH: usize = 64;

// =============================================================================
// PROPS
// =============================================================================

/// One value in a props map, after nested blocks have been rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// A primitive field, passed through unchanged.
    Scalar(Value),
    /// A single nested block, already rendered.
    Block(Box<RenderResult>),
    /// A sequence of nested blocks, already rendered, order preserved.
    Blocks(Vec<RenderResult>),
}

/// Props handed to a component renderer: the node's fields by name, with
/// nested content nodes replaced by their render results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    values: BTreeMap<String, PropValue>,
}

impl Props {
    pub fn insert(&mut self, name: impl Into<String>, value: PropValue) {
        self.values.insert(name.into(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.values.get(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rendered nested blocks under `name`. A single-block field yields one
    /// element; a missing or scalar field yields none.
    #[must_use]
    pub fn children(&self, name: &str) -> Vec<&RenderResult> {
        match self.values.get(name) {
            Some(PropValue::Block(result)) => vec![result],
            Some(PropValue::Blocks(results)) => results.iter().collect(),
            Some(PropValue::Scalar(_)) | None => Vec::new(),
        }
    }

    /// The single rendered block under `name`, if the field holds exactly one.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&RenderResult> {
        match self.values.get(name) {
            Some(PropValue::Block(result)) => Some(result),
            Some(PropValue::Blocks(results)) if results.len() == 1 => results.first(),
            _ => None,
        }
    }

    /// Decode the scalar fields into a typed struct via serde.
    ///
    /// Lenient: fields that fail to decode fall back to the struct default,
    /// with a debug log for developer visibility. Components therefore parse
    /// their inputs once, up front, and render from typed data.
    #[must_use]
    pub fn fields<T: DeserializeOwned + Default>(&self) -> T {
        let mut scalars = serde_json::Map::new();
        for (name, value) in &self.values {
            if let PropValue::Scalar(raw) = value {
                scalars.insert(name.clone(), raw.clone());
            }
        }
        match serde_json::from_value(Value::Object(scalars)) {
            Ok(fields) => fields,
            Err(e) => {
                tracing::debug!(error = %e, "scalar field decode failed, using defaults");
                T::default()
            }
        }
    }
}

// =============================================================================
// RENDERER
// =============================================================================

/// Recursive block renderer over a read-only [`Registry`].
pub struct Renderer<'a> {
    registry: &'a Registry,
    max_depth: usize,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry, max_depth: DEFAULT_MAX_DEPTH }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Render one content node tree.
    ///
    /// Never fails: unresolvable nodes become fallback placeholders and the
    /// rest of the tree renders normally.
    #[must_use]
    pub fn render(&self, node: &ContentNode) -> RenderResult {
        self.render_at(node, 0)
    }

    fn render_at(&self, node: &ContentNode, depth: usize) -> RenderResult {
        if depth >= self.max_depth {
            tracing::warn!(
                id = %node.id,
                component = %node.component,
                max_depth = self.max_depth,
                "content tree exceeds depth limit, rendering fallback"
            );
            return RenderResult::fallback(&node.id, &node.component);
        }

        // Missing identifier or discriminator: malformed, same treatment as
        // an unknown component.
        if node.id.is_empty() || node.component.is_empty() {
            tracing::warn!(
                id = %node.id,
                component = %node.component,
                "malformed content node, rendering fallback"
            );
            return RenderResult::fallback(&node.id, &node.component);
        }

        let Some(render_fn) = self.registry.resolve(&node.component) else {
            tracing::warn!(
                id = %node.id,
                component = %node.component,
                "unresolved block component, rendering fallback"
            );
            return RenderResult::fallback(&node.id, &node.component);
        };

        let props = self.build_props(node, depth);
        render_fn(&node.id, &props)
    }

    /// Build the props map for one node: every field appears under its own
    /// name, with nested blocks rendered depth-first.
    fn build_props(&self, node: &ContentNode, depth: usize) -> Props {
        let mut props = Props::default();
        for (name, value) in &node.fields {
            let prop = match value {
                FieldValue::Scalar(raw) => PropValue::Scalar(raw.clone()),
                FieldValue::Node(child) => {
                    PropValue::Block(Box::new(self.render_at(child, depth + 1)))
                }
                FieldValue::Nodes(children) => PropValue::Blocks(
                    children
                        .iter()
                        .map(|child| self.render_at(child, depth + 1))
                        .collect(),
                ),
            };
            props.insert(name.clone(), prop);
        }
        props
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
