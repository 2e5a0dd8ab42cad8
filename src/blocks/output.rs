//! RenderResult — the output produced for one content node.
//!
//! DESIGN
//! ======
//! Rendering produces a plain element tree rather than strings, so tests can
//! compare output structurally and the JSON API can serialize the tree as-is.
//! Every result root carries the source node's identifier; `to_html` emits it
//! as a `data-block-id` attribute so the visual-editing overlay can correlate
//! DOM back to CMS blocks. Unresolvable blocks become a visibly distinct
//! fallback `<div>` instead of an error.

use serde::Serialize;

/// Tags that never carry children and self-close in HTML output.
const VOID_TAGS: &[&str] = &["img", "hr", "br"];

/// Class name marking fallback placeholders. The page shell styles it
/// visibly in draft mode and hides it in published mode.
pub const FALLBACK_CLASS: &str = "block-fallback";

// =============================================================================
// TYPES
// =============================================================================

/// The rendered output for one content node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RenderResult {
    /// The node resolved to a registered component and rendered normally.
    Rendered {
        /// Source node identifier, attached to the root tag.
        block_id: String,
        root: Element,
    },
    /// The node's discriminator did not resolve; a placeholder stands in.
    Fallback {
        /// Source node identifier (may be empty for malformed nodes).
        block_id: String,
        /// The discriminator that failed to resolve, kept for diagnostics.
        component: String,
    },
}

/// One HTML element in a render tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Child>,
}

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Child {
    /// Escaped text content.
    Text(String),
    /// A nested element belonging to the same block.
    Element(Element),
    /// A nested block's own render result (keeps its `data-block-id` root).
    Block(RenderResult),
}

// =============================================================================
// BUILDERS
// =============================================================================

impl Element {
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self { tag, attrs: Vec::new(), children: Vec::new() }
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    #[must_use]
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.children.push(Child::Text(content.into()));
        self
    }

    #[must_use]
    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Child::Element(element));
        self
    }

    /// Append rendered nested blocks as children, preserving order.
    #[must_use]
    pub fn blocks<'a>(mut self, results: impl IntoIterator<Item = &'a RenderResult>) -> Self {
        for result in results {
            self.children.push(Child::Block(result.clone()));
        }
        self
    }
}

impl RenderResult {
    #[must_use]
    pub fn rendered(block_id: impl Into<String>, root: Element) -> Self {
        Self::Rendered { block_id: block_id.into(), root }
    }

    #[must_use]
    pub fn fallback(block_id: impl Into<String>, component: impl Into<String>) -> Self {
        Self::Fallback { block_id: block_id.into(), component: component.into() }
    }

    /// Source node identifier attached to this result's root.
    #[must_use]
    pub fn block_id(&self) -> &str {
        match self {
            Self::Rendered { block_id, .. } | Self::Fallback { block_id, .. } => block_id,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

// =============================================================================
// HTML OUTPUT
// =============================================================================

impl RenderResult {
    /// Serialize the render tree to an HTML fragment.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Rendered { block_id, root } => root.write_html(out, Some(block_id)),
            Self::Fallback { block_id, component } => {
                out.push_str("<div");
                write_attr(out, "class", FALLBACK_CLASS);
                if !block_id.is_empty() {
                    write_attr(out, "data-block-id", block_id);
                }
                if !component.is_empty() {
                    write_attr(out, "data-block-component", component);
                }
                out.push('>');
                out.push_str("Unknown block");
                if !component.is_empty() {
                    out.push_str(": ");
                    out.push_str(&escape_text(component));
                }
                out.push_str("</div>");
            }
        }
    }
}

impl Element {
    fn write_html(&self, out: &mut String, block_id: Option<&str>) {
        out.push('<');
        out.push_str(self.tag);
        if let Some(id) = block_id {
            if !id.is_empty() {
                write_attr(out, "data-block-id", id);
            }
        }
        for (name, value) in &self.attrs {
            write_attr(out, name, value);
        }
        if VOID_TAGS.contains(&self.tag) {
            out.push_str(" />");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Child::Text(text) => out.push_str(&escape_text(text)),
                Child::Element(element) => element.write_html(out, None),
                Child::Block(result) => result.write_html(out),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

/// Escape text content for HTML.
#[must_use]
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value for HTML (double-quoted context).
#[must_use]
pub fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
