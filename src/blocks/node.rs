//! ContentNode — the typed form of one CMS content block.
//!
//! DESIGN
//! ======
//! `ContentNode::from_value` is the single boundary where untrusted CMS JSON
//! becomes typed data. Decoding is lenient: a node missing its identifier or
//! discriminator still decodes (with empty strings) and is later rendered as
//! a fallback block rather than failing the whole page. Only a non-object
//! root is an error — there is nothing sensible to render at all.

use std::collections::BTreeMap;

use serde_json::Value;

/// Field key carrying the block-type discriminator.
pub const COMPONENT_KEY: &str = "component";

/// Field key carrying the node identifier.
pub const ID_KEY: &str = "id";

/// Alternate identifier key used by some CMS dialects.
pub const UID_KEY: &str = "_uid";

// =============================================================================
// TYPES
// =============================================================================

/// One content block as delivered by the CMS: an identifier, a block-type
/// discriminator, and a bag of named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentNode {
    /// Unique identifier, used to correlate rendered output back to the
    /// source block. Empty when the CMS omitted it (malformed node).
    pub id: String,
    /// Block-type discriminator. Empty when the CMS omitted it.
    pub component: String,
    /// Named fields, in deterministic (sorted) order.
    pub fields: BTreeMap<String, FieldValue>,
}

/// A single field value on a [`ContentNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A primitive or plain-data value passed through to the component.
    Scalar(Value),
    /// A nested content block.
    Node(Box<ContentNode>),
    /// An ordered sequence of nested content blocks.
    Nodes(Vec<ContentNode>),
}

/// Errors from decoding raw CMS JSON into a [`ContentNode`].
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// The root of a content tree must be a JSON object.
    #[error("content node must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

// =============================================================================
// DECODE
// =============================================================================

impl ContentNode {
    /// Decode a raw CMS JSON value into a typed content node.
    ///
    /// Missing `id`/`component` keys decode to empty strings; the renderer
    /// treats such nodes as unresolvable and substitutes a fallback.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::NotAnObject`] if `value` is not a JSON object.
    pub fn from_value(value: &Value) -> Result<Self, NodeError> {
        let Some(obj) = value.as_object() else {
            return Err(NodeError::NotAnObject(json_type_name(value)));
        };

        let id = obj
            .get(ID_KEY)
            .or_else(|| obj.get(UID_KEY))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        let component = obj
            .get(COMPONENT_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        let mut fields = BTreeMap::new();
        for (name, raw) in obj {
            if name == ID_KEY || name == UID_KEY || name == COMPONENT_KEY {
                continue;
            }
            fields.insert(name.clone(), decode_field(raw));
        }

        Ok(Self { id, component, fields })
    }
}

/// Classify one raw field value as scalar, nested node, or node sequence.
fn decode_field(raw: &Value) -> FieldValue {
    match raw {
        Value::Object(obj) if looks_like_node(obj) => {
            // Lenient by construction: an object field can only fail decode
            // by not being an object, which this arm already guarantees.
            match ContentNode::from_value(raw) {
                Ok(node) => FieldValue::Node(Box::new(node)),
                Err(_) => FieldValue::Scalar(raw.clone()),
            }
        }
        Value::Array(items) => {
            if items.iter().all(Value::is_object) {
                let nodes = items
                    .iter()
                    .filter_map(|item| ContentNode::from_value(item).ok())
                    .collect();
                FieldValue::Nodes(nodes)
            } else {
                FieldValue::Scalar(raw.clone())
            }
        }
        _ => FieldValue::Scalar(raw.clone()),
    }
}

/// An object field is a nested block iff it carries a discriminator or a
/// CMS-style `_uid`. Plain data objects (no such keys) stay scalar props.
fn looks_like_node(obj: &serde_json::Map<String, Value>) -> bool {
    obj.contains_key(COMPONENT_KEY) || obj.contains_key(UID_KEY)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
