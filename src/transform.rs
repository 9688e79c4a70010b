//! The shape-dispatching transformer.
//!
//! `transform`/`apply` walk a template tree against a data value and
//! produce a fresh output tree of `{tag, props, content}` nodes for a
//! rendering layer to consume. At every element the data value is
//! classified (see `data`) and one of five strategies runs; recursion
//! narrows the data as it descends. Both functions are pure: templates and
//! data are only borrowed, and the output is owned by the caller.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::data::{classify, Shape};
use crate::props::{attrs_to_props, merge_attrs};
use crate::template::{ElementNode, TemplateNode};

/// Tag of the synthetic wrapper emitted for array fan-out.
const ARRAY_WRAPPER_TAG: &str = "div";

// ═══════════════════════════════════════════════════════════════════════════════
// OUTPUT TREE
// ═══════════════════════════════════════════════════════════════════════════════

/// A node of the output tree. Serializes to the `{tag, props, content}`
/// shape the rendering layer expects; `props` iterates in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputNode {
    pub tag: String,
    pub props: Map<String, Value>,
    pub content: Vec<Content>,
}

/// One content entry: literal text (or a bound number, kept numeric) or a
/// nested node. Comments contribute no entry at all — content sequences
/// are built by filtering out the `None` results of child transformation,
/// so an omitted slot is never representable here.
///
/// Serialize-only: an untagged Deserialize would be ambiguous, since
/// `Value` also matches object input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Scalar(Value),
    Node(OutputNode),
}

// ═══════════════════════════════════════════════════════════════════════════════
// TRANSFORM / APPLY
// ═══════════════════════════════════════════════════════════════════════════════

/// Transform one template node against a data value.
///
/// Text nodes yield their literal text verbatim — they are never
/// data-bound. Comment nodes yield `None`; callers assembling a content
/// sequence must drop those entries (see [`Content`]). Elements resolve
/// their declared scope, narrow the data, and dispatch through [`apply`].
pub fn transform(node: &TemplateNode, data: &Value) -> Option<Content> {
    match node {
        TemplateNode::Text(text) => Some(Content::Scalar(Value::String(text.value.clone()))),
        TemplateNode::Comment(_) => None,
        TemplateNode::Element(element) => Some(Content::Node(transform_element(element, data))),
    }
}

/// Element path of [`transform`]: narrow to the element's declared scope,
/// then dispatch. A declared scope whose key is missing from the data
/// narrows to `Null`, which falls through to the object strategy — empty
/// bound content, never an error.
pub(crate) fn transform_element(element: &ElementNode, data: &Value) -> OutputNode {
    let scoped = match element.scope() {
        Some(key) => data.get(key).unwrap_or(&Value::Null),
        None => data,
    };
    apply(element, scoped)
}

/// Apply a data value to a template element, dispatching on its shape.
pub fn apply(node: &ElementNode, data: &Value) -> OutputNode {
    match classify(data) {
        // One copy of the node per array element, wrapped in a synthetic
        // container. The wrapper can produce structurally invalid markup
        // (e.g. list items inside a div); that is an accepted limitation
        // of fan-out, not something to silently repair here.
        Shape::Array(items) => OutputNode {
            tag: ARRAY_WRAPPER_TAG.to_string(),
            props: Map::new(),
            content: items
                .iter()
                .map(|item| Content::Node(apply(node, item)))
                .collect(),
        },

        // The scalar becomes the node's sole content entry.
        Shape::Scalar(value) => OutputNode {
            tag: node.tag.clone(),
            props: attrs_to_props(&node.attributes),
            content: vec![Content::Scalar(value.clone())],
        },

        // Attribute-only binding: props absorb the bag, descendants render
        // from their own literal template content (empty object data).
        Shape::Attrs(_) => {
            let mut props = attrs_to_props(&node.attributes);
            merge_attrs(&mut props, data);
            OutputNode {
                tag: node.tag.clone(),
                props,
                content: transform_children(node, &Value::Object(Map::new())),
            }
        }

        // Attrs and content bound independently: props from the attrs
        // slice, content from re-applying the node against the content
        // slice (that pass's props are discarded).
        Shape::Combination { content, attrs } => {
            let mut props = attrs_to_props(&node.attributes);
            merge_attrs(&mut props, attrs);
            OutputNode {
                tag: node.tag.clone(),
                props,
                content: apply(node, content).content,
            }
        }

        // Plain object: each child independently re-resolves its own scope
        // from the same data.
        Shape::Object(_) => OutputNode {
            tag: node.tag.clone(),
            props: attrs_to_props(&node.attributes),
            content: transform_children(node, data),
        },
    }
}

fn transform_children(node: &ElementNode, data: &Value) -> Vec<Content> {
    node.children
        .iter()
        .filter_map(|child| transform(child, data))
        .collect()
}
