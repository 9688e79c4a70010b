//! Template node IR.
//!
//! Templates are trees of element, text, and comment nodes read from
//! existing markup. Nodes are built once (normally by `parse`) and never
//! mutated by the binding engine; every downstream operation borrows them.

use serde::{Deserialize, Serialize};

/// Attribute naming the data key an element (and its descendants) binds to.
pub const SCOPE_ATTR: &str = "data-prop";

/// Attribute naming the channel topic an element belongs to.
pub const TOPIC_ATTR: &str = "data-topic";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TemplateNode {
    Element(ElementNode),
    Text(TextNode),
    Comment(CommentNode),
}

/// A single attribute as written in the markup. Attribute order is
/// significant downstream (props iterate in insertion order), so elements
/// carry a `Vec` rather than a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<TemplateNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    pub value: String,
}

impl ElementNode {
    /// Read a named attribute value, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// The element's declared data scope. An empty `data-prop` value counts
    /// as undeclared.
    pub fn scope(&self) -> Option<&str> {
        self.attribute(SCOPE_ATTR).filter(|value| !value.is_empty())
    }

    /// The element's channel topic. An empty `data-topic` value counts as
    /// untopiced.
    pub fn topic(&self) -> Option<&str> {
        self.attribute(TOPIC_ATTR).filter(|value| !value.is_empty())
    }
}
