//! HTML template parsing.
//!
//! Turns raw markup into the template node tree the transformer walks.
//! Inline `<script>`/`<style>` blocks are stripped up front — templates
//! carry structure and attributes, never code. Comments are kept: the
//! transformer dispatches on them.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use lazy_static::lazy_static;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use regex::Regex;
use std::fmt;

use crate::template::{Attribute, CommentNode, ElementNode, TemplateNode, TextNode};

lazy_static! {
    static ref SCRIPT_RE: Regex = Regex::new(r"(?is)<script\b[^>]*>[\s\S]*?</script>").unwrap();
    static ref STYLE_RE: Regex = Regex::new(r"(?is)<style[^>]*>[\s\S]*?</style>").unwrap();
}

/// Error raised when markup cannot be read into a template tree.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    fn new(message: String) -> Self {
        ParseError { message }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "template parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Strip script and style blocks from markup before parsing.
fn strip_blocks(html: &str) -> String {
    let result = SCRIPT_RE.replace_all(html, "");
    STYLE_RE.replace_all(&result, "").to_string()
}

/// Parse markup into template nodes.
///
/// The HTML5 algorithm wraps every fragment in `html`/`head`/`body`; those
/// synthetic wrappers are flattened away unless the source itself contained
/// an `<html` tag. Whitespace-only text nodes are dropped.
pub fn parse_template(html: &str) -> Result<Vec<TemplateNode>, ParseError> {
    let stripped = strip_blocks(html);

    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut stripped.as_bytes())
        .map_err(|e| ParseError::new(format!("failed to read markup: {}", e)))?;

    let keep_document_tags = html.to_lowercase().contains("<html");

    let mut nodes = Vec::new();
    collect_top_level(&dom.document, &mut nodes, keep_document_tags);
    Ok(nodes)
}

/// Walk the top of the DOM, flattening the wrapper elements html5ever
/// inserts around fragment input.
fn collect_top_level(handle: &Handle, nodes: &mut Vec<TemplateNode>, keep_document_tags: bool) {
    match &handle.data {
        NodeData::Document => {
            for child in handle.children.borrow().iter() {
                collect_top_level(child, nodes, keep_document_tags);
            }
        }
        NodeData::Element { name, .. } => {
            let tag = name.local.to_string();
            let is_wrapper = tag == "html" || tag == "head" || tag == "body";
            if is_wrapper && !keep_document_tags {
                for child in handle.children.borrow().iter() {
                    collect_top_level(child, nodes, keep_document_tags);
                }
            } else {
                parse_dom_node(handle, nodes);
            }
        }
        // Text and comments outside any element still belong to the
        // template; doctypes and processing instructions do not.
        NodeData::Text { .. } | NodeData::Comment { .. } => parse_dom_node(handle, nodes),
        _ => {}
    }
}

/// Convert one DOM node (and its subtree) into template nodes.
fn parse_dom_node(handle: &Handle, nodes: &mut Vec<TemplateNode>) {
    match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let attributes = attrs
                .borrow()
                .iter()
                .map(|attr| Attribute {
                    name: attr.name.local.to_string(),
                    value: attr.value.to_string(),
                })
                .collect();

            let mut children = Vec::new();
            for child in handle.children.borrow().iter() {
                parse_dom_node(child, &mut children);
            }

            nodes.push(TemplateNode::Element(ElementNode {
                tag: name.local.to_string(),
                attributes,
                children,
            }));
        }

        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if !text.trim().is_empty() {
                nodes.push(TemplateNode::Text(TextNode { value: text }));
            }
        }

        NodeData::Comment { contents } => {
            nodes.push(TemplateNode::Comment(CommentNode {
                value: contents.to_string(),
            }));
        }

        _ => {}
    }
}
