//! Topic grouping.
//!
//! Top-level template elements that share a `data-topic` value form one
//! group bound to one data channel. Groups keep first-seen topic order;
//! elements keep arrival order within their group.

use serde::Serialize;

use crate::template::{ElementNode, TemplateNode};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicGroup {
    pub topic: String,
    pub elements: Vec<ElementNode>,
}

#[derive(Debug, Clone, Default)]
pub struct TopicGroups {
    groups: Vec<TopicGroup>,
}

impl TopicGroups {
    pub fn new() -> Self {
        TopicGroups::default()
    }

    /// Collect every topiced top-level element of a template.
    pub fn from_nodes(nodes: &[TemplateNode]) -> Self {
        let mut groups = TopicGroups::new();
        for node in nodes {
            groups.add(node);
        }
        groups
    }

    /// File an element under its topic. Non-element nodes and elements
    /// without a `data-topic` attribute are ignored.
    pub fn add(&mut self, node: &TemplateNode) {
        let element = match node {
            TemplateNode::Element(element) => element,
            _ => return,
        };
        let topic = match element.topic() {
            Some(topic) => topic,
            None => return,
        };

        match self.groups.iter_mut().find(|group| group.topic == topic) {
            Some(group) => group.elements.push(element.clone()),
            None => self.groups.push(TopicGroup {
                topic: topic.to_string(),
                elements: vec![element.clone()],
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopicGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
