//! Renderable components.

use serde_json::Value;

use crate::template::ElementNode;
use crate::transform::{transform_element, OutputNode};

/// A component wraps one template element and renders data values against
/// it. The template is captured once; every `render` is a pure pass over
/// it, so one component can serve successive values from a live channel.
#[derive(Debug, Clone)]
pub struct Component {
    template: ElementNode,
}

impl Component {
    pub fn new(template: ElementNode) -> Self {
        Component { template }
    }

    pub fn template(&self) -> &ElementNode {
        &self.template
    }

    /// Render a data value. The template's own scope declaration applies,
    /// exactly as it would for a nested element.
    pub fn render(&self, data: &Value) -> OutputNode {
        transform_element(&self.template, data)
    }
}
