//! Top-level wiring: group, connect, render.
//!
//! `bind` is the setup pass over a parsed template: topiced elements are
//! grouped, each distinct topic gets one channel from the caller-supplied
//! provider, and each group renders through a component built from its
//! first element. Rendered trees leave through the sink — mounting them is
//! the caller's business.

use serde_json::Value;

use crate::channel::DataChannel;
use crate::component::Component;
use crate::grouping::TopicGroups;
use crate::template::TemplateNode;
use crate::transform::OutputNode;

#[derive(Debug, Clone, Default)]
pub struct BindOptions {
    /// Data already available at setup time. When set, every group renders
    /// immediately and channels are connected but not consulted; when
    /// absent, each group renders from its channel's one-shot callback.
    pub data: Option<Value>,
}

/// Wire a parsed template to its data channels.
///
/// The provider is called exactly once per distinct topic. The returned
/// channels must be kept alive by the caller for as long as callback
/// delivery is expected; dropping them ends the subscription.
pub fn bind<P, S>(
    nodes: &[TemplateNode],
    opts: BindOptions,
    mut channel_for: P,
    sink: S,
) -> Vec<Box<dyn DataChannel>>
where
    P: FnMut(&str) -> Box<dyn DataChannel>,
    S: Fn(&str, OutputNode) + Clone + 'static,
{
    let groups = TopicGroups::from_nodes(nodes);
    let mut channels = Vec::new();

    for group in groups.iter() {
        let template = match group.elements.first() {
            Some(first) => first.clone(),
            None => continue,
        };
        let component = Component::new(template);
        let topic = group.topic.clone();

        let mut channel = channel_for(&topic);

        if let Some(data) = &opts.data {
            sink(&topic, component.render(data));
        } else {
            let sink = sink.clone();
            channel.init(Box::new(move |data| sink(&topic, component.render(&data))));
        }

        channels.push(channel);
    }

    channels
}
