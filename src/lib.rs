//! # livebind
//!
//! Binds live, arbitrarily-shaped data feeds into HTML templates,
//! producing render-ready `{tag, props, content}` output trees.
//!
//! The core is a recursive shape dispatch: at every template element the
//! incoming data value is classified as one of five shapes — scalar
//! content, an attribute bag, a combination of the two, an array to fan
//! out over, or a plain object whose keys route to scoped descendants —
//! and the matching strategy runs. Elements opt into data with
//! `data-prop="key"` (scope narrowing) and join a channel with
//! `data-topic="name"`.
//!
//! ## Guarantees
//!
//! 1. **Totality**: the transformer never fails. Missing scope keys,
//!    booleans, nulls, and malformed combination records all degrade to the
//!    plain-object strategy.
//! 2. **Purity**: templates and data are only borrowed; output trees are
//!    freshly allocated per call. Concurrent calls over independent inputs
//!    need no coordination.
//! 3. **Order**: attribute order in the markup is the property iteration
//!    order in the output.
//! 4. **Comment omission**: comments produce no output slot at all —
//!    content sequences are built by filtering, not by rendering empties.

mod bind;
mod channel;
mod component;
mod data;
mod grouping;
mod parse;
mod props;
mod template;
mod transform;

#[cfg(test)]
mod binding_tests;

pub use bind::{bind, BindOptions};
pub use channel::{DataCallback, DataChannel, StaticChannel};
pub use component::Component;
pub use data::{classify, Shape, ATTRS_KEY, CONTENT_KEY};
pub use grouping::{TopicGroup, TopicGroups};
pub use parse::{parse_template, ParseError};
pub use props::{attrs_to_props, merge_attrs, normalize};
pub use template::{
    Attribute, CommentNode, ElementNode, TemplateNode, TextNode, SCOPE_ATTR, TOPIC_ATTR,
};
pub use transform::{apply, transform, Content, OutputNode};
