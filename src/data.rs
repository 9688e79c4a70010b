//! Data shape classification.
//!
//! Every data value handed to the transformer is classified into exactly
//! one of five shapes, in a fixed precedence order. The classifier is
//! total: values matching no specific predicate (booleans, `null`, objects
//! without marker keys) fall through to [`Shape::Object`].

use serde_json::{Map, Value};

/// Marker key tagging an object as an attribute bag (`"_attrs_": true`),
/// and the key carrying the attrs slice of a combination record.
pub const ATTRS_KEY: &str = "_attrs_";

/// Key carrying the content slice of a combination record.
pub const CONTENT_KEY: &str = "_content_";

/// The five data shapes the transformer dispatches on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// Ordered sequence: fan out over repeated copies of the current node.
    Array(&'a [Value]),
    /// String or number: literal textual content.
    Scalar(&'a Value),
    /// Object marked `"_attrs_": true`: a flat attribute bag.
    Attrs(&'a Map<String, Value>),
    /// Object carrying both `_content_` and `_attrs_` keys: independently
    /// bound content and attributes for the same node.
    Combination {
        content: &'a Value,
        attrs: &'a Value,
    },
    /// Everything else. Keys (if any) route to scoped descendant nodes.
    Object(&'a Value),
}

/// Classify a data value. Precedence is fixed: Array → Scalar → Attrs →
/// Combination → Object.
///
/// A record carrying only one of `_content_`/`_attrs_` is NOT a
/// combination; it classifies as `Object` and its marker key binds like any
/// other scope key. That fallthrough is the documented degradation path,
/// not an error.
pub fn classify(data: &Value) -> Shape<'_> {
    match data {
        Value::Array(items) => Shape::Array(items),
        Value::String(_) | Value::Number(_) => Shape::Scalar(data),
        Value::Object(entries) => {
            if entries.get(ATTRS_KEY) == Some(&Value::Bool(true)) {
                return Shape::Attrs(entries);
            }
            if let (Some(content), Some(attrs)) =
                (entries.get(CONTENT_KEY), entries.get(ATTRS_KEY))
            {
                return Shape::Combination { content, attrs };
            }
            Shape::Object(data)
        }
        // null, booleans
        _ => Shape::Object(data),
    }
}
