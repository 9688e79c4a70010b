//! Attribute normalization.
//!
//! Maps attribute names as written in markup to the property names the
//! rendering layer expects, and packages a node's literal attributes into
//! an initial property mapping.

use lazy_static::lazy_static;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::data::ATTRS_KEY;
use crate::template::Attribute;

lazy_static! {
    /// Attribute → property rename table. Covers names whose markup
    /// spelling differs from the rendering layer's property spelling;
    /// anything not listed passes through unchanged. Built once at first
    /// use and never mutated.
    static ref PROP_NAME_MAP: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        // Reserved words
        m.insert("class", "className");
        m.insert("for", "htmlFor");
        // camelCase DOM property renames
        m.insert("accesskey", "accessKey");
        m.insert("autocomplete", "autoComplete");
        m.insert("autofocus", "autoFocus");
        m.insert("autoplay", "autoPlay");
        m.insert("cellpadding", "cellPadding");
        m.insert("cellspacing", "cellSpacing");
        m.insert("colspan", "colSpan");
        m.insert("contenteditable", "contentEditable");
        m.insert("crossorigin", "crossOrigin");
        m.insert("datetime", "dateTime");
        m.insert("enctype", "encType");
        m.insert("formaction", "formAction");
        m.insert("maxlength", "maxLength");
        m.insert("minlength", "minLength");
        m.insert("novalidate", "noValidate");
        m.insert("readonly", "readOnly");
        m.insert("rowspan", "rowSpan");
        m.insert("spellcheck", "spellCheck");
        m.insert("srcset", "srcSet");
        m.insert("tabindex", "tabIndex");
        m.insert("usemap", "useMap");
        m
    };
}

/// Normalize a template attribute name to its output property name.
pub fn normalize(name: &str) -> &str {
    PROP_NAME_MAP.get(name).copied().unwrap_or(name)
}

/// Build the initial property mapping for a node from its literal
/// attributes. Every attribute becomes a property (no filtering), keys are
/// normalized, and insertion order is preserved.
pub fn attrs_to_props(attrs: &[Attribute]) -> Map<String, Value> {
    let mut props = Map::new();
    for attr in attrs {
        props.insert(
            normalize(&attr.name).to_string(),
            Value::String(attr.value.clone()),
        );
    }
    props
}

/// Merge a bound attrs object into an existing property mapping. The
/// `_attrs_` marker key is skipped; every other key is normalized and
/// overwrites any literal attribute of the same normalized name. Non-object
/// input merges nothing.
pub fn merge_attrs(props: &mut Map<String, Value>, attrs: &Value) {
    if let Value::Object(entries) = attrs {
        for (key, value) in entries {
            if key != ATTRS_KEY {
                props.insert(normalize(key).to_string(), value.clone());
            }
        }
    }
}
