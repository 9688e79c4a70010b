//! Data channel boundary.
//!
//! A channel supplies the first data value for a topic, either immediately
//! or once it arrives. The engine has no opinion on timing, retries, or
//! subsequent updates; it only requires that the registered callback is
//! invoked exactly once.

use serde_json::Value;

/// One-shot callback receiving the first available data value.
pub type DataCallback = Box<dyn FnOnce(Value)>;

pub trait DataChannel {
    /// Register the one-shot callback. Implementations invoke it exactly
    /// once — synchronously if data is already available, otherwise when
    /// the first value arrives.
    fn init(&mut self, on_data: DataCallback);
}

/// Channel whose data is already available at setup time; the callback
/// fires synchronously from `init`.
pub struct StaticChannel {
    data: Option<Value>,
}

impl StaticChannel {
    pub fn new(data: Value) -> Self {
        StaticChannel { data: Some(data) }
    }
}

impl DataChannel for StaticChannel {
    fn init(&mut self, on_data: DataCallback) {
        if let Some(data) = self.data.take() {
            on_data(data);
        }
    }
}
