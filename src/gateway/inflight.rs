use crate::utils::error::GatewayResult;
use futures::future::{BoxFuture, Shared};
use serde_json::Value;
use std::collections::HashMap;

/// Pending result that every caller for the same key awaits.
pub type SharedResponse = Shared<BoxFuture<'static, GatewayResult<Value>>>;

/// Request key → network call currently executing.
#[derive(Default)]
pub struct InFlightRegistry {
    pending: HashMap<String, SharedResponse>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the call already running for `key`, if any.
    pub fn join(&self, key: &str) -> Option<SharedResponse> {
        self.pending.get(key).cloned()
    }

    pub fn register(&mut self, key: String, response: SharedResponse) {
        self.pending.insert(key, response);
    }

    /// Drops the entry for `key`. Returns whether one was registered.
    pub fn settle(&mut self, key: &str) -> bool {
        self.pending.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl std::fmt::Debug for InFlightRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InFlightRegistry")
            .field("keys", &self.pending.keys().collect::<Vec<_>>())
            .finish()
    }
}
