use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Event delivered on the push channel.
///
/// Only `message` is interpreted; the remaining fields are carried through
/// untouched for logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PushEvent {
    pub message: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl PushEvent {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: Map::new(),
        }
    }
}
