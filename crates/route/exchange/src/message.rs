use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message carried by an exchange: body, headers and a fault marker.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub body: Value,
    pub headers: BTreeMap<String, Value>,
    /// Marks this message as a fault response rather than a normal reply.
    pub fault: bool,
}

impl Message {
    pub fn new(body: impl Into<Value>) -> Self {
        Self {
            body: body.into(),
            headers: BTreeMap::new(),
            fault: false,
        }
    }

    /// A fault message with the given body.
    pub fn fault(body: impl Into<Value>) -> Self {
        Self {
            fault: true,
            ..Self::new(body)
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&Value> {
        self.headers.get(name)
    }

    pub fn set_body(&mut self, body: impl Into<Value>) {
        self.body = body.into();
    }

    /// Independent copy of this message. Later mutation of either side
    /// never shows through to the other.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn is_fault(&self) -> bool {
        self.fault
    }
}
