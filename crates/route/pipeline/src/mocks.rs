use std::sync::Mutex;

use maple_route_exchange::{Exchange, ExchangeError, ExchangeId, Message};
use serde_json::Value;

use crate::traits::Processor;

/// What a [`RecordingProcessor`] observed on one invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct SeenExchange {
    pub exchange_id: ExchangeId,
    pub input: Value,
}

/// Mock processor that records every exchange it sees.
///
/// Optionally replies with a fixed body.
pub struct RecordingProcessor {
    name: String,
    reply: Option<Value>,
    seen: Mutex<Vec<SeenExchange>>,
}

impl RecordingProcessor {
    /// A processor that leaves the exchange untouched.
    pub fn passthrough(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reply: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// A processor that sets the given reply body.
    pub fn replying(name: impl Into<String>, body: impl Into<Value>) -> Self {
        Self {
            reply: Some(body.into()),
            ..Self::passthrough(name)
        }
    }

    pub fn seen(&self) -> Vec<SeenExchange> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Processor for RecordingProcessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, exchange: &mut Exchange) -> Result<(), ExchangeError> {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(SeenExchange {
                exchange_id: exchange.exchange_id(),
                input: exchange.in_message().body.clone(),
            });

        if let Some(body) = &self.reply {
            exchange.set_out(Message::new(body.clone()));
        }
        Ok(())
    }
}

/// Mock processor that always returns a processing error.
pub struct FailingProcessor {
    name: String,
    reason: String,
}

impl FailingProcessor {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl Processor for FailingProcessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, _exchange: &mut Exchange) -> Result<(), ExchangeError> {
        Err(ExchangeError::Processing(self.reason.clone()))
    }
}

/// Mock processor that replies and then asks routing to stop.
pub struct StopRoutingProcessor {
    name: String,
    reply: Value,
}

impl StopRoutingProcessor {
    pub fn new(name: impl Into<String>, reply: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            reply: reply.into(),
        }
    }
}

impl Processor for StopRoutingProcessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, exchange: &mut Exchange) -> Result<(), ExchangeError> {
        exchange.set_out(Message::new(self.reply.clone()));
        exchange.stop_routing();
        Ok(())
    }
}
