use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::RouteContext;
use crate::error::ExchangeError;
use crate::ids::ExchangeId;
use crate::message::Message;

/// Well-known exchange property keys.
pub mod properties {
    /// When set to a value that converts to `true`, routing stops before the
    /// next processor runs.
    pub const ROUTE_STOP: &str = "route.stop";

    /// Set to `true` by an error handler once it has dealt with a failure.
    /// The exchange is still considered failed for routing purposes.
    pub const ERROR_HANDLER_HANDLED: &str = "route.error-handler.handled";
}

/// Message exchange pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangePattern {
    /// One-way: no reply is expected
    #[default]
    InOnly,
    /// Request/reply
    InOut,
    /// A reply may or may not be produced
    InOptionalOut,
}

impl ExchangePattern {
    /// Whether this pattern carries a reply message.
    pub fn is_out_capable(&self) -> bool {
        !matches!(self, ExchangePattern::InOnly)
    }
}

/// A unit of message state routed through processors.
pub struct Exchange {
    id: ExchangeId,
    pattern: ExchangePattern,
    in_message: Message,
    out_message: Option<Message>,
    properties: HashMap<String, Value>,
    failure: Option<ExchangeError>,
    rollback_only: bool,
    context: Arc<RouteContext>,
    created_at: DateTime<Utc>,
}

impl Exchange {
    /// Create an exchange with a fresh id and the given inbound body.
    pub fn new(context: Arc<RouteContext>, body: impl Into<Value>) -> Self {
        Self {
            id: ExchangeId::new(),
            pattern: ExchangePattern::default(),
            in_message: Message::new(body),
            out_message: None,
            properties: HashMap::new(),
            failure: None,
            rollback_only: false,
            context,
            created_at: Utc::now(),
        }
    }

    pub fn with_pattern(mut self, pattern: ExchangePattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// A blank exchange sharing `previous`'s id, creation time, pattern and
    /// context.
    ///
    /// Messages, properties and failure state are left empty; callers fill
    /// in whatever they want carried over.
    pub fn derived_from(previous: &Exchange) -> Self {
        Self {
            id: previous.id,
            pattern: previous.pattern,
            in_message: Message::default(),
            out_message: None,
            properties: HashMap::new(),
            failure: None,
            rollback_only: false,
            context: Arc::clone(&previous.context),
            created_at: previous.created_at,
        }
    }

    pub fn exchange_id(&self) -> ExchangeId {
        self.id
    }

    pub fn pattern(&self) -> ExchangePattern {
        self.pattern
    }

    pub fn context(&self) -> &RouteContext {
        &self.context
    }

    /// When the routed unit of work was first created. Snapshots keep the
    /// original's timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // ── Messages ──────────────────────────────────────────────────────

    pub fn in_message(&self) -> &Message {
        &self.in_message
    }

    pub fn in_message_mut(&mut self) -> &mut Message {
        &mut self.in_message
    }

    pub fn set_in(&mut self, message: Message) {
        self.in_message = message;
    }

    pub fn has_out(&self) -> bool {
        self.out_message.is_some()
    }

    pub fn out_message(&self) -> Option<&Message> {
        self.out_message.as_ref()
    }

    /// Outbound message, created empty on first access.
    pub fn out_mut(&mut self) -> &mut Message {
        self.out_message.get_or_insert_with(Message::default)
    }

    pub fn set_out(&mut self, message: Message) {
        self.out_message = Some(message);
    }

    pub fn take_out(&mut self) -> Option<Message> {
        self.out_message.take()
    }

    pub fn clear_out(&mut self) {
        self.out_message = None;
    }

    // ── Properties ────────────────────────────────────────────────────

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn remove_property(&mut self, key: &str) -> Option<Value> {
        self.properties.remove(key)
    }

    pub fn properties(&self) -> &HashMap<String, Value> {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.properties
    }

    /// Ask routing to stop before the next processor.
    pub fn stop_routing(&mut self) {
        self.set_property(properties::ROUTE_STOP, true);
    }

    /// Mark the current failure as dealt with by an error handler.
    pub fn mark_handled(&mut self) {
        self.set_property(properties::ERROR_HANDLER_HANDLED, true);
    }

    // ── Failure state ─────────────────────────────────────────────────

    pub fn failure(&self) -> Option<&ExchangeError> {
        self.failure.as_ref()
    }

    pub fn set_failure(&mut self, failure: ExchangeError) {
        self.failure = Some(failure);
    }

    pub fn take_failure(&mut self) -> Option<ExchangeError> {
        self.failure.take()
    }

    /// Failed when a failure is recorded or the reply is a fault.
    pub fn is_failed(&self) -> bool {
        self.failure.is_some() || self.out_message.as_ref().is_some_and(Message::is_fault)
    }

    pub fn is_rollback_only(&self) -> bool {
        self.rollback_only
    }

    pub fn set_rollback_only(&mut self, rollback_only: bool) {
        self.rollback_only = rollback_only;
    }

    pub fn clear_failure(&mut self) {
        self.failure = None;
    }
}

impl std::fmt::Debug for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exchange")
            .field("id", &self.id)
            .field("pattern", &self.pattern)
            .field("in", &self.in_message)
            .field("out", &self.out_message)
            .field("properties", &self.properties)
            .field("failure", &self.failure)
            .field("rollback_only", &self.rollback_only)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Exchange[{}] in={}", self.id, self.in_message.body)?;
        if let Some(out) = &self.out_message {
            write!(f, " out={}", out.body)?;
        }
        Ok(())
    }
}
