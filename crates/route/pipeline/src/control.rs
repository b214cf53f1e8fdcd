//! Routing control: when a pipeline run should stop before, or after, a stage.

use std::sync::Arc;

use maple_route_exchange::{properties, Exchange};
use serde_json::Value;
use tracing::{debug, warn};

use crate::traits::Processor;

/// Forward-only position over a pipeline's stages.
pub struct StageCursor<'a> {
    stages: &'a [Arc<dyn Processor>],
    position: usize,
}

impl<'a> StageCursor<'a> {
    pub fn new(stages: &'a [Arc<dyn Processor>]) -> Self {
        Self {
            stages,
            position: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.position < self.stages.len()
    }

    /// Take the next stage along with its zero-based index.
    pub fn next_stage(&mut self) -> Option<(usize, &'a Arc<dyn Processor>)> {
        let stage = self.stages.get(self.position)?;
        let index = self.position;
        self.position += 1;
        Some((index, stage))
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

/// Whether the run should go on to the next stage.
///
/// The stop-routing property wins over remaining stages: if it converts to
/// `true` the run ends even though stages are left. A value the context's
/// converter cannot read as a boolean does not stop routing.
pub fn continue_routing(cursor: &StageCursor<'_>, exchange: &Exchange) -> bool {
    if stop_requested(exchange) {
        debug!(
            exchange_id = %exchange.exchange_id(),
            remaining = cursor.stages.len() - cursor.position,
            "Exchange is marked to stop routing"
        );
        return false;
    }

    cursor.has_next()
}

/// Read the stop-routing property through the route's type converter.
pub fn stop_requested(exchange: &Exchange) -> bool {
    let Some(stop) = exchange.property(properties::ROUTE_STOP) else {
        return false;
    };

    match exchange.context().type_converter().to_boolean(stop) {
        Some(stop) => stop,
        None => {
            warn!(
                exchange_id = %exchange.exchange_id(),
                value = %stop,
                "Stop-routing property is not a boolean, ignoring"
            );
            false
        }
    }
}

/// Whether an error handler has marked the exchange as handled.
///
/// Only a literal `true` counts; no conversion is applied.
pub fn handled_by_error_handler(exchange: &Exchange) -> bool {
    matches!(
        exchange.property(properties::ERROR_HANDLER_HANDLED),
        Some(Value::Bool(true))
    )
}

/// Terminal state: failed (failure recorded or fault reply), rollback-only,
/// or handled by an error handler. No further stage may run.
pub fn is_terminal(exchange: &Exchange) -> bool {
    exchange.is_failed() || exchange.is_rollback_only() || handled_by_error_handler(exchange)
}

/// Render the reasons an exchange is terminal, for the debug log.
pub(crate) fn terminal_summary(exchange: &Exchange) -> String {
    let mut summary = String::new();
    if exchange.is_rollback_only() {
        summary.push_str(" Marked as rollback only.");
    }
    if let Some(failure) = exchange.failure() {
        summary.push_str(&format!(" Failure: {}.", failure));
    }
    if let Some(out) = exchange.out_message().filter(|m| m.is_fault()) {
        summary.push_str(&format!(" Fault: {}.", out.body));
    }
    if handled_by_error_handler(exchange) {
        summary.push_str(" Handled by the error handler.");
    }
    summary
}
