use std::sync::Arc;

use maple_route_exchange::{Exchange, ExchangeError};
use tracing::{debug, trace};

use crate::consolidate::copy_results;
use crate::control::{continue_routing, is_terminal, terminal_summary, StageCursor};
use crate::snapshot::create_next_exchange;
use crate::traits::{Processor, Traceable};

/// Sends an exchange through its processors in order, the output of each
/// stage becoming the input of the next.
///
/// The processor list is fixed at construction. A run keeps all of its state
/// in the exchanges it creates, so one `Pipeline` can serve concurrent runs.
pub struct Pipeline {
    processors: Vec<Arc<dyn Processor>>,
}

impl Pipeline {
    pub fn new(processors: Vec<Arc<dyn Processor>>) -> Self {
        Self { processors }
    }

    pub fn processors(&self) -> &[Arc<dyn Processor>] {
        &self.processors
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Run every stage against `exchange`.
    ///
    /// The first stage works on `exchange` itself; each later stage gets a
    /// snapshot of the previous working exchange. The run ends when the
    /// stages are exhausted, when stop-routing is requested, or when the
    /// working exchange reaches a terminal state. The final working exchange
    /// is then copied back onto `exchange`.
    ///
    /// Stage errors are recorded on the working exchange and never returned.
    pub fn run(&self, exchange: &mut Exchange) {
        let mut cursor = StageCursor::new(&self.processors);
        // None while the caller's exchange is still the working exchange.
        let mut snapshot: Option<Exchange> = None;

        trace!(
            exchange_id = %exchange.exchange_id(),
            stages = self.processors.len(),
            "Starting pipeline run"
        );

        while continue_routing(&cursor, snapshot.as_ref().unwrap_or(&*exchange)) {
            if cursor.position() > 0 {
                let next = create_next_exchange(snapshot.as_ref().unwrap_or(&*exchange));
                snapshot = Some(next);
            }

            let Some((index, processor)) = cursor.next_stage() else {
                break;
            };
            let current = match snapshot.as_mut() {
                Some(working) => working,
                None => &mut *exchange,
            };

            trace!(
                exchange_id = %current.exchange_id(),
                stage = processor.name(),
                index,
                "Processing exchange: {}",
                current
            );

            if let Err(err) = processor.process(current) {
                current.set_failure(err);
            }

            if is_terminal(current) {
                debug!(
                    exchange_id = %current.exchange_id(),
                    stage = processor.name(),
                    index,
                    "Message exchange has failed so breaking out of pipeline: {}.{}",
                    current,
                    terminal_summary(current)
                );
                break;
            }
        }

        trace!(
            exchange_id = %exchange.exchange_id(),
            "Processing complete: {}",
            snapshot.as_ref().unwrap_or(&*exchange)
        );

        if let Some(working) = snapshot {
            copy_results(exchange, working);
        }
    }
}

impl Processor for Pipeline {
    fn name(&self) -> &str {
        self.trace_label()
    }

    fn process(&self, exchange: &mut Exchange) -> Result<(), ExchangeError> {
        self.run(exchange);
        Ok(())
    }
}

impl Traceable for Pipeline {
    fn trace_label(&self) -> &str {
        "Pipeline"
    }
}

impl std::fmt::Display for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.processors.iter().map(|p| p.name()).collect();
        write!(f, "Pipeline[{}]", names.join(", "))
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
