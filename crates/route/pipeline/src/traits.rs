use maple_route_exchange::{Exchange, ExchangeError};

/// Processor trait — a single stage a route sends exchanges through.
///
/// Processors are opaque to the routing machinery: they are invoked and the
/// exchange is inspected afterwards. A returned error is recorded on the
/// exchange by the caller rather than propagated.
pub trait Processor: Send + Sync {
    /// Human-readable name, used in logs and in `Pipeline[..]` rendering.
    fn name(&self) -> &str {
        "processor"
    }

    /// Process the exchange, possibly mutating it.
    fn process(&self, exchange: &mut Exchange) -> Result<(), ExchangeError>;
}

/// Label for tracing and diagnostic collaborators.
pub trait Traceable {
    fn trace_label(&self) -> &str;
}
