use maple_route_exchange::{Exchange, ExchangeError};

use crate::traits::Processor;

/// Adapts a closure into a named [`Processor`].
pub struct FnProcessor<F> {
    name: String,
    f: F,
}

impl<F> FnProcessor<F>
where
    F: Fn(&mut Exchange) -> Result<(), ExchangeError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Processor for FnProcessor<F>
where
    F: Fn(&mut Exchange) -> Result<(), ExchangeError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, exchange: &mut Exchange) -> Result<(), ExchangeError> {
        (self.f)(exchange)
    }
}

/// Shorthand for [`FnProcessor::new`].
pub fn processor_fn<F>(name: impl Into<String>, f: F) -> FnProcessor<F>
where
    F: Fn(&mut Exchange) -> Result<(), ExchangeError> + Send + Sync,
{
    FnProcessor::new(name, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maple_route_exchange::{Message, RouteContext};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn closure_runs_against_exchange() {
        let upper = processor_fn("upper", |ex: &mut Exchange| {
            let body = ex.in_message().body.as_str().unwrap_or_default().to_uppercase();
            ex.set_out(Message::new(body));
            Ok(())
        });

        let mut ex = Exchange::new(Arc::new(RouteContext::new("t")), "abc");
        upper.process(&mut ex).unwrap();

        assert_eq!(upper.name(), "upper");
        assert_eq!(ex.out_message().unwrap().body, json!("ABC"));
    }
}
