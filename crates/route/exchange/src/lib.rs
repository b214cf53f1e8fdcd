//! Exchange envelope for MAPLE routing.
//!
//! An [`Exchange`] is the unit of message state routed through processors:
//! an inbound message, an optional outbound message, a property bag, a
//! recorded failure and a rollback-only flag. Its [`ExchangeId`] is fixed at
//! construction so retries and redeliveries can correlate every attempt.
//!
//! Property values are dynamically typed ([`serde_json::Value`]). Typed reads
//! go through the [`TypeConverter`] carried by the exchange's [`RouteContext`].

pub mod context;
pub mod converter;
pub mod error;
pub mod exchange;
pub mod ids;
pub mod message;

pub use context::RouteContext;
pub use converter::{ConverterConfig, DefaultTypeConverter, TypeConverter};
pub use error::ExchangeError;
pub use exchange::{properties, Exchange, ExchangePattern};
pub use ids::ExchangeId;
pub use message::Message;
