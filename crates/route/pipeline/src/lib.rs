//! Route Pipeline — sequential processor chain for MAPLE routing.
//!
//! A [`Pipeline`] sends one exchange through an ordered list of processors.
//! Between stages the working exchange is snapshotted: the snapshot keeps
//! the exchange id (so redelivery can correlate attempts), takes its own
//! copy of the properties, and receives the previous stage's output (or,
//! failing that, its input) as its input.
//!
//! ## Run termination
//!
//! Before each stage the stop-routing property is checked; after each stage
//! the working exchange is checked for a terminal state:
//!
//! - a recorded failure, or a fault reply;
//! - rollback-only;
//! - marked handled by an error handler.
//!
//! Whatever ends the run, the final working exchange is copied back onto the
//! caller's exchange exactly once. Stage errors never escape [`Pipeline::run`];
//! they are recorded on the exchange. A pipeline is itself a [`Processor`], so
//! pipelines nest without special handling.

pub mod builder;
pub mod consolidate;
pub mod control;
pub mod fn_processor;
pub mod mocks;
pub mod pipeline;
pub mod snapshot;
pub mod traits;

pub use builder::build;
pub use consolidate::copy_results;
pub use control::{
    continue_routing, handled_by_error_handler, is_terminal, stop_requested, StageCursor,
};
pub use fn_processor::{processor_fn, FnProcessor};
pub use mocks::{FailingProcessor, RecordingProcessor, SeenExchange, StopRoutingProcessor};
pub use pipeline::Pipeline;
pub use snapshot::create_next_exchange;
pub use traits::{Processor, Traceable};
