//! Terminal targets.
//!
//! Every sink implements [`LogTarget`](crate::relay::LogTarget) and accepts
//! records unconditionally; sinks have no level mask.

mod callback;
mod console;
mod storage;
mod trace_bridge;

pub use callback::FnSink;
pub use console::ConsoleSink;
pub use storage::StorageSink;
pub use trace_bridge::TracingSink;
