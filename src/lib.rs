#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::missing_panics_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. RelayError in domain module
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Internal API
)]

//! Hierarchical log propagation.
//!
//! A [`Relay`] turns a raw message into a [`LogRecord`] when its level mask
//! covers every requested bit, then forwards the record, unfiltered, to each
//! registered [`LogTarget`] in registration order. Targets are further relays
//! or sinks such as [`StorageSink`] and [`ConsoleSink`].
//!
//! ```
//! use std::sync::Arc;
//! use rask_log_relay::{LogLevel, Relay, StorageSink};
//!
//! let first = Relay::shared("@first", LogLevel::ALL);
//! let second = Relay::shared("@second", LogLevel::ALL);
//! let storage = Arc::new(StorageSink::new());
//!
//! first.add_output_to(second.clone());
//! second.add_output_to(storage.clone());
//!
//! first.log_at("notice 1", LogLevel::ALL).unwrap();
//! second.log_at("notice 2", LogLevel::ALL).unwrap();
//!
//! let ids: Vec<_> = storage.content().into_iter().map(|r| r.id).collect();
//! assert_eq!(ids, ["@first", "@second"]);
//! ```

pub mod app;
pub mod domain;
pub mod relay;
pub mod sink;

// Re-export main types for easy access
pub use domain::{LogLevel, LogRecord, PlainRecord, RelayError};
pub use relay::{LogInput, LogTarget, Relay};
pub use sink::{ConsoleSink, FnSink, StorageSink, TracingSink};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
