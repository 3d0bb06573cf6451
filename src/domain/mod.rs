//! Domain layer for rask-log-relay.
//!
//! Contains the canonical types shared across all modules:
//! - `LogLevel`: Category bitmask (error/replication/debug)
//! - `LogRecord`: Immutable, identity-stamped record and its `PlainRecord` form
//! - `RelayError`: Top-level error type

pub mod error;
pub mod log_level;
pub mod record;

pub use error::RelayError;
pub use log_level::{LogLevel, ParseLevelError};
pub use record::{LogRecord, PlainRecord};
