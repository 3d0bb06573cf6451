//! Filtering and forwarding nodes.
//!
//! ## Flow
//! ```text
//! app ── log("msg", level) ──► Relay A ── (mask & level == level)? ──► LogRecord{id: A}
//!                                 │                                        │
//!                                 └────────── fan-out, registration order ─┤
//!                                                                          ▼
//!                               Relay B ── accept(record) ── no filter ──► targets of B
//!                                                                          │
//!                                                                          ▼
//!                                                              StorageSink / ConsoleSink
//! ```
//!
//! A relay's mask gates only the messages it originates. Records arriving from
//! upstream always pass through.

mod input;
mod target;

pub use input::LogInput;
pub use target::LogTarget;

use crate::domain::{LogLevel, LogRecord, RelayError};
use parking_lot::RwLock;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A named log node with a fixed level mask and an ordered list of targets.
///
/// Targets are held as `Arc<dyn LogTarget>`, so a relay can be registered as
/// the target of another relay while still accepting new targets of its own.
///
/// No cycle check is performed: wiring a relay into its own downstream graph
/// makes the next delivery recurse until the stack is exhausted.
pub struct Relay {
    id: String,
    level: LogLevel,
    targets: RwLock<Vec<Arc<dyn LogTarget>>>,
}

impl Relay {
    pub fn new(id: impl Into<String>, level: LogLevel) -> Self {
        Self {
            id: id.into(),
            level,
            targets: RwLock::new(Vec::new()),
        }
    }

    /// Convenience for the common case of a relay that is itself a target.
    pub fn shared(id: impl Into<String>, level: LogLevel) -> Arc<Self> {
        Arc::new(Self::new(id, level))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn target_count(&self) -> usize {
        self.targets.read().len()
    }

    /// Appends a downstream target. Duplicates are allowed and receive each
    /// record once per registration.
    pub fn add_output_to(&self, target: Arc<dyn LogTarget>) {
        debug!(relay = %self.id, target = target.name(), "Registered output");
        self.targets.write().push(target);
    }

    /// Entry point for both raw messages and forwarded records.
    ///
    /// A raw message that fails the mask check is dropped silently and
    /// `Ok(())` is returned.
    pub fn log(&self, input: impl Into<LogInput>) -> Result<(), RelayError> {
        match input.into() {
            LogInput::Raw { message, level } => {
                if !self.level.covers(level) {
                    debug!(
                        relay = %self.id,
                        mask = %self.level,
                        requested = %level,
                        "Dropped message below relay level"
                    );
                    return Ok(());
                }
                let record = LogRecord::new(self.id.as_str(), message);
                self.fan_out(&record)
            }
            LogInput::Forwarded(record) => self.fan_out(&record),
        }
    }

    /// Logs `message` at `level`.
    pub fn log_at(&self, message: impl Into<String>, level: LogLevel) -> Result<(), RelayError> {
        self.log(LogInput::raw(message, level))
    }

    /// Logs untyped input. See [`LogInput::from_value`].
    pub fn log_value(&self, value: Value, level: LogLevel) -> Result<(), RelayError> {
        self.log(LogInput::from_value(value, level)?)
    }

    fn fan_out(&self, record: &LogRecord) -> Result<(), RelayError> {
        // Snapshot: targets added during delivery only see later records.
        let targets = self.targets.read().clone();

        for target in &targets {
            trace!(
                relay = %self.id,
                origin = record.id(),
                target = target.name(),
                "Delivering record"
            );
            if let Err(e) = target.accept(record) {
                warn!(
                    relay = %self.id,
                    target = target.name(),
                    error = %e,
                    "Target failed; remaining targets skipped"
                );
                return Err(e);
            }
        }
        Ok(())
    }
}

impl LogTarget for Relay {
    fn accept(&self, record: &LogRecord) -> Result<(), RelayError> {
        self.fan_out(record)
    }

    fn name(&self) -> &str {
        &self.id
    }
}

impl fmt::Debug for Relay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relay")
            .field("id", &self.id)
            .field("level", &self.level)
            .field("targets", &self.target_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{FnSink, StorageSink};
    use serde_json::json;

    fn messages(storage: &StorageSink) -> Vec<(String, String)> {
        storage
            .content()
            .into_iter()
            .map(|r| (r.id, r.message))
            .collect()
    }

    #[test]
    fn test_new_relay_has_no_targets() {
        let relay = Relay::new("@first", LogLevel::ALL);
        assert_eq!(relay.id(), "@first");
        assert_eq!(relay.level(), LogLevel::ALL);
        assert_eq!(relay.target_count(), 0);
        assert!(relay.log("nobody listens").is_ok());
    }

    #[test]
    fn test_raw_message_becomes_record_with_relay_id() {
        let relay = Relay::new("@first", LogLevel::ALL);
        let storage = Arc::new(StorageSink::new());
        relay.add_output_to(storage.clone());

        relay.log_at("notice 1", LogLevel::ALL).unwrap();

        assert_eq!(
            messages(&storage),
            vec![("@first".to_string(), "notice 1".to_string())]
        );
    }

    #[test]
    fn test_default_requested_level_is_error() {
        let storage = Arc::new(StorageSink::new());

        let debug_only = Relay::new("@debug", LogLevel::DEBUG);
        debug_only.add_output_to(storage.clone());
        debug_only.log("dropped").unwrap();
        assert!(storage.is_empty());

        let errors = Relay::new("@errors", LogLevel::ERROR);
        errors.add_output_to(storage.clone());
        errors.log("kept").unwrap();
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_partial_mask_overlap_is_dropped() {
        let relay = Relay::new("@a", LogLevel::ERROR | LogLevel::DEBUG);
        let storage = Arc::new(StorageSink::new());
        relay.add_output_to(storage.clone());

        relay
            .log_at("m", LogLevel::ERROR | LogLevel::REPLICATION)
            .unwrap();
        assert!(storage.is_empty());

        relay.log_at("m", LogLevel::ERROR | LogLevel::DEBUG).unwrap();
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_forwarded_record_ignores_mask() {
        let relay = Relay::new("@closed", LogLevel::empty());
        let storage = Arc::new(StorageSink::new());
        relay.add_output_to(storage.clone());

        let record = LogRecord::new("@upstream", "passing through");
        relay.log(record.clone()).unwrap();

        assert_eq!(storage.records(), vec![record]);
    }

    #[test]
    fn test_fan_out_follows_registration_order() {
        let relay = Relay::new("@a", LogLevel::ALL);
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));

        for name in ["first", "second", "third"] {
            let order = order.clone();
            relay.add_output_to(Arc::new(FnSink::new(name, move |_: &LogRecord| {
                order.lock().push(name);
                Ok(())
            })));
        }

        relay.log("m").unwrap();
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_registration_delivers_twice() {
        let relay = Relay::new("@a", LogLevel::ALL);
        let storage = Arc::new(StorageSink::new());
        relay.add_output_to(storage.clone());
        relay.add_output_to(storage.clone());

        relay.log("m").unwrap();
        assert_eq!(storage.len(), 2);
        assert_eq!(relay.target_count(), 2);
    }

    #[test]
    fn test_failing_target_aborts_remaining_fan_out() {
        let relay = Relay::new("@a", LogLevel::ALL);
        let before = Arc::new(StorageSink::new());
        let after = Arc::new(StorageSink::new());

        relay.add_output_to(before.clone());
        relay.add_output_to(Arc::new(FnSink::new("broken", |_: &LogRecord| {
            Err(RelayError::sink("broken", "disk full"))
        })));
        relay.add_output_to(after.clone());

        let err = relay.log("m").unwrap_err();
        assert!(matches!(err, RelayError::Sink { ref sink, .. } if sink == "broken"));
        assert_eq!(before.len(), 1);
        assert!(after.is_empty());
    }

    #[test]
    fn test_log_value_dispatch() {
        let relay = Relay::new("@a", LogLevel::ERROR);
        let storage = Arc::new(StorageSink::new());
        relay.add_output_to(storage.clone());

        relay.log_value(json!("raw"), LogLevel::ERROR).unwrap();
        relay
            .log_value(
                json!({ "id": "@b", "time": 7, "message": "built" }),
                LogLevel::DEBUG,
            )
            .unwrap();

        let content = storage.content();
        assert_eq!(content.len(), 2);
        assert_eq!(content[0].id, "@a");
        assert_eq!(content[1].id, "@b");
        assert_eq!(content[1].time, 7);
    }

    #[test]
    fn test_log_value_invalid_argument_has_no_side_effect() {
        let relay = Relay::new("@a", LogLevel::ALL);
        let storage = Arc::new(StorageSink::new());
        relay.add_output_to(storage.clone());

        let err = relay.log_value(json!(12), LogLevel::ERROR).unwrap_err();
        assert_eq!(err.as_label(), "invalid_argument");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_target_added_during_delivery_sees_later_records() {
        let relay = Relay::shared("@a", LogLevel::ALL);
        let late = Arc::new(StorageSink::new());

        let registrar = {
            let relay = Arc::downgrade(&relay);
            let late = late.clone();
            FnSink::new("registrar", move |_: &LogRecord| {
                if let Some(relay) = relay.upgrade()
                    && relay.target_count() == 1
                {
                    relay.add_output_to(late.clone());
                }
                Ok(())
            })
        };
        relay.add_output_to(Arc::new(registrar));

        relay.log("first").unwrap();
        assert!(late.is_empty());

        relay.log("second").unwrap();
        assert_eq!(late.len(), 1);
        assert_eq!(late.content()[0].message, "second");
    }

    #[test]
    fn test_debug_output() {
        let relay = Relay::new("@a", LogLevel::ERROR);
        let debug = format!("{relay:?}");
        assert!(debug.contains("@a"));
        assert!(debug.contains("targets: 0"));
    }
}
