use crate::domain::{LogRecord, RelayError};
use crate::relay::LogTarget;
use tracing::info;

/// Re-emits records as `tracing` events, so a relay graph can feed whatever
/// subscriber the host process installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogTarget for TracingSink {
    fn accept(&self, record: &LogRecord) -> Result<(), RelayError> {
        info!(
            target: "rask_log_relay::records",
            relay_id = record.id(),
            time = record.time(),
            "{}",
            record.message()
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "tracing"
    }
}
