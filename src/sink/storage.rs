use crate::domain::{LogRecord, PlainRecord, RelayError};
use crate::relay::LogTarget;
use parking_lot::Mutex;

/// In-memory collector. Keeps every record it receives, in arrival order.
#[derive(Debug, Default)]
pub struct StorageSink {
    records: Mutex<Vec<LogRecord>>,
}

impl StorageSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Never filters.
    pub fn log(&self, record: &LogRecord) {
        self.records.lock().push(record.clone());
    }

    /// All stored records in plain form, arrival order. Does not drain.
    pub fn content(&self) -> Vec<PlainRecord> {
        self.records.lock().iter().map(LogRecord::to_plain).collect()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl LogTarget for StorageSink {
    fn accept(&self, record: &LogRecord) -> Result<(), RelayError> {
        self.log(record);
        Ok(())
    }

    fn name(&self) -> &str {
        "storage"
    }
}
