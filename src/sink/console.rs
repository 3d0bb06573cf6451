use crate::domain::{LogRecord, RelayError};
use crate::relay::LogTarget;
use parking_lot::Mutex;
use std::io::{self, Stdout, Write};

/// Writes each record as one JSON line in plain form.
pub struct ConsoleSink<W: Write + Send = Stdout> {
    writer: Mutex<W>,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleSink<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> LogTarget for ConsoleSink<W> {
    fn accept(&self, record: &LogRecord) -> Result<(), RelayError> {
        let line = serde_json::to_string(&record.to_plain())
            .map_err(|e| RelayError::sink(self.name(), e.to_string()))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{line}")
            .and_then(|()| writer.flush())
            .map_err(|e| RelayError::sink(self.name(), e.to_string()))
    }

    fn name(&self) -> &str {
        "console"
    }
}
