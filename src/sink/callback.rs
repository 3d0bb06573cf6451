use crate::domain::{LogRecord, RelayError};
use crate::relay::LogTarget;
use std::fmt;

/// Adapts a closure into a target.
pub struct FnSink<F> {
    name: &'static str,
    f: F,
}

impl<F> FnSink<F>
where
    F: Fn(&LogRecord) -> Result<(), RelayError> + Send + Sync,
{
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> LogTarget for FnSink<F>
where
    F: Fn(&LogRecord) -> Result<(), RelayError> + Send + Sync,
{
    fn accept(&self, record: &LogRecord) -> Result<(), RelayError> {
        (self.f)(record)
    }

    fn name(&self) -> &str {
        self.name
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink").field("name", &self.name).finish()
    }
}
