use crate::domain::{LogRecord, RelayError};

/// Anything that can accept a finished record: a downstream [`Relay`] or a
/// terminal sink.
///
/// Called synchronously from the upstream relay's fan-out. An `Err` aborts
/// delivery to the targets registered after this one and is returned to the
/// original caller unchanged.
///
/// [`Relay`]: crate::relay::Relay
pub trait LogTarget: Send + Sync {
    fn accept(&self, record: &LogRecord) -> Result<(), RelayError>;

    /// Name used in diagnostics.
    ///
    /// The default uses `type_name::<Self>()`; override it when a shorter name exists.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
