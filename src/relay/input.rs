use crate::domain::{LogLevel, LogRecord, PlainRecord, RelayError};
use serde_json::Value;

/// What a relay's `log` entry point receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogInput {
    /// Raw text from an application call site, filtered against the relay mask.
    Raw { message: String, level: LogLevel },
    /// A record already built upstream; never filtered again.
    Forwarded(LogRecord),
}

impl LogInput {
    pub fn raw(message: impl Into<String>, level: LogLevel) -> Self {
        LogInput::Raw {
            message: message.into(),
            level,
        }
    }

    /// Decodes untyped input: a JSON string is a raw message at `level`, a
    /// JSON object in plain record form is a forwarded record (`level` is
    /// ignored). Everything else is an invalid argument.
    pub fn from_value(value: Value, level: LogLevel) -> Result<Self, RelayError> {
        match value {
            Value::String(message) => Ok(LogInput::Raw { message, level }),
            Value::Object(_) => {
                let plain: PlainRecord = serde_json::from_value(value).map_err(|e| {
                    RelayError::invalid_argument(format!("object is not a log record: {e}"))
                })?;
                Ok(LogInput::Forwarded(plain.into()))
            }
            other => Err(RelayError::invalid_argument(format!(
                "expected a string or a record, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Plain text defaults to [`LogLevel::ERROR`].
impl From<&str> for LogInput {
    fn from(message: &str) -> Self {
        LogInput::raw(message, LogLevel::default())
    }
}

impl From<String> for LogInput {
    fn from(message: String) -> Self {
        LogInput::raw(message, LogLevel::default())
    }
}

impl From<(&str, LogLevel)> for LogInput {
    fn from((message, level): (&str, LogLevel)) -> Self {
        LogInput::raw(message, level)
    }
}

impl From<(String, LogLevel)> for LogInput {
    fn from((message, level): (String, LogLevel)) -> Self {
        LogInput::raw(message, level)
    }
}

impl From<LogRecord> for LogInput {
    fn from(record: LogRecord) -> Self {
        LogInput::Forwarded(record)
    }
}

impl From<&LogRecord> for LogInput {
    fn from(record: &LogRecord) -> Self {
        LogInput::Forwarded(record.clone())
    }
}
