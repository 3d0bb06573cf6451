use super::config::TracingLevel;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InitializationError {
    #[error("Invalid log level '{input}'. Valid levels: {valid_levels:?}")]
    InvalidLogLevel {
        input: String,
        valid_levels: Vec<String>,
    },

    #[error("Invalid directive format '{input}'. Expected: '{expected}'")]
    InvalidDirectiveFormat { input: String, expected: String },

    #[error("Empty target in directive '{input}'")]
    EmptyTarget { input: String },

    #[error("Logging system initialization failed: {details}")]
    LoggingInitFailed {
        details: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Case-insensitive; accepts "warning" for `warn`.
pub fn parse_tracing_level(s: &str) -> Result<TracingLevel, InitializationError> {
    match s.to_lowercase().as_str() {
        "error" => Ok(TracingLevel::Error),
        "warn" | "warning" => Ok(TracingLevel::Warn),
        "info" => Ok(TracingLevel::Info),
        "debug" => Ok(TracingLevel::Debug),
        "trace" => Ok(TracingLevel::Trace),
        _ => Err(InitializationError::InvalidLogLevel {
            input: s.to_string(),
            valid_levels: vec![
                "error".to_string(),
                "warn".to_string(),
                "info".to_string(),
                "debug".to_string(),
                "trace".to_string(),
            ],
        }),
    }
}

impl FromStr for TracingLevel {
    type Err = InitializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tracing_level(s.trim())
    }
}

/// One `target=level` entry of the diagnostic filter.
#[derive(Debug, Clone)]
pub struct LogDirective {
    pub target: String,
    pub level: TracingLevel,
}

impl LogDirective {
    pub fn new(target: impl Into<String>, level: TracingLevel) -> Self {
        Self {
            target: target.into(),
            level,
        }
    }

    pub fn parse(directive: &str) -> Result<Self, InitializationError> {
        let parts: Vec<&str> = directive.split('=').collect();

        if parts.len() != 2 {
            return Err(InitializationError::InvalidDirectiveFormat {
                input: directive.to_string(),
                expected: "target=level".to_string(),
            });
        }

        let target = parts[0].trim();
        let level = parts[1].trim();

        if target.is_empty() {
            return Err(InitializationError::EmptyTarget {
                input: directive.to_string(),
            });
        }

        let parsed_level = parse_tracing_level(level)?;

        Ok(LogDirective::new(target, parsed_level))
    }

    /// Rendered for `tracing_subscriber::EnvFilter`.
    pub fn to_filter_string(&self) -> String {
        format!("{}={}", self.target, self.level.as_str())
    }
}
