mod cli;
pub mod env_helpers;
mod validation;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Argument error: {0}")]
    ArgError(#[from] clap::Error),
    #[error("Environment error: {0}")]
    EnvError(String),
}

/// Verbosity of the relay's own diagnostics.
///
/// This is distinct from the domain `LogLevel` bitmask, which gates records
/// flowing through the relay graph. Parsed case-insensitively; `warning`
/// is accepted for `warn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl TracingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TracingLevel::Error => "error",
            TracingLevel::Warn => "warn",
            TracingLevel::Info => "info",
            TracingLevel::Debug => "debug",
            TracingLevel::Trace => "trace",
        }
    }
}

pub use cli::Config;
