pub mod config;
pub mod initialization;
pub mod logging_system;

pub use config::{Config, ConfigError, TracingLevel};
pub use initialization::InitializationError;
pub use logging_system::{LoggingSystem, setup_logging_safe};

use crate::domain::RelayError;
use crate::relay::{LogTarget, Relay};
use crate::sink::{ConsoleSink, TracingSink};
use std::borrow::Cow;
use std::io::{self, BufRead};
use std::process;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Initialization error: {0}")]
    Init(#[from] InitializationError),
    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),
    #[error("Input error: {0}")]
    Io(#[from] io::Error),
}

/// Outcome of one [`App::run`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub lines_read: usize,
    pub records_forwarded: usize,
}

/// A single relay fed from line-oriented input.
pub struct App {
    config: Config,
    relay: Arc<Relay>,
}

impl App {
    pub fn from_args<I, T>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::from_args(args)?;
        Ok(Self::from_config(config))
    }

    /// Wires the relay to stdout.
    pub fn from_config(config: Config) -> Self {
        Self::with_output(config, Arc::new(ConsoleSink::stdout()))
    }

    /// Wires the relay to `output`, plus a [`TracingSink`] when
    /// `echo_tracing` is set.
    pub fn with_output(config: Config, output: Arc<dyn LogTarget>) -> Self {
        let relay = Relay::shared(config.relay_id.clone(), config.relay_level);
        relay.add_output_to(output);
        if config.echo_tracing {
            relay.add_output_to(Arc::new(TracingSink));
        }

        Self { config, relay }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn relay(&self) -> &Arc<Relay> {
        &self.relay
    }

    /// Logs every input line at the configured request level.
    pub fn run<R: BufRead>(&self, mut input: R) -> Result<RunSummary, AppError> {
        let passes = self.relay.level().covers(self.config.request_level);
        info!(
            relay = %self.config.relay_id,
            mask = %self.config.relay_level,
            requested = %self.config.request_level,
            passes,
            "Relay started"
        );

        let mut summary = RunSummary::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines_read += 1;

            let line = decode_line(&buf);
            if let Cow::Owned(_) = line {
                warn!(line = summary.lines_read, "Replaced invalid UTF-8 in input line");
            }
            self.relay.log_at(line.into_owned(), self.config.request_level)?;
            if passes {
                summary.records_forwarded += 1;
            }
        }

        info!(
            lines_read = summary.lines_read,
            records_forwarded = summary.records_forwarded,
            "Input exhausted"
        );
        Ok(summary)
    }
}

/// Strips the line terminator and decodes lossily; borrowed only when the
/// bytes were valid UTF-8.
fn decode_line(buf: &[u8]) -> Cow<'_, str> {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line)
}

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Main entry point for the application
pub fn main() -> anyhow::Result<()> {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        // --help / --version and usage errors print and exit the clap way
        Err(ConfigError::ArgError(e)) => e.exit(),
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(2);
        }
    };

    setup_logging_safe(config.log_level, &config.log_directives)?;
    info!("Starting rask-log-relay v{}", get_version());

    let app = App::from_config(config);
    if let Err(e) = app.run(io::stdin().lock()) {
        error!("Application error: {}", e);
        process::exit(1);
    }

    Ok(())
}
