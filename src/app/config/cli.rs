use super::env_helpers::{load_env_list, load_env_string, load_env_var};
use super::{ConfigError, TracingLevel};
use crate::domain::LogLevel;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Relays stdin lines through a filtering log relay", long_about = None)]
pub struct Config {
    /// Identity stamped on every record this relay originates
    #[arg(long, env = "RELAY_ID", default_value = "@main")]
    pub relay_id: String,

    /// Relay mask, e.g. "all", "error|debug" or "0x5"
    #[arg(long, env = "RELAY_LEVEL", default_value = "all")]
    pub relay_level: LogLevel,

    /// Level requested for every input line
    #[arg(long, env = "REQUEST_LEVEL", default_value = "error")]
    pub request_level: LogLevel,

    /// Verbosity of the relay's own diagnostics (stderr)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: TracingLevel,

    /// Extra `target=level` diagnostic directives
    #[arg(long = "log-directive", env = "LOG_DIRECTIVES", value_delimiter = ',')]
    pub log_directives: Vec<String>,

    /// Also re-emit every record as a tracing event
    #[arg(long, env = "ECHO_TRACING")]
    pub echo_tracing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relay_id: "@main".to_string(),
            relay_level: LogLevel::ALL,
            request_level: LogLevel::ERROR,
            log_level: TracingLevel::Info,
            log_directives: Vec::new(),
            echo_tracing: false,
        }
    }
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::try_parse_from(args)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        load_env_string("RELAY_ID", &mut config.relay_id);
        load_env_var("RELAY_LEVEL", &mut config.relay_level)?;
        load_env_var("REQUEST_LEVEL", &mut config.request_level)?;
        load_env_var("LOG_LEVEL", &mut config.log_level)?;
        load_env_list("LOG_DIRECTIVES", &mut config.log_directives);
        load_env_var("ECHO_TRACING", &mut config.echo_tracing)?;

        config.validate()?;
        Ok(config)
    }
}
