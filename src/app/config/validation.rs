use super::{Config, ConfigError};
use crate::app::initialization::LogDirective;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate relay identity
        if self.relay_id.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Relay id must not be empty".to_string(),
            ));
        }

        // Validate diagnostic directives
        for directive in &self.log_directives {
            LogDirective::parse(directive).map_err(|e| {
                ConfigError::InvalidConfig(format!("Invalid log directive '{directive}': {e}"))
            })?;
        }

        Ok(())
    }
}
