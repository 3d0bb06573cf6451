use super::config::TracingLevel;
use super::initialization::{InitializationError, LogDirective};
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Collects filter directives and installs the global tracing subscriber.
///
/// Diagnostics go to stderr; stdout belongs to the console sink.
pub struct LoggingSystem {
    directives: Arc<RwLock<Vec<LogDirective>>>,
}

impl LoggingSystem {
    pub fn new() -> Self {
        Self {
            directives: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Adds a `target=level` directive. Malformed directives are rejected;
    /// `Config::validate` reports the same errors before startup.
    pub fn add_directive(&self, directive_str: &str) -> Result<(), InitializationError> {
        let directive = LogDirective::parse(directive_str)?;
        self.directives.write().push(directive);
        Ok(())
    }

    pub fn initialize_tracing(&self, default_level: TracingLevel) -> Result<(), InitializationError> {
        let filter_string = self.build_filter_string(default_level);

        let env_filter = EnvFilter::try_new(&filter_string).map_err(|e| {
            InitializationError::LoggingInitFailed {
                details: format!("Failed to create EnvFilter with '{filter_string}'"),
                source: Box::new(e),
            }
        })?;

        let subscriber = tracing_subscriber::registry().with(env_filter).with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .compact(),
        );

        tracing::subscriber::set_global_default(subscriber).map_err(|e| {
            InitializationError::LoggingInitFailed {
                details: "Failed to set global tracing subscriber".to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(())
    }

    pub fn build_filter_string(&self, default_level: TracingLevel) -> String {
        let directives = self.directives.read();

        let mut filter_parts = Vec::with_capacity(directives.len() + 1);

        // Default level first
        filter_parts.push(default_level.as_str().to_string());

        for directive in directives.iter() {
            filter_parts.push(directive.to_filter_string());
        }

        filter_parts.join(",")
    }

    pub fn directive_count(&self) -> usize {
        self.directives.read().len()
    }
}

impl Default for LoggingSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Installs the global subscriber once per process. Later calls report
/// whether the first installation succeeded.
pub fn setup_logging_safe(
    level: TracingLevel,
    directives: &[String],
) -> Result<(), InitializationError> {
    static INIT_SUCCESS: OnceLock<bool> = OnceLock::new();

    let initialized = *INIT_SUCCESS.get_or_init(|| {
        let logging_system = LoggingSystem::new();

        let result = directives
            .iter()
            .try_for_each(|directive| logging_system.add_directive(directive))
            .and_then(|()| logging_system.initialize_tracing(level));

        if let Err(e) = &result {
            eprintln!("Warning: {e}");
        }
        result.is_ok()
    });

    if initialized {
        Ok(())
    } else {
        Err(InitializationError::LoggingInitFailed {
            details: "Logging system initialization failed".to_string(),
            source: Box::new(std::io::Error::other("Logging initialization error")),
        })
    }
}
