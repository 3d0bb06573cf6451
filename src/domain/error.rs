use thiserror::Error;

/// Errors surfaced by relays and sinks.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RelayError {
    /// `log` received something that is neither a message nor a record.
    #[error("Invalid log argument: {reason}")]
    InvalidArgument { reason: String },

    /// A target failed to accept a record. Delivery to the remaining
    /// targets of the same fan-out is aborted.
    #[error("Sink '{sink}' failed: {reason}")]
    Sink { sink: String, reason: String },
}

impl RelayError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        RelayError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn sink(sink: impl Into<String>, reason: impl Into<String>) -> Self {
        RelayError::Sink {
            sink: sink.into(),
            reason: reason.into(),
        }
    }

    /// Short stable label (snake_case) for logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            RelayError::InvalidArgument { .. } => "invalid_argument",
            RelayError::Sink { .. } => "sink_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(
            RelayError::invalid_argument("number").as_label(),
            "invalid_argument"
        );
        assert_eq!(RelayError::sink("console", "closed").as_label(), "sink_failed");
    }

    #[test]
    fn test_display() {
        let err = RelayError::sink("console", "broken pipe");
        assert_eq!(err.to_string(), "Sink 'console' failed: broken pipe");

        let err = RelayError::invalid_argument("expected a string or a record, got number");
        assert!(err.to_string().starts_with("Invalid log argument"));
    }
}
