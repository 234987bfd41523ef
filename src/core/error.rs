//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A field value the structured encoder cannot represent
    #[error("Unsupported value for field '{key}': {message}")]
    UnsupportedValue { key: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an unsupported value error for the field `key`
    pub fn unsupported_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::UnsupportedValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// True when a formatter failed to produce a message
    pub fn is_render_error(&self) -> bool {
        matches!(
            self,
            LoggerError::UnsupportedValue { .. } | LoggerError::JsonError(_)
        )
    }

    /// True when the sink rejected (or partially failed) a write
    pub fn is_sink_error(&self) -> bool {
        matches!(
            self,
            LoggerError::IoOperation { .. } | LoggerError::IoError(_) | LoggerError::WriterError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::unsupported_value("ratio", "NaN is not valid JSON");
        assert!(matches!(err, LoggerError::UnsupportedValue { .. }));

        let err = LoggerError::config("LoggerConfig", "unknown format");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::writer("sink closed");
        assert!(matches!(err, LoggerError::WriterError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::unsupported_value("ratio", "NaN is not valid JSON");
        assert_eq!(
            err.to_string(),
            "Unsupported value for field 'ratio': NaN is not valid JSON"
        );

        let err = LoggerError::config("log level", "'loud' is not a level");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for log level: 'loud' is not a level"
        );

        let err = LoggerError::writer("sink closed");
        assert_eq!(err.to_string(), "Writer error: sink closed");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::io_operation("writing log message", "sink rejected write", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing log message"));
        assert!(err.to_string().contains("sink rejected write"));
    }

    #[test]
    fn test_error_classification() {
        assert!(LoggerError::unsupported_value("k", "v").is_render_error());
        assert!(!LoggerError::unsupported_value("k", "v").is_sink_error());
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(LoggerError::from(json_err).is_render_error());

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert!(LoggerError::from(io_err).is_sink_error());
        assert!(LoggerError::writer("closed").is_sink_error());
        assert!(!LoggerError::config("x", "y").is_sink_error());
        assert!(!LoggerError::config("x", "y").is_render_error());
    }
}
