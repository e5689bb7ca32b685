//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Severity value that does not name a level
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Sink IO failure with context
    #[error("IO error while {operation} on sink '{sink}': {source}")]
    IoOperation {
        operation: &'static str,
        sink: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink IO error
    pub fn io_operation(
        operation: &'static str,
        sink: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation,
            sink: sink.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("LOUD");
        assert_eq!(err.to_string(), "Invalid log level: 'LOUD'");

        let err = LoggerError::config("LoggerConfig", "unknown clock mode");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerConfig: unknown clock mode"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::io_operation("writing line", "stdout", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        let text = err.to_string();
        assert!(text.contains("writing line"));
        assert!(text.contains("'stdout'"));
        assert!(text.contains("pipe closed"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
