//! Error types for the logging front-end

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Malformed level input. Fatal to the configuration call that
    /// supplied it, never silently defaulted.
    #[error("invalid log level '{input}': expected one of Debug, Info, Warn, Error")]
    InvalidLevel { input: String },

    /// The output stream became unwritable mid-render.
    #[error("render failed while {operation}: {source}")]
    Render {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid-level error for the given input
    pub fn invalid_level(input: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            input: input.into(),
        }
    }

    /// Create a render error with context about the failed write
    pub fn render(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Render {
            operation: operation.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("verbose");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::render("writing log line", io_err);
        assert!(matches!(err, LoggerError::Render { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("15");
        assert_eq!(
            err.to_string(),
            "invalid log level '15': expected one of Debug, Info, Warn, Error"
        );

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::render("writing progress bar", io_err);
        assert!(err.to_string().contains("writing progress bar"));
        assert!(err.to_string().contains("pipe closed"));
    }
}
