//! Error types for the logger system
//!
//! Log calls never fail. These errors only surface while configuring a
//! logger: opening an appender's output, parsing a level mask or choosing a
//! timestamp format.

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

    /// Unrecognized level name in a mask string
    #[error("Invalid log level: '{input}'")]
    InvalidLevel { input: String },

    /// Strftime string with a specifier chrono cannot render
    #[error("Invalid timestamp format: '{format}'")]
    InvalidTimestampFormat { format: String },
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

    /// Create an invalid level error for the given input
    pub fn invalid_level(input: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            input: input.into(),
        }
    }

    pub fn invalid_timestamp_format(format: impl Into<String>) -> Self {
        LoggerError::InvalidTimestampFormat {
            format: format.into(),
        }
    }
}
