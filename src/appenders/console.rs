//! Console appender implementation

use crate::core::{format_text, Appender, Event, Level, Result, TimestampFormat};
use std::io::Write;

/// Writes one human-readable line per event to standard output.
///
/// Receives every rank unless narrowed with [`with_levels`](Self::with_levels).
/// Write errors on stdout are ignored.
pub struct ConsoleAppender {
    name: String,
    levels: Level,
    use_colors: bool,
    timestamp_format: TimestampFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            name: "console".to_string(),
            levels: Level::ALL,
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Restrict the ranks this appender accepts
    ///
    /// # Example
    ///
    /// ```
    /// use rust_fanout_logger::appenders::{Appender, ConsoleAppender};
    /// use rust_fanout_logger::Level;
    ///
    /// let appender = ConsoleAppender::new().with_levels(Level::ERROR | Level::FATAL);
    /// assert!(!appender.levels().matches(Level::INFO));
    /// ```
    #[must_use]
    pub fn with_levels(mut self, levels: Level) -> Self {
        self.levels = levels;
        self
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_fanout_logger::appenders::ConsoleAppender;
    /// use rust_fanout_logger::TimestampFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    ///
    /// # Errors
    ///
    /// Fails with [`LoggerError::InvalidTimestampFormat`](crate::LoggerError::InvalidTimestampFormat)
    /// when `format_str` cannot be rendered.
    ///
    /// ```
    /// use rust_fanout_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::new().with_custom_timestamp("%H:%M:%S")?;
    /// # Ok::<(), rust_fanout_logger::LoggerError>(())
    /// ```
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Result<Self> {
        self.timestamp_format = TimestampFormat::custom(format_str)?;
        Ok(self)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn name(&self) -> &str {
        &self.name
    }

    fn levels(&self) -> Level {
        self.levels
    }

    fn append(&self, event: &Event<'_>) {
        // Also checked here for loggers that leave filtering to appenders
        if !self.levels.matches(event.level()) {
            return;
        }

        let output = format_text(event, &self.timestamp_format, self.use_colors);
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", output);
    }
}
