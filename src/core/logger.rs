//! Main logger implementation

use super::{
    appender::Appender, event::Event, location::LocationInfo, log_level::Level,
    message::{IntoPayload, Message},
};
use crate::appenders::ConsoleAppender;
use std::error::Error;
use std::fmt;

/// Name given to loggers built without one.
pub const DEFAULT_LOGGER_NAME: &str = "Logger";

/// Who decides whether an appender sees an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filtering {
    /// The logger skips appenders whose `levels()` do not match the event.
    #[default]
    ByLogger,
    /// Every event reaches every appender; each appender filters itself.
    ByAppender,
}

/// Fans log events out to an ordered list of appenders.
///
/// Every call runs to completion on the calling thread. Appenders are invoked
/// in the order they were added.
pub struct Logger {
    name: String,
    appenders: Vec<Box<dyn Appender>>,
    filtering: Filtering,
}

impl Logger {
    /// A logger named `"Logger"` writing to a single [`ConsoleAppender`].
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// A logger with an explicit name and appender list.
    ///
    /// An empty list is kept empty: such a logger discards every event.
    #[must_use]
    pub fn with_appenders(name: impl Into<String>, appenders: Vec<Box<dyn Appender>>) -> Self {
        Self {
            name: name.into(),
            appenders,
            filtering: Filtering::default(),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filtering(&self) -> Filtering {
        self.filtering
    }

    pub fn appenders(&self) -> impl Iterator<Item = &dyn Appender> {
        self.appenders.iter().map(|appender| &**appender)
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.appenders.push(appender);
    }

    pub fn set_filtering(&mut self, filtering: Filtering) {
        self.filtering = filtering;
    }

    /// Log at `level`, attributing the event to the caller's location.
    ///
    /// This is the single entry point behind every rank method: both the
    /// payload and the associated error are optional. `trace` … `fatal` call
    /// it with no error, and the `*_with_error` methods are shorthands that
    /// attach one. `level` is expected to be a single rank.
    ///
    /// ```
    /// use rust_fanout_logger::{Level, Logger, Message};
    ///
    /// let logger = Logger::builder().no_default_appender().build();
    /// let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
    /// logger.log(Level::ERROR, Some(Message::from("request failed")), Some(&err));
    /// logger.log(Level::ERROR, None, Some(&err));
    /// ```
    #[track_caller]
    pub fn log(&self, level: Level, message: Option<Message>, error: Option<&(dyn Error + 'static)>) {
        self.log_at(level, LocationInfo::caller(), message, error);
    }

    /// Log with an explicitly supplied location. The macros go through here.
    pub fn log_at(
        &self,
        level: Level,
        location: LocationInfo,
        message: Option<Message>,
        error: Option<&(dyn Error + 'static)>,
    ) {
        let event = Event::new(self, level, location, message, error);
        self.dispatch(&event);
    }

    fn dispatch(&self, event: &Event<'_>) {
        for appender in &self.appenders {
            if self.filtering == Filtering::ByLogger && !appender.levels().matches(event.level()) {
                continue;
            }
            appender.append(event);
        }
    }

    #[track_caller]
    pub fn trace(&self, message: impl IntoPayload) {
        self.log(Level::TRACE, message.into_payload(), None);
    }

    #[track_caller]
    pub fn debug(&self, message: impl IntoPayload) {
        self.log(Level::DEBUG, message.into_payload(), None);
    }

    #[track_caller]
    pub fn info(&self, message: impl IntoPayload) {
        self.log(Level::INFO, message.into_payload(), None);
    }

    #[track_caller]
    pub fn warning(&self, message: impl IntoPayload) {
        self.log(Level::WARNING, message.into_payload(), None);
    }

    #[track_caller]
    pub fn error(&self, message: impl IntoPayload) {
        self.log(Level::ERROR, message.into_payload(), None);
    }

    #[track_caller]
    pub fn fatal(&self, message: impl IntoPayload) {
        self.log(Level::FATAL, message.into_payload(), None);
    }

    #[track_caller]
    pub fn trace_with_error(&self, message: impl IntoPayload, error: &(dyn Error + 'static)) {
        self.log(Level::TRACE, message.into_payload(), Some(error));
    }

    #[track_caller]
    pub fn debug_with_error(&self, message: impl IntoPayload, error: &(dyn Error + 'static)) {
        self.log(Level::DEBUG, message.into_payload(), Some(error));
    }

    #[track_caller]
    pub fn info_with_error(&self, message: impl IntoPayload, error: &(dyn Error + 'static)) {
        self.log(Level::INFO, message.into_payload(), Some(error));
    }

    #[track_caller]
    pub fn warning_with_error(&self, message: impl IntoPayload, error: &(dyn Error + 'static)) {
        self.log(Level::WARNING, message.into_payload(), Some(error));
    }

    #[track_caller]
    pub fn error_with_error(&self, message: impl IntoPayload, error: &(dyn Error + 'static)) {
        self.log(Level::ERROR, message.into_payload(), Some(error));
    }

    #[track_caller]
    pub fn fatal_with_error(&self, message: impl IntoPayload, error: &(dyn Error + 'static)) {
        self.log(Level::FATAL, message.into_payload(), Some(error));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let appenders: Vec<&str> = self.appenders.iter().map(|a| a.name()).collect();
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("appenders", &appenders)
            .field("filtering", &self.filtering)
            .finish()
    }
}

/// Builder for [`Logger`]
///
/// # Example
///
/// ```
/// use rust_fanout_logger::{ConsoleAppender, Filtering, Level, Logger};
///
/// let logger = Logger::builder()
///     .name("api")
///     .appender(ConsoleAppender::new().with_levels(Level::ERROR | Level::FATAL))
///     .filtering(Filtering::ByLogger)
///     .build();
/// assert_eq!(logger.name(), "api");
/// ```
pub struct LoggerBuilder {
    name: String,
    appenders: Vec<Box<dyn Appender>>,
    filtering: Filtering,
    default_appender: bool,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            appenders: Vec::new(),
            filtering: Filtering::default(),
            default_appender: true,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append an appender; order of calls is dispatch order.
    #[must_use]
    pub fn appender(mut self, appender: impl Appender + 'static) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    #[must_use]
    pub fn filtering(mut self, filtering: Filtering) -> Self {
        self.filtering = filtering;
        self
    }

    /// Do not fall back to a console appender when none was added.
    #[must_use]
    pub fn no_default_appender(mut self) -> Self {
        self.default_appender = false;
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let mut appenders = self.appenders;
        if appenders.is_empty() && self.default_appender {
            appenders.push(Box::new(ConsoleAppender::new()));
        }

        Logger {
            name: self.name,
            appenders,
            filtering: self.filtering,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
