//! The immutable record built for each log call

use super::location::LocationInfo;
use super::log_level::Level;
use super::logger::Logger;
use super::message::Message;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{self, Write};

/// One log occurrence.
///
/// An `Event` is built once per log call and handed to each appender by
/// shared reference. It borrows the logger that produced it, so it can never
/// outlive that logger.
#[derive(Clone)]
pub struct Event<'a> {
    location: LocationInfo,
    timestamp: String,
    level: Level,
    name: &'a str,
    logger: &'a Logger,
    message: Option<Message>,
    error: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Event<'a> {
    pub(crate) fn new(
        logger: &'a Logger,
        level: Level,
        location: LocationInfo,
        message: Option<Message>,
        error: Option<&'a (dyn Error + 'static)>,
    ) -> Self {
        Self {
            location,
            timestamp: current_timestamp(),
            level,
            name: logger.name(),
            logger,
            message,
            error,
        }
    }

    pub fn location(&self) -> &LocationInfo {
        &self.location
    }

    /// Seconds since the Unix epoch, as a decimal string.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The timestamp as a UTC date time, if it parses.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        let secs = self.timestamp.parse::<i64>().ok()?;
        DateTime::from_timestamp(secs, 0)
    }

    /// The rank the call was made at.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Name of the logger at the time of the call.
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn logger(&self) -> &'a Logger {
        self.logger
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn error(&self) -> Option<&'a (dyn Error + 'static)> {
        self.error
    }
}

impl fmt::Debug for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("location", &self.location)
            .field("timestamp", &self.timestamp)
            .field("level", &self.level)
            .field("name", &self.name)
            .field("message", &self.message)
            .field("error", &self.error.map(|e| e.to_string()))
            .finish()
    }
}

/// Current wall clock time in whole seconds since the Unix epoch.
pub(crate) fn current_timestamp() -> String {
    Utc::now().timestamp().to_string()
}

/// Escape characters that would let a message forge extra log lines.
///
/// `\n`, `\r` and `\t` keep their short form. Every other control
/// character, and the Unicode line and paragraph separators, become `\u{..}`.
pub(crate) fn sanitize_message(message: &str) -> String {
    let mut escaped = String::with_capacity(message.len());
    for c in message.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') => {
                let _ = write!(escaped, "\\u{{{:x}}}", u32::from(c));
            }
            c => escaped.push(c),
        }
    }
    escaped
}
