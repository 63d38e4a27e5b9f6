//! Timestamp formatting utilities
//!
//! Events carry whole seconds since the Unix epoch. Appenders choose how that
//! value is rendered.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::DateTime;
use std::fmt::Write;

/// Timestamp format options for text output
///
/// # Examples
///
/// ```
/// use rust_fanout_logger::TimestampFormat;
///
/// assert_eq!(TimestampFormat::Iso8601.format_epoch("0"), "1970-01-01T00:00:00Z");
/// assert_eq!(TimestampFormat::Unix.format_epoch("1736332245"), "1736332245");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// ISO 8601 in UTC: `2025-01-08T10:30:45Z`
    #[default]
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds, as carried by the event: `1736332245`
    Unix,

    /// Custom strftime format
    ///
    /// Prefer [`TimestampFormat::custom`], which rejects malformed strings.
    /// A malformed string built directly renders the raw epoch seconds.
    ///
    /// ```
    /// use rust_fanout_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// assert_eq!(format.format_epoch("0"), "01/Jan/1970:00:00:00 +0000");
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// A validated custom strftime format.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidTimestampFormat`] if `format` contains a
    /// specifier chrono does not understand.
    ///
    /// ```
    /// use rust_fanout_logger::TimestampFormat;
    ///
    /// assert!(TimestampFormat::custom("%H:%M:%S").is_ok());
    /// assert!(TimestampFormat::custom("%Q").is_err());
    /// ```
    pub fn custom(format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::invalid_timestamp_format(format));
        }
        Ok(TimestampFormat::Custom(format))
    }

    /// Format an epoch-seconds string according to this format.
    ///
    /// Input that is not a valid timestamp is returned unchanged.
    #[must_use]
    pub fn format_epoch(&self, timestamp: &str) -> String {
        if *self == TimestampFormat::Unix {
            return timestamp.to_string();
        }

        let Some(datetime) = timestamp
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
        else {
            return timestamp.to_string();
        };

        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => timestamp.to_string(),
            TimestampFormat::Custom(format_str) => {
                // chrono reports a malformed format through fmt::Error
                let mut rendered = String::new();
                match write!(rendered, "{}", datetime.format(format_str)) {
                    Ok(()) => rendered,
                    Err(_) => timestamp.to_string(),
                }
            }
        }
    }
}
