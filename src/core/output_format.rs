//! Human-readable rendering shared by the text appenders
//!
//! Example: `[2025-01-08T10:30:45Z] [INFO   ] orders src/orders.rs:orders::submit:42:9 - Request processed`

use super::event::{sanitize_message, Event};
use super::message::Message;
use super::timestamp::TimestampFormat;
use colored::Colorize;
use std::fmt::Write;

/// Render an event as a single line of text, without a trailing newline.
///
/// The logger name, the location and `Text` payloads are escaped so none of
/// them can forge extra lines; `Raw` payloads are written verbatim. An
/// attached error follows as `error=...`.
pub fn format_text(event: &Event<'_>, timestamp_format: &TimestampFormat, use_colors: bool) -> String {
    let level = event.level();
    let level_str = format!("{:7}", level);
    let level_str = match level.color_code() {
        Some(color) if use_colors => level_str.color(color).to_string(),
        _ => level_str,
    };

    let mut output = format!(
        "[{}] [{}] {} {}",
        timestamp_format.format_epoch(event.timestamp()),
        level_str,
        sanitize_message(event.name()),
        sanitize_message(&event.location().to_string())
    );

    match event.message() {
        Some(Message::Text(text)) => {
            output.push_str(" - ");
            output.push_str(&sanitize_message(text));
        }
        Some(Message::Raw(raw)) => {
            output.push_str(" - ");
            output.push_str(raw);
        }
        Some(Message::Fields(fields)) => {
            let _ = write!(output, " - {}", sanitize_message(&fields.to_string()));
        }
        None => {}
    }

    if let Some(error) = event.error() {
        let _ = write!(output, " error={}", sanitize_message(&error.to_string()));
    }

    output
}
