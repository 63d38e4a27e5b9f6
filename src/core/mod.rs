//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod event;
pub mod location;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod output_format;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use event::Event;
pub use location::LocationInfo;
pub use log_level::Level;
pub use logger::{Filtering, Logger, LoggerBuilder, DEFAULT_LOGGER_NAME};
pub use message::{FieldValue, Fields, IntoPayload, Message};
pub use output_format::format_text;
pub use timestamp::TimestampFormat;
