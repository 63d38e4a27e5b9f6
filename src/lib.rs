//! # Rust Fan-out Logger
//!
//! A small, synchronous logging facility. A [`Logger`] turns each call into an
//! immutable [`Event`] and hands it to its appenders in registration order.
//!
//! ## Features
//!
//! - **Level masks**: appenders subscribe to any set of ranks, e.g. `ERROR | FATAL`
//! - **Call-site capture**: file, line and column on every event; macros add the function
//! - **Pluggable appenders**: console, file and in-memory, or your own `Appender`
//! - **No hidden state**: no global logger, no background thread
//!
//! ```
//! use rust_fanout_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .name("api")
//!     .appender(ConsoleAppender::new().with_levels(Level::WARNING | Level::ERROR | Level::FATAL))
//!     .build();
//!
//! logger.info("not shown");
//! logger.warning("shown");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{CapturedEvent, ConsoleAppender, FileAppender, MemoryAppender};
    pub use crate::core::{
        Appender, Event, FieldValue, Fields, Filtering, IntoPayload, Level, LocationInfo,
        Logger, LoggerBuilder, LoggerError, Message, Result, TimestampFormat,
    };
}

pub use appenders::{CapturedEvent, ConsoleAppender, FileAppender, MemoryAppender};
pub use core::{
    Appender, Event, FieldValue, Fields, Filtering, IntoPayload, Level, LocationInfo, Logger,
    LoggerBuilder, LoggerError, Message, Result, TimestampFormat, DEFAULT_LOGGER_NAME,
};
