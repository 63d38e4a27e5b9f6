//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and record the full
//! call site, including the enclosing function, which the plain `Logger`
//! methods cannot capture.
//!
//! # Examples
//!
//! ```
//! use rust_fanout_logger::prelude::*;
//! use rust_fanout_logger::{error, info};
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With an associated error
//! let err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
//! error!(logger, error = err, "Failed to bind port {}", port);
//! ```

#[doc(hidden)]
pub mod __private {
    use std::error::Error;

    pub fn as_dyn_error<E: Error + 'static>(error: &E) -> &(dyn Error + 'static) {
        error
    }
}

/// Log a message at the given level.
///
/// # Examples
///
/// ```
/// # use rust_fanout_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_fanout_logger::log;
/// log!(logger, Level::INFO, "Simple message");
/// log!(logger, Level::ERROR, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, error = $err:expr, $($arg:tt)+) => {
        $logger.log_at(
            $level,
            $crate::location!(),
            ::core::option::Option::Some($crate::Message::from(::std::format!($($arg)+))),
            ::core::option::Option::Some($crate::macros::__private::as_dyn_error(&$err)),
        )
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at(
            $level,
            $crate::location!(),
            ::core::option::Option::Some($crate::Message::from(::std::format!($($arg)+))),
            ::core::option::Option::None,
        )
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use rust_fanout_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_fanout_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::TRACE, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_fanout_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_fanout_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_fanout_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_fanout_logger::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::WARNING, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_fanout_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_fanout_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::ERROR, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::FATAL, $($arg)+)
    };
}
