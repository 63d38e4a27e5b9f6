//! Basic logger usage example
//!
//! Demonstrates fan-out to two console appenders with different level masks.
//!
//! Run with: cargo run --example basic_usage

use rust_fanout_logger::prelude::*;
use rust_fanout_logger::{error, info};

fn main() -> Result<()> {
    println!("=== Rust Fan-out Logger - Basic Usage Example ===\n");

    // The default logger writes everything to stdout
    let logger = Logger::new();

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    println!("\n2. Two appenders with different masks:");
    let severe: Level = "error|fatal".parse()?;
    let logger = Logger::builder()
        .name("demo")
        .appender(ConsoleAppender::new().with_name("everything"))
        .appender(
            ConsoleAppender::new()
                .with_name("severe")
                .with_levels(severe)
                .with_custom_timestamp("%H:%M:%S")?,
        )
        .build();

    logger.info("Shown once");
    logger.error("Shown twice");

    println!("\n3. Macros, structured payloads and errors:");
    let port = 8080;
    info!(logger, "Listening on port {}", port);
    logger.info(Fields::new().with_field("user_id", 42).with_field("action", "login"));
    let err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
    error!(logger, error = err, "Failed to bind port {}", port);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
