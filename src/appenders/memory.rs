//! In-memory appender for tests and diagnostics

use crate::core::{Appender, Event, Level, LocationInfo, Message};
use parking_lot::Mutex;

/// An owned copy of an [`Event`], detached from the logger that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedEvent {
    pub location: LocationInfo,
    pub timestamp: String,
    pub level: Level,
    pub name: String,
    pub message: Option<Message>,
    /// The error's `Display` output.
    pub error: Option<String>,
}

impl From<&Event<'_>> for CapturedEvent {
    fn from(event: &Event<'_>) -> Self {
        Self {
            location: *event.location(),
            timestamp: event.timestamp().to_string(),
            level: event.level(),
            name: event.name().to_string(),
            message: event.message().cloned(),
            error: event.error().map(|e| e.to_string()),
        }
    }
}

/// Keeps every accepted event in memory.
///
/// ```
/// use std::sync::Arc;
/// use rust_fanout_logger::appenders::MemoryAppender;
/// use rust_fanout_logger::Logger;
///
/// let memory = Arc::new(MemoryAppender::new());
/// let logger = Logger::builder().appender(Arc::clone(&memory)).build();
/// logger.info("captured");
/// assert_eq!(memory.len(), 1);
/// ```
pub struct MemoryAppender {
    levels: Level,
    events: Mutex<Vec<CapturedEvent>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self {
            levels: Level::ALL,
            events: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_levels(mut self, levels: Level) -> Self {
        self.levels = levels;
        self
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Default for MemoryAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for MemoryAppender {
    fn name(&self) -> &str {
        "memory"
    }

    fn levels(&self) -> Level {
        self.levels
    }

    fn append(&self, event: &Event<'_>) {
        if self.levels.matches(event.level()) {
            self.events.lock().push(CapturedEvent::from(event));
        }
    }
}
