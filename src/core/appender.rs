//! Appender trait for log output destinations

use super::{event::Event, log_level::Level};
use std::sync::Arc;

/// A destination for log events.
///
/// `append` has no return value: an appender that fails to write handles or
/// swallows the failure itself. It must not log through the logger that
/// called it.
///
/// Implementations are shared across threads, so any mutable state lives
/// behind the appender's own lock.
pub trait Appender: Send + Sync {
    fn name(&self) -> &str;

    /// The ranks this appender wants to receive.
    fn levels(&self) -> Level;

    fn append(&self, event: &Event<'_>);
}

impl<A: Appender + ?Sized> Appender for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn levels(&self) -> Level {
        (**self).levels()
    }

    fn append(&self, event: &Event<'_>) {
        (**self).append(event)
    }
}

impl<A: Appender + ?Sized> Appender for Arc<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn levels(&self) -> Level {
        (**self).levels()
    }

    fn append(&self, event: &Event<'_>) {
        (**self).append(event)
    }
}
