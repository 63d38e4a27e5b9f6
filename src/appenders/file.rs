//! File appender implementation

use crate::core::{format_text, Appender, Event, Level, LoggerError, Result, TimestampFormat};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one text line per event to a file.
///
/// Output is buffered; call [`flush`](Self::flush) to push it to disk. The
/// buffer is also flushed when the appender is dropped. Write failures are
/// reported on stderr and never reach the logger.
pub struct FileAppender {
    name: String,
    path: PathBuf,
    levels: Level,
    writer: Mutex<BufWriter<File>>,
    timestamp_format: TimestampFormat,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            name: "file".to_string(),
            path,
            levels: Level::ALL,
            writer: Mutex::new(BufWriter::new(file)),
            timestamp_format: TimestampFormat::default(),
        })
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_levels(mut self, levels: Level) -> Self {
        self.levels = levels;
        self
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_fanout_logger::appenders::FileAppender;
    /// use rust_fanout_logger::TimestampFormat;
    ///
    /// let appender = FileAppender::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl Appender for FileAppender {
    fn name(&self) -> &str {
        &self.name
    }

    fn levels(&self) -> Level {
        self.levels
    }

    fn append(&self, event: &Event<'_>) {
        if !self.levels.matches(event.level()) {
            return;
        }

        let mut output = format_text(event, &self.timestamp_format, false);
        output.push('\n');

        if let Err(e) = self.writer.lock().write_all(output.as_bytes()) {
            eprintln!(
                "[LOGGER ERROR] Appender '{}' failed writing {}: {}",
                self.name,
                self.path.display(),
                e
            );
        }
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.writer.get_mut().flush();
    }
}
