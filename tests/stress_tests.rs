//! Stress tests for shared loggers
//!
//! These tests verify:
//! - A logger shared through `Arc` delivers every event from every thread
//! - Per-thread ordering is preserved even when threads interleave
//! - File output stays line-atomic under concurrent writers

use rust_fanout_logger::appenders::{FileAppender, MemoryAppender};
use rust_fanout_logger::{Level, Logger, Message};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

#[test]
fn test_concurrent_logging_delivers_everything() {
    let all = Arc::new(MemoryAppender::new());
    let severe = Arc::new(MemoryAppender::new().with_levels(Level::ERROR | Level::FATAL));
    let logger = Arc::new(
        Logger::builder()
            .appender(Arc::clone(&all))
            .appender(Arc::clone(&severe))
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    if i % 10 == 0 {
                        logger.error(format!("thread {} error {}", thread_id, i));
                    } else {
                        logger.debug(format!("thread {} message {}", thread_id, i));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(all.len(), THREADS * PER_THREAD);
    assert_eq!(severe.len(), THREADS * PER_THREAD / 10);
    assert!(severe.events().iter().all(|e| e.level == Level::ERROR));
}

#[test]
fn test_per_thread_order_is_preserved() {
    let memory = Arc::new(MemoryAppender::new());
    let logger = Arc::new(Logger::builder().appender(Arc::clone(&memory)).build());

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.info(format!("{}:{}", thread_id, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let mut next = vec![0usize; THREADS];
    for event in memory.events() {
        let Some(Message::Text(text)) = event.message else {
            panic!("expected a text payload");
        };
        let (thread_id, i) = text.split_once(':').expect("thread:index payload");
        let thread_id: usize = thread_id.parse().unwrap();
        let i: usize = i.parse().unwrap();
        assert_eq!(i, next[thread_id], "thread {} out of order", thread_id);
        next[thread_id] += 1;
    }
    assert!(next.iter().all(|&n| n == PER_THREAD));
}

#[test]
fn test_concurrent_file_writes_stay_whole() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let appender = FileAppender::new(&log_file).expect("Failed to create appender");
    let logger = Arc::new(Logger::builder().appender(appender).build());

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.warning(format!("Thread {} - Message {}", thread_id, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    drop(logger);

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    assert!(lines
        .iter()
        .all(|line| line.contains("[WARNING]") && line.contains("- Thread ")));
}
