//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Lines from concurrent callers never interleave
//! - No message is lost under concurrent high-volume logging
//! - Every failure reaches the failure channel

use crossbeam_channel::unbounded;
use rust_kv_logger::prelude::*;
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 500;

fn spawn_loggers<F>(logger: &Arc<Logger>, body: F)
where
    F: Fn(&Logger, usize, usize) + Send + Sync + 'static,
{
    let body = Arc::new(body);
    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(logger);
            let body = Arc::clone(&body);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    body(&logger, thread_id, i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }
}

/// Concurrent JSON lines all parse and none go missing
#[test]
fn test_concurrent_json_lines_intact() {
    let sink = MemorySink::new();
    let logger = Arc::new(
        Logger::builder()
            .level(LogLevel::Trace)
            .formatter(JsonFormatter::new())
            .sink(sink.clone())
            .build(),
    );

    spawn_loggers(&logger, |logger, thread_id, i| {
        logger.info(&["thread".into(), thread_id.into(), "seq".into(), i.into()]);
    });

    let lines = sink.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        let parsed: serde_json::Value = serde_json::from_str(line).expect("line is not torn");
        let key = (
            parsed["thread"].as_u64().expect("thread id"),
            parsed["seq"].as_u64().expect("sequence number"),
        );
        assert!(seen.insert(key), "duplicate line {:?}", key);
    }
    assert_eq!(logger.metrics().total_logged(), (THREADS * PER_THREAD) as u64);
}

/// A shared file sink keeps whole messages intact
#[test]
fn test_concurrent_writer_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");

    let logger = Arc::new(
        Logger::builder()
            .formatter(TextFormatter::plain())
            .sink(FileSink::new(&log_file).expect("Failed to open log file"))
            .build(),
    );

    spawn_loggers(&logger, |logger, thread_id, i| {
        logger.warn(&["payload".into(), "x".repeat(64).into(), thread_id.into(), i.into()]);
    });
    logger.flush().expect("Failed to flush");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for line in lines {
        assert!(line.starts_with("[WARN ] ["), "torn line: {:?}", line);
        assert!(line.contains(&format!("payload,{}", "x".repeat(64))));
    }
}

/// Filtered calls from many threads leave no trace
#[test]
fn test_concurrent_filtered_calls() {
    let sink = MemorySink::new();
    let logger = Arc::new(
        Logger::builder()
            .level(LogLevel::Error)
            .sink(sink.clone())
            .build(),
    );

    spawn_loggers(&logger, |logger, _, i| {
        logger.debug(&["noise".into(), i.into()]);
    });

    assert!(sink.is_empty());
    assert_eq!(logger.metrics().total_logged(), 0);
}

/// A sink that fails every other write
struct FlakyWriter {
    writes: Arc<AtomicUsize>,
}

impl Write for FlakyWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.writes.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
            Err(io::Error::new(io::ErrorKind::Other, "flaky"))
        } else {
            Ok(buf.len())
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Every failed write is delivered on the channel exactly once
#[test]
fn test_all_failures_delivered() {
    let (tx, rx) = unbounded();
    let writes = Arc::new(AtomicUsize::new(0));
    let logger = Arc::new(
        Logger::builder()
            .formatter(TextFormatter::plain())
            .sink(WriterSink::new(FlakyWriter {
                writes: Arc::clone(&writes),
            }))
            .failure_channel(tx)
            .build(),
    );

    spawn_loggers(&logger, |logger, _, i| {
        logger.error(&["attempt".into(), i.into()]);
    });

    let total = THREADS * PER_THREAD;
    assert_eq!(writes.load(Ordering::SeqCst), total);

    let expected_failures = total / 2;
    for _ in 0..expected_failures {
        let err = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("failure delivered");
        assert!(err.is_sink_error());
    }
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());

    let metrics = logger.metrics();
    assert_eq!(metrics.write_failures(), expected_failures as u64);
    assert_eq!(metrics.total_logged(), (total - expected_failures) as u64);
}
