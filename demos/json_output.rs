//! JSON output example
//!
//! Pretty-printed JSON objects on stdout at DEBUG level, plus a compact
//! logger whose failures are collected from a channel.
//!
//! Run with: cargo run --example json_output

use rust_kv_logger::prelude::*;
use std::time::Duration;

fn main() -> Result<()> {
    let logger = Logger::builder()
        .level(LogLevel::Debug)
        .formatter(JsonFormatter::pretty())
        .sink(StdoutSink::new())
        .build();

    logger.info(&["msg".into(), "info message".into()]);
    logger.warn(&["msg".into(), "warn message".into()]);
    logger.debug(&["msg".into(), "debug message".into()]);
    logger.error(&["msg".into(), "error message".into()]);

    let (tx, rx) = crossbeam_channel::unbounded();
    let compact = Logger::builder()
        .formatter(JsonFormatter::new())
        .failure_channel(tx)
        .build();

    compact.info(&["requests".into(), 1024.into(), "hit_rate".into(), 0.97.into()]);
    compact.info(&["ratio".into(), f64::NAN.into()]);

    if let Ok(err) = rx.recv_timeout(Duration::from_secs(1)) {
        eprintln!("logging failed: {}", err);
    }

    Ok(())
}
