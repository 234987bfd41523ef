//! Basic logger usage example
//!
//! Demonstrates the default colored text logger and level filtering.
//!
//! Run with: cargo run --example basic_usage

use rust_kv_logger::prelude::*;
use rust_kv_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Rust KV Logger - Basic Usage Example ===\n");

    // Colored text on stdout, everything from TRACE up
    let logger = Logger::builder().level(LogLevel::Trace).build();

    println!("1. Logging at different levels:");
    logger.trace(&["This is a trace message".into()]);
    logger.debug(&["This is a debug message".into()]);
    logger.info(&["This is an info message".into()]);
    logger.warn(&["This is a warning message".into()]);
    logger.error(&["This is an error message".into()]);
    logger.fatal(&["This is a fatal message".into()]);

    println!("\n2. Text lines join their arguments with commas:");
    info!(logger, "user", "alice", "attempt", 3, "ratio", 0.25);
    warn!(logger, "queue depth", 1_500_000.0, "absent", None::<i32>);

    println!("\n3. The default logger only shows INFO and above:");
    let logger = Logger::new();
    logger.trace(&["Trace message (hidden)".into()]);
    logger.debug(&["Debug message (hidden)".into()]);
    logger.info(&["Info message (visible)".into()]);
    logger.warn(&["Warning message (visible)".into()]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
