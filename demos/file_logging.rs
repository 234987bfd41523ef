//! File logging example
//!
//! Demonstrates a logger built from configuration that appends JSON lines to
//! a file. `LOG_LEVEL`, `LOG_FORMAT` and `LOG_PRETTY` override the settings.
//!
//! Run with: cargo run --example file_logging

use rust_kv_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust KV Logger - File Logging Example ===\n");

    let config = LoggerConfig {
        level: LogLevel::Debug,
        format: FormatKind::Json,
        sink: SinkKind::File("application.log".into()),
        ..LoggerConfig::default()
    }
    .apply_env()?;

    let logger = config.into_builder()?.build();

    logger.info(&["Application started".into()]);
    logger.debug(&["Loading configuration...".into()]);
    logger.warn(&["Using default settings for some options".into()]);
    logger.error(&["Failed to load optional plugin".into()]);

    for i in 1..=5 {
        logger.info(&["item".into(), i.into(), "of".into(), 5.into()]);
        if i == 3 {
            logger.warn(&["item".into(), i.into(), "slow".into(), true.into()]);
        }
    }

    logger.info(&["All operations completed".into()]);
    logger.flush()?;

    let metrics = logger.metrics();
    println!(
        "Wrote {} messages ({} failures)",
        metrics.total_logged(),
        metrics.failure_count()
    );
    println!("Check 'application.log' for the full log output");

    Ok(())
}
