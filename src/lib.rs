//! # Rust KV Logger
//!
//! A small leveled logger for key/value events.
//!
//! - **Levels**: `TRACE < DEBUG < INFO < WARN < ERROR < FATAL`, plus `OFF`
//! - **Two formats**: colored text lines for terminals, newline-delimited JSON
//!   for machines
//! - **Typed arguments**: integers, floats and booleans stay native in JSON
//! - **Never in the way**: logging calls return nothing and never panic; render
//!   and write failures are delivered out of band on an optional channel
//!
//! ```
//! use rust_kv_logger::prelude::*;
//! use rust_kv_logger::{debug, info};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .formatter(JsonFormatter::new())
//!     .sink(sink.clone())
//!     .build();
//!
//! info!(logger, "user", "alice", "attempt", 3);
//! debug!(logger, "below the default INFO level");
//!
//! assert_eq!(sink.lines().len(), 1);
//! ```

pub mod core;
pub mod formatters;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        FailureNotifier, Fields, FormatKind, Formatter, LogEvent, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Opaque, Result, Sink, SinkKind, TimestampFormat,
        Value,
    };
    pub use crate::formatters::{ColorMode, JsonFormatter, TextFormatter};
    pub use crate::sinks::{FileSink, MemorySink, StderrSink, StdoutSink, TcpSink, WriterSink};
}

pub use crate::core::{
    FailureNotifier, Fields, FormatKind, Formatter, LogEvent, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Opaque, Result, Sink, SinkKind, TimestampFormat,
    Value,
};
pub use formatters::{ColorMode, JsonFormatter, TextFormatter};
pub use sinks::{FileSink, MemorySink, StderrSink, StdoutSink, TcpSink, WriterSink};
