//! Core logger types and traits

pub mod config;
pub mod error;
pub mod event;
pub mod fields;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod notifier;
pub mod sink;
pub mod timestamp;
pub mod value;

pub use config::{FormatKind, LoggerConfig, SinkKind};
pub use error::{LoggerError, Result};
pub use event::LogEvent;
pub use fields::Fields;
pub use formatter::Formatter;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use notifier::FailureNotifier;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
pub use value::{Opaque, Value};
