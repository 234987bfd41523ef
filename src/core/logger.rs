//! Main logger implementation
//!
//! Each call walks the same short path on the caller's thread: compare the
//! level, stamp the time, render, write. Render and write failures never reach
//! the caller; they go to the optional failure channel via
//! [`FailureNotifier`] and are counted in [`LoggerMetrics`].

use super::{
    error::LoggerError,
    event::LogEvent,
    formatter::Formatter,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    notifier::FailureNotifier,
    sink::Sink,
    value::Value,
};
use crate::formatters::TextFormatter;
use crate::sinks::StdoutSink;
use crossbeam_channel::Sender;

/// Leveled key/value logger.
///
/// Configuration is fixed at construction. The logger is `Send + Sync`; share
/// it across threads with `Arc<Logger>`. It takes no lock around the sink, so
/// concurrent callers rely on the sink's own synchronization.
///
/// # Example
///
/// ```
/// use rust_kv_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .formatter(JsonFormatter::new())
///     .sink(sink.clone())
///     .build();
///
/// logger.info(&["user".into(), "alice".into(), "attempt".into(), 3.into()]);
/// logger.trace(&["suppressed".into()]);
///
/// assert_eq!(sink.lines().len(), 1);
/// assert!(sink.contents().contains("\"attempt\":3"));
/// ```
pub struct Logger {
    level: LogLevel,
    formatter: Box<dyn Formatter>,
    sink: Box<dyn Sink>,
    notifier: FailureNotifier,
    metrics: LoggerMetrics,
}

impl Logger {
    /// INFO level, colored text, standard output, no failure channel
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && LogLevel::is_allowed(self.level, level)
    }

    /// Log `args` at `level`.
    ///
    /// Nothing happens below the configured level, not even a clock read.
    /// `LogLevel::Off` is a filter setting, not an event level, and is ignored.
    pub fn log(&self, level: LogLevel, args: &[Value]) {
        if !self.is_enabled(level) {
            return;
        }

        let event = LogEvent::now(level, args);
        let message = match self.formatter.render(&event) {
            Ok(message) => message,
            Err(e) => {
                self.metrics.record_render_failure();
                self.report(e);
                return;
            }
        };

        match self.sink.write(message.as_bytes()) {
            Ok(()) => {
                self.metrics.record_logged();
            }
            Err(e) => {
                self.metrics.record_write_failure();
                self.report(e);
            }
        }
    }

    fn report(&self, error: LoggerError) {
        if !self.notifier.notify(error) {
            self.metrics.record_notification_dropped();
        }
    }

    #[inline]
    pub fn trace(&self, args: &[Value]) {
        self.log(LogLevel::Trace, args);
    }

    #[inline]
    pub fn debug(&self, args: &[Value]) {
        self.log(LogLevel::Debug, args);
    }

    #[inline]
    pub fn info(&self, args: &[Value]) {
        self.log(LogLevel::Info, args);
    }

    #[inline]
    pub fn warn(&self, args: &[Value]) {
        self.log(LogLevel::Warn, args);
    }

    #[inline]
    pub fn error(&self, args: &[Value]) {
        self.log(LogLevel::Error, args);
    }

    /// Highest severity. Does not exit or panic; that is up to the caller.
    #[inline]
    pub fn fatal(&self, args: &[Value]) {
        self.log(LogLevel::Fatal, args);
    }

    /// Flush the sink. Unlike the logging calls this reports its error.
    pub fn flush(&self) -> super::error::Result<()> {
        self.sink.flush()
    }

    /// Get the logger metrics for observability
    ///
    /// # Example
    ///
    /// ```
    /// use rust_kv_logger::prelude::*;
    ///
    /// let logger = Logger::builder().sink(MemorySink::new()).build();
    /// logger.info(&["started".into()]);
    ///
    /// let metrics = logger.metrics();
    /// assert_eq!(metrics.total_logged(), 1);
    /// assert_eq!(metrics.failure_count(), 0);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn formatter_name(&self) -> &str {
        self.formatter.name()
    }

    pub fn sink_name(&self) -> &str {
        self.sink.name()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("formatter", &self.formatter.name())
            .field("sink", &self.sink.name())
            .field("notifier", &self.notifier)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Unset options default to INFO, [`TextFormatter`], [`StdoutSink`] and no
/// failure channel.
///
/// # Example
/// ```
/// use rust_kv_logger::prelude::*;
///
/// let (tx, rx) = crossbeam_channel::unbounded();
/// let logger = Logger::builder()
///     .level(LogLevel::Warn)
///     .formatter(JsonFormatter::pretty())
///     .sink(StderrSink::new())
///     .failure_channel(tx)
///     .build();
/// assert_eq!(logger.level(), LogLevel::Warn);
/// # drop(rx);
/// ```
pub struct LoggerBuilder {
    level: LogLevel,
    formatter: Option<Box<dyn Formatter>>,
    sink: Option<Box<dyn Sink>>,
    notifier: FailureNotifier,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            formatter: None,
            sink: None,
            notifier: FailureNotifier::disabled(),
        }
    }

    /// Set the lowest level that is emitted
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Set an already boxed formatter, e.g. one chosen at runtime
    #[must_use = "builder methods return a new value"]
    pub fn boxed_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Set an already boxed sink, e.g. one chosen at runtime
    #[must_use = "builder methods return a new value"]
    pub fn boxed_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Receive render and write failures on `sender`.
    ///
    /// Every failure is sent from its own detached thread. Use an unbounded or
    /// buffered channel: with `bounded(0)` and no reader each of those threads
    /// waits until someone reads.
    #[must_use = "builder methods return a new value"]
    pub fn failure_channel(mut self, sender: Sender<LoggerError>) -> Self {
        self.notifier = FailureNotifier::new(sender);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            level: self.level,
            formatter: self
                .formatter
                .unwrap_or_else(|| Box::new(TextFormatter::new())),
            sink: self.sink.unwrap_or_else(|| Box::new(StdoutSink::new())),
            notifier: self.notifier,
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
