//! Logging macros for ergonomic key/value calls.
//!
//! The level methods on [`Logger`](crate::Logger) take a slice of
//! [`Value`](crate::Value)s. These macros convert each argument with
//! `Value::from` and skip the conversion entirely when the level is filtered.
//!
//! # Examples
//!
//! ```
//! use rust_kv_logger::prelude::*;
//! use rust_kv_logger::info;
//!
//! let logger = Logger::builder().sink(MemorySink::new()).build();
//!
//! // A lone argument is the message
//! info!(logger, "Server started");
//!
//! // Otherwise arguments alternate key, value
//! let port = 8080;
//! info!(logger, "event", "listening", "port", port);
//! ```

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_kv_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_kv_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "code", 500, "retry", false);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log(level, &[$($crate::Value::from($arg)),*]);
        }
    }};
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use rust_kv_logger::prelude::*;
/// # let logger = Logger::builder().level(LogLevel::Trace).sink(MemorySink::new()).build();
/// use rust_kv_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "value", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Trace $(, $arg)*)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_kv_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_kv_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "counter", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug $(, $arg)*)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_kv_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_kv_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $arg)*)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_kv_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_kv_logger::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "attempt", 3, "of", 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn $(, $arg)*)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_kv_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_kv_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "code", 500, "message", "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $arg)*)
    };
}

/// Log a fatal-level message. The process keeps running.
///
/// # Examples
///
/// ```
/// # use rust_kv_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use rust_kv_logger::fatal;
/// fatal!(logger, "Critical system failure");
/// fatal!(logger, "reason", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Fatal $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use crate::formatters::JsonFormatter;
    use crate::sinks::MemorySink;
    use std::sync::Arc;

    fn json_logger(level: LogLevel) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .level(level)
            .formatter(JsonFormatter::new())
            .sink(sink.clone())
            .build();
        (logger, sink)
    }

    fn last_line(sink: &MemorySink) -> serde_json::Value {
        let lines = sink.lines();
        let line = lines.last().expect("at least one line");
        serde_json::from_str(line).expect("valid JSON")
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = json_logger(LogLevel::Info);
        log!(logger, LogLevel::Info, "Test message");
        assert_eq!(last_line(&sink)["msg"], "Test message");

        log!(logger, LogLevel::Warn, "code", 42, "ok", true,);
        let parsed = last_line(&sink);
        assert_eq!(parsed["code"], 42);
        assert_eq!(parsed["ok"], true);
        assert_eq!(parsed["level"], "WARN");
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = json_logger(LogLevel::Trace);
        trace!(logger, "t");
        debug!(logger, "d");
        info!(logger, "i");
        warn!(logger, "w");
        error!(logger, "e");
        fatal!(logger, "f");
        assert_eq!(sink.lines().len(), 6);
        assert_eq!(last_line(&sink)["level"], "FATAL");
    }

    #[test]
    fn test_no_arguments() {
        let (logger, sink) = json_logger(LogLevel::Info);
        info!(logger);
        let parsed = last_line(&sink);
        assert_eq!(parsed.as_object().map(|o| o.len()), Some(2));
    }

    #[test]
    fn test_filtered_arguments_not_evaluated() {
        let (logger, sink) = json_logger(LogLevel::Error);
        let mut evaluated = false;
        debug!(logger, "value", {
            evaluated = true;
            1
        });
        assert!(!evaluated);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_shared_logger() {
        let (logger, sink) = json_logger(LogLevel::Info);
        let logger = Arc::new(logger);
        let name = String::from("alice");
        info!(logger, "user", &name, "len", name.len());
        assert_eq!(last_line(&sink)["user"], "alice");
        assert_eq!(last_line(&sink)["len"], 5);
    }
}
