//! Log event passed from the dispatcher to a formatter

use super::fields::Fields;
use super::log_level::LogLevel;
use super::value::Value;
use chrono::{DateTime, Utc};

/// One log call, alive only for the duration of its dispatch
#[derive(Debug, Clone, Copy)]
pub struct LogEvent<'a> {
    pub level: LogLevel,
    pub timestamp: DateTime<Utc>,
    pub args: &'a [Value],
}

impl<'a> LogEvent<'a> {
    pub fn new(level: LogLevel, timestamp: DateTime<Utc>, args: &'a [Value]) -> Self {
        Self {
            level,
            timestamp,
            args,
        }
    }

    /// Stamp the event with the current wall-clock time
    pub fn now(level: LogLevel, args: &'a [Value]) -> Self {
        Self::new(level, Utc::now(), args)
    }

    /// The arguments read as key/value pairs
    pub fn fields(&self) -> Fields {
        Fields::from_args(self.args)
    }
}
