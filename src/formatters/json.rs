//! Newline-delimited JSON formatter

use crate::core::{Formatter, LogEvent, Result, TimestampFormat, Value};
use std::collections::BTreeMap;

/// Field holding the level name
pub const LEVEL_KEY: &str = "level";
/// Field holding the formatted timestamp
pub const TIME_KEY: &str = "t";

/// Renders each event as one JSON object followed by `\n`.
///
/// Arguments are read as key/value pairs (a lone argument becomes `msg`), and
/// values keep their native JSON types. `level` and `t` are always present
/// and win over caller fields of the same name. Keys come out sorted.
///
/// # Example
///
/// ```
/// use rust_kv_logger::core::{Formatter, LogEvent, LogLevel, Value};
/// use rust_kv_logger::formatters::JsonFormatter;
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2024, 1, 5, 15, 4, 5).unwrap();
/// let args = [Value::from("a"), Value::from(1), Value::from("b"), Value::from(2.5)];
/// let line = JsonFormatter::new()
///     .render(&LogEvent::new(LogLevel::Info, t, &args))
///     .unwrap();
/// assert_eq!(
///     line,
///     "{\"a\":1,\"b\":2.5,\"level\":\"INFO\",\"t\":\"2024-Jan-05 15:04:05.000\"}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pretty: bool,
    timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    /// Compact, one object per line
    pub fn new() -> Self {
        Self::default()
    }

    /// Two-space indented objects
    pub fn pretty() -> Self {
        Self::new().with_pretty(true)
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    fn timestamp_value(&self, event: &LogEvent<'_>) -> serde_json::Value {
        match self.timestamp_format {
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(event.timestamp.timestamp_millis().into())
            }
            _ => serde_json::Value::String(self.timestamp_format.format(&event.timestamp)),
        }
    }
}

impl Formatter for JsonFormatter {
    fn render(&self, event: &LogEvent<'_>) -> Result<String> {
        let fields = event.fields();

        // Last write wins; only surviving values are encoded
        let mut latest: BTreeMap<&str, &Value> = BTreeMap::new();
        for (key, value) in fields.iter() {
            if key != LEVEL_KEY && key != TIME_KEY {
                latest.insert(key, value);
            }
        }

        let mut object = serde_json::Map::new();
        for (key, value) in latest {
            object.insert(key.to_string(), value.to_json(key)?);
        }

        object.insert(
            LEVEL_KEY.to_string(),
            serde_json::Value::String(event.level.to_str().to_string()),
        );
        object.insert(TIME_KEY.to_string(), self.timestamp_value(event));

        let object = serde_json::Value::Object(object);
        let mut message = if self.pretty {
            serde_json::to_string_pretty(&object)?
        } else {
            serde_json::to_string(&object)?
        };
        message.push('\n');
        Ok(message)
    }

    fn name(&self) -> &str {
        "json"
    }
}
