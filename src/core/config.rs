//! Declarative logger configuration
//!
//! `LoggerConfig` describes a logger as data so it can come from a JSON file
//! and be adjusted by environment variables:
//!
//! - `LOG_LEVEL`: `trace` … `fatal`, `off`
//! - `LOG_FORMAT`: `text` or `json`
//! - `LOG_PRETTY`: `true`/`false` (also `1`/`0`, `yes`/`no`)

use super::error::{LoggerError, Result};
use super::formatter::Formatter;
use super::log_level::LogLevel;
use super::logger::LoggerBuilder;
use super::sink::Sink;
use super::timestamp::TimestampFormat;
use crate::formatters::{ColorMode, JsonFormatter, TextFormatter};
use crate::sinks::{FileSink, StderrSink, StdoutSink};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_LEVEL: &str = "LOG_LEVEL";
pub const ENV_FORMAT: &str = "LOG_FORMAT";
pub const ENV_PRETTY: &str = "LOG_PRETTY";

/// Which formatter to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    #[default]
    Text,
    Json,
}

impl FromStr for FormatKind {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(FormatKind::Text),
            "json" => Ok(FormatKind::Json),
            _ => Err(LoggerError::config(
                "log format",
                format!("expected 'text' or 'json', got '{}'", s),
            )),
        }
    }
}

/// Where messages go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    #[default]
    Stdout,
    Stderr,
    File(PathBuf),
}

/// Logger settings
///
/// # Example
///
/// ```
/// use rust_kv_logger::core::{FormatKind, LoggerConfig};
/// use rust_kv_logger::LogLevel;
///
/// let config = LoggerConfig::from_json_str(r#"{"level": "DEBUG", "format": "json"}"#).unwrap();
/// assert_eq!(config.level, LogLevel::Debug);
/// assert_eq!(config.format, FormatKind::Json);
///
/// let logger = config.into_builder().unwrap().build();
/// assert_eq!(logger.formatter_name(), "json");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: FormatKind,
    /// Indent JSON output; ignored by the text format
    pub pretty: bool,
    /// Colors for the text format; ignored by JSON
    pub color: ColorMode,
    pub sink: SinkKind,
    pub timestamp: TimestampFormat,
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| LoggerError::config("LoggerConfig", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    /// Override fields from `LOG_LEVEL`, `LOG_FORMAT` and `LOG_PRETTY`
    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Override fields from any variable lookup
    pub fn apply_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LEVEL) {
            self.level = level.parse()?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = format.parse()?;
        }
        if let Some(pretty) = lookup(ENV_PRETTY) {
            self.pretty = parse_flag(ENV_PRETTY, &pretty)?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(layout) = &self.timestamp {
            TimestampFormat::custom(layout.as_str())?;
        }
        Ok(())
    }

    /// Turn the settings into a builder; opening a file sink can fail here
    pub fn into_builder(self) -> Result<LoggerBuilder> {
        self.validate()?;

        let formatter: Box<dyn Formatter> = match self.format {
            FormatKind::Text => Box::new(
                TextFormatter::new()
                    .with_color_mode(self.color)
                    .with_timestamp_format(self.timestamp),
            ),
            FormatKind::Json => Box::new(
                JsonFormatter::new()
                    .with_pretty(self.pretty)
                    .with_timestamp_format(self.timestamp),
            ),
        };

        let sink: Box<dyn Sink> = match self.sink {
            SinkKind::Stdout => Box::new(StdoutSink::new()),
            SinkKind::Stderr => Box::new(StderrSink::new()),
            SinkKind::File(path) => Box::new(FileSink::new(path)?),
        };

        Ok(LoggerBuilder::new()
            .level(self.level)
            .boxed_formatter(formatter)
            .boxed_sink(sink))
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LoggerError::config(
            name,
            format!("expected a boolean, got '{}'", value),
        )),
    }
}
