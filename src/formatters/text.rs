//! Human-readable, ANSI-colored line formatter

use crate::core::{Formatter, LogEvent, LogLevel, Result, TimestampFormat};
use serde::{Deserialize, Serialize};

/// Gap between the timestamp bracket and the arguments
const SEPARATOR: &str = "  ";

/// When to wrap lines in ANSI color sequences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    Always,
    Never,
    /// Follow `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE` and tty detection
    Auto,
}

/// Renders `[LEVEL] [timestamp]  arg,arg,arg`.
///
/// Arguments are positional: they are rendered with [`Value`]'s `Display`
/// and joined by commas, without any key/value pairing. When colored, the
/// whole line (but not its newline) is wrapped in one color sequence.
///
/// [`Value`]: crate::core::Value
///
/// # Example
///
/// ```
/// use rust_kv_logger::core::{Formatter, LogEvent, LogLevel, Value};
/// use rust_kv_logger::formatters::TextFormatter;
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2024, 1, 5, 15, 4, 5).unwrap();
/// let args = [Value::from("count"), Value::from(3)];
/// let line = TextFormatter::plain()
///     .render(&LogEvent::new(LogLevel::Warn, t, &args))
///     .unwrap();
/// assert_eq!(line, "[WARN ] [2024-Jan-05 15:04:05.000]  count,3\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    color_mode: ColorMode,
    timestamp_format: TimestampFormat,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A formatter that never emits color sequences
    pub fn plain() -> Self {
        Self::new().with_color_mode(ColorMode::Never)
    }

    #[must_use]
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    fn use_colors(&self) -> bool {
        match self.color_mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    /// Escape control characters so one event stays on one line.
    /// Backslashes are doubled first so the escaping stays reversible.
    fn sanitize(text: &str) -> String {
        text.replace('\\', "\\\\")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn join_args(event: &LogEvent<'_>) -> String {
        event
            .args
            .iter()
            .map(|arg| Self::sanitize(&arg.to_string()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Formatter for TextFormatter {
    fn render(&self, event: &LogEvent<'_>) -> Result<String> {
        let line = format!(
            "[{:5}] [{}]{}{}",
            event.level,
            self.timestamp_format.format(&event.timestamp),
            SEPARATOR,
            Self::join_args(event)
        );

        if !self.use_colors() {
            return Ok(line + "\n");
        }

        let weight = match event.level {
            LogLevel::Trace | LogLevel::Debug => 0,
            _ => 1,
        };
        Ok(format!(
            "\x1b[{};{}m{}\x1b[0m\n",
            weight,
            event.level.color_code().to_fg_str(),
            line
        ))
    }

    fn name(&self) -> &str {
        "text"
    }
}
