//! Formatter trait: turns one log event into a finished message

use super::{error::Result, event::LogEvent};

/// Renders an event into the exact text handed to the sink.
///
/// A successful render ends with exactly one `\n`.
pub trait Formatter: Send + Sync {
    fn render(&self, event: &LogEvent<'_>) -> Result<String>;
    fn name(&self) -> &str;
}
