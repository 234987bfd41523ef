//! Console sinks

use crate::core::{LoggerError, Result, Sink};
use std::io::Write;

/// Writes to standard output; the default sink.
///
/// `Stdout` takes its own lock per write, so concurrent messages never
/// interleave within a line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        std::io::stdout()
            .lock()
            .write_all(bytes)
            .map_err(|e| LoggerError::io_operation("writing log message", "stdout rejected write", e))
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

/// Writes to standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StderrSink {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        std::io::stderr()
            .lock()
            .write_all(bytes)
            .map_err(|e| LoggerError::io_operation("writing log message", "stderr rejected write", e))
    }

    fn flush(&self) -> Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stderr"
    }
}
