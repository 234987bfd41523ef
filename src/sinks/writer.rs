//! Sink over any `std::io::Write`

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::io::Write;

/// Wraps a writer in a mutex so it can be shared between logging threads.
///
/// # Example
///
/// ```
/// use rust_kv_logger::sinks::WriterSink;
/// use rust_kv_logger::core::Sink;
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write(b"hello\n").unwrap();
/// assert_eq!(sink.into_inner(), b"hello\n");
/// ```
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        self.writer
            .lock()
            .write_all(bytes)
            .map_err(|e| {
                LoggerError::io_operation("writing log message", format!("writer rejected write: {}", e), e)
            })
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
