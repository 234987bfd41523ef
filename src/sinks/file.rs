//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends messages to a file, creating it if needed.
///
/// Writes are unbuffered and go through `&File`; each message is issued as a
/// single `write_all` on a file opened in append mode.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        (&self.file).write_all(bytes).map_err(|e| {
            LoggerError::io_operation(
                "writing log message",
                format!("cannot write to '{}'", self.path.display()),
                e,
            )
        })
    }

    fn flush(&self) -> Result<()> {
        (&self.file).flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
