//! TCP sink for remote logging
//!
//! Sends each message to a remote server over one TCP connection. A failed
//! write is reported and the message is lost; there is no reconnect or retry.

use crate::core::{LoggerError, Result, Sink};
use std::io::Write;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Default write timeout for the connection
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Sink that streams messages to a TCP server
///
/// # Example
///
/// ```no_run
/// use rust_kv_logger::prelude::*;
///
/// let sink = TcpSink::connect("127.0.0.1:5170").expect("log collector reachable");
/// let logger = Logger::builder()
///     .formatter(JsonFormatter::new())
///     .sink(sink)
///     .build();
/// logger.info(&["msg".into(), "sent over TCP".into()]);
/// ```
#[derive(Debug)]
pub struct TcpSink {
    stream: TcpStream,
    address: String,
}

impl TcpSink {
    /// Connect with the default write timeout
    pub fn connect(addr: impl ToSocketAddrs + ToString) -> Result<Self> {
        Self::connect_with_timeout(addr, DEFAULT_WRITE_TIMEOUT)
    }

    pub fn connect_with_timeout(
        addr: impl ToSocketAddrs + ToString,
        write_timeout: Duration,
    ) -> Result<Self> {
        let address = addr.to_string();
        let stream = TcpStream::connect(&addr).map_err(|e| {
            LoggerError::io_operation("connecting log sink", format!("cannot reach {}", address), e)
        })?;

        // Bound how long a single log call can stall on a slow peer
        stream.set_write_timeout(Some(write_timeout))?;

        // Low-latency delivery of small messages
        stream.set_nodelay(true)?;

        Ok(Self { stream, address })
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Sink for TcpSink {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        (&self.stream).write_all(bytes).map_err(|e| {
            LoggerError::io_operation(
                "writing log message",
                format!("cannot send to {}", self.address),
                e,
            )
        })
    }

    fn flush(&self) -> Result<()> {
        (&self.stream).flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "tcp"
    }
}
