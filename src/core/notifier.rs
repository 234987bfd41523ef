//! Out-of-band delivery of render and write failures
//!
//! Each failure is sent from its own short-lived thread so the logging call
//! never waits on the channel. With an unbuffered (`bounded(0)`) channel and
//! no reader, every such thread stays parked in `send` until a reader shows up;
//! prefer `unbounded()` or a buffered channel.

use super::error::LoggerError;
use crossbeam_channel::Sender;
use std::thread;

/// Optional failure channel plus the fire-and-forget send policy
#[derive(Debug, Clone, Default)]
pub struct FailureNotifier {
    sender: Option<Sender<LoggerError>>,
}

impl FailureNotifier {
    pub fn new(sender: Sender<LoggerError>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// A notifier that silently drops every failure
    pub fn disabled() -> Self {
        Self { sender: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    /// Hand `error` to a detached sender thread.
    ///
    /// Returns `false` when a channel is configured but no thread could be
    /// spawned; the error is lost in that case.
    pub fn notify(&self, error: LoggerError) -> bool {
        let Some(sender) = &self.sender else {
            return true;
        };

        let sender = sender.clone();
        let spawned = thread::Builder::new()
            .name("logger-notify".to_string())
            .spawn(move || {
                // A disconnected receiver means nobody is listening any more
                let _ = sender.send(error);
            });

        match spawned {
            Ok(_) => true,
            Err(e) => {
                eprintln!("[LOGGER WARNING] Could not spawn failure notifier: {}", e);
                false
            }
        }
    }
}

impl From<Sender<LoggerError>> for FailureNotifier {
    fn from(sender: Sender<LoggerError>) -> Self {
        Self::new(sender)
    }
}
