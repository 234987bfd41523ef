//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod network;
pub mod writer;

pub use console::{StderrSink, StdoutSink};
pub use file::FileSink;
pub use memory::MemorySink;
pub use network::TcpSink;
pub use writer::WriterSink;

// Re-export trait for convenience
pub use crate::core::Sink;
