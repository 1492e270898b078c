//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod writer;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::MemorySink;
pub use writer::WriterSink;

pub use crate::core::Sink;
