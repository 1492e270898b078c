//! # Safe Toolkit
//!
//! Concurrency building blocks: an asynchronous buffered logger and a
//! family of thread-safe, insertion-ordered containers.
//!
//! ## Features
//!
//! - **Non-blocking logging**: callers enqueue into a bounded queue and
//!   never wait for I/O; a full queue drops the entry with a warning
//! - **Single writer**: one worker thread formats and writes every line,
//!   so output is never interleaved
//! - **Orderly shutdown**: every enqueued entry is written before
//!   `shutdown` returns
//! - **Ordered containers**: `OrderedMap`, `Slice`, and `UniqueSlice`
//!   behind reader/writer locks, with snapshot reads

pub mod core;
pub mod macros;
pub mod safe;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LineFormatter, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        LoggerOptions, MessagePart, OverflowCallback, Result, Sink, DEFAULT_BUFFER_LEN, TIME_FORMAT,
    };
    pub use crate::parts;
    pub use crate::safe::{OrderedMap, Slice, UniqueSlice};
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
}

pub use crate::core::{
    LineFormatter, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
    LoggerOptions, MessagePart, OverflowCallback, Result, Sink, DEFAULT_BUFFER_LEN, TIME_FORMAT,
};
pub use safe::{OrderedMap, Slice, UniqueSlice};
pub use sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
