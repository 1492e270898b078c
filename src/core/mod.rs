//! Core logger types and traits

pub mod config;
pub(crate) mod diagnostics;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;

pub use config::{LoggerOptions, DEFAULT_BUFFER_LEN};
pub use error::{LoggerError, Result};
pub use formatter::{LineFormatter, TIME_FORMAT};
pub use log_entry::{LogEntry, MessagePart};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, OverflowCallback};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
