//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::fmt;

/// One piece of a log message, rendered with `Display` on the worker thread.
pub type MessagePart = Box<dyn fmt::Display + Send + 'static>;

/// An immutable log record created at the call site and consumed by the worker.
pub struct LogEntry {
    timestamp: DateTime<Utc>,
    level: LogLevel,
    label: String,
    parts: Vec<MessagePart>,
}

impl LogEntry {
    pub fn new(level: LogLevel, label: impl Into<String>, parts: Vec<MessagePart>) -> Self {
        Self::at(Utc::now(), level, label, parts)
    }

    /// Create an entry with an explicit timestamp.
    pub fn at(
        timestamp: DateTime<Utc>,
        level: LogLevel,
        label: impl Into<String>,
        parts: Vec<MessagePart>,
    ) -> Self {
        Self {
            timestamp,
            level,
            label: label.into(),
            parts,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parts(&self) -> &[MessagePart] {
        &self.parts
    }

    /// Render the message parts joined by single spaces.
    pub fn message(&self) -> String {
        let mut out = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&part.to_string());
        }
        out
    }
}

impl fmt::Debug for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEntry")
            .field("timestamp", &self.timestamp)
            .field("level", &self.level)
            .field("label", &self.label)
            .field("message", &self.message())
            .finish()
    }
}
