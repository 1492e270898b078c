//! Logger configuration
//!
//! `LoggerOptions` is the serializable part of a logger's configuration.
//! Malformed values never fail construction: an unrecognized level becomes
//! `Info` and a zero buffer length becomes [`DEFAULT_BUFFER_LEN`].

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Queue capacity used when none (or zero) is configured.
pub const DEFAULT_BUFFER_LEN: usize = 100;

/// Serializable logger options
///
/// # Example
///
/// ```
/// use safe_toolkit::{LoggerOptions, LogLevel};
///
/// let opts = LoggerOptions::from_json_str(r#"{"level": "ERROR", "buffer_len": 2}"#).unwrap();
/// assert_eq!(opts.min_level(), LogLevel::Error);
/// assert_eq!(opts.capacity(), 2);
/// assert!(!opts.color);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    /// "debug", "info" or "error", case-insensitive
    pub level: String,
    /// Wrap level tags in ANSI color codes
    pub color: bool,
    /// Queue capacity; 0 selects the default
    pub buffer_len: usize,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Info.to_str().to_string(),
            color: false,
            buffer_len: 0,
        }
    }
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_buffer_len(mut self, buffer_len: usize) -> Self {
        self.buffer_len = buffer_len;
        self
    }

    /// Effective minimum level
    pub fn min_level(&self) -> LogLevel {
        LogLevel::parse_lenient(&self.level)
    }

    /// Effective queue capacity
    pub fn capacity(&self) -> usize {
        if self.buffer_len == 0 {
            DEFAULT_BUFFER_LEN
        } else {
            self.buffer_len
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger options",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = LoggerOptions::default();
        assert_eq!(opts.min_level(), LogLevel::Info);
        assert_eq!(opts.capacity(), DEFAULT_BUFFER_LEN);
        assert!(!opts.color);
    }

    #[test]
    fn test_unrecognized_level_falls_back_to_info() {
        let opts = LoggerOptions::new().with_level("loud");
        assert_eq!(opts.min_level(), LogLevel::Info);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let opts = LoggerOptions::from_json_str(r#"{"color": true}"#).unwrap();
        assert!(opts.color);
        assert_eq!(opts.min_level(), LogLevel::Info);
        assert_eq!(opts.capacity(), 100);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = LoggerOptions::from_json_str("{\"level\": ").unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_missing_file_is_io_operation_error() {
        let err = LoggerOptions::from_json_file("/nonexistent/dir/logger.json").unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("reading logger options"));
    }
}
