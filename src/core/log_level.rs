//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log entry, ordered `Debug < Info < Error`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug = 1,
    #[default]
    Info = 2,
    Error = 3,
}

impl LogLevel {
    pub const ALL: [LogLevel; 3] = [LogLevel::Debug, LogLevel::Info, LogLevel::Error];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Error => "error",
        }
    }

    /// Three-letter abbreviation used inside the bracketed tag.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DBG",
            LogLevel::Info => "INF",
            LogLevel::Error => "ERR",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Yellow,
            LogLevel::Info => Green,
            LogLevel::Error => Red,
        }
    }

    /// Parse a configured level, falling back to `Info` for anything unrecognized.
    ///
    /// ```
    /// use safe_toolkit::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse_lenient("DEBUG"), LogLevel::Debug);
    /// assert_eq!(LogLevel::parse_lenient("verbose"), LogLevel::Info);
    /// assert_eq!(LogLevel::parse_lenient(""), LogLevel::Info);
    /// ```
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
