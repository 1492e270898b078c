//! Line formatting for log entries
//!
//! Every entry becomes exactly one line:
//!
//! ```text
//! 2025/01/08 10:30:45 [INF] [server] listening on 8080
//! ```
//!
//! The timestamp is UTC, the level tag is optionally ANSI-colored, and the
//! message parts are joined by single spaces with surrounding whitespace
//! trimmed.

use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};

/// strftime layout of the leading timestamp.
pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFormatter {
    color: bool,
}

impl LineFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Bracketed level tag, e.g. `[INF]` or `[\x1b[32mINF\x1b[0m]`.
    pub fn level_tag(&self, level: LogLevel) -> String {
        if self.color {
            format!(
                "[\x1b[{}m{}{}]",
                level.color_code().to_fg_str(),
                level.abbreviation(),
                ANSI_RESET
            )
        } else {
            format!("[{}]", level.abbreviation())
        }
    }

    pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
        timestamp.format(TIME_FORMAT).to_string()
    }

    /// Format an entry without the trailing newline.
    ///
    /// Parts are written as rendered, except that any `\r` or `\n` they
    /// contain is escaped to the two-character sequences `\r` and `\n`, so
    /// one entry is always exactly one output line.
    pub fn format(&self, entry: &LogEntry) -> String {
        let mut line = String::with_capacity(64);
        line.push_str(&Self::format_timestamp(&entry.timestamp()));
        line.push(' ');
        line.push_str(&self.level_tag(entry.level()));
        line.push_str(" [");
        line.push_str(entry.label());
        line.push_str("] ");
        for part in entry.parts() {
            line.push_str(&part.to_string());
            line.push(' ');
        }
        sanitize_line(line.trim())
    }
}

/// Escape line breaks so a single entry can never span several lines.
fn sanitize_line(line: &str) -> String {
    line.replace('\r', "\\r").replace('\n', "\\n")
}
