//! In-memory sink implementation

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects lines in memory.
///
/// Clones share the same buffer, so a clone kept by the caller can read
/// what the logger's worker wrote.
///
/// ```
/// use safe_toolkit::prelude::*;
///
/// let capture = MemorySink::new();
/// let logger = Logger::builder().output(capture.clone()).build().unwrap();
/// logger.info("svc", parts!["ready"]);
/// logger.shutdown().unwrap();
///
/// assert!(capture.contents().ends_with("[INF] [svc] ready\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// All lines, each terminated by a newline
    pub fn contents(&self) -> String {
        let lines = self.lines.lock();
        let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines.iter() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
