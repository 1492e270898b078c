//! Sink trait for log output destinations

use super::error::Result;

/// A destination for formatted log lines.
///
/// The logger's worker thread owns its sink exclusively, so implementations
/// need no internal locking.
pub trait Sink: Send {
    /// Write one line; the sink appends the terminating newline.
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
