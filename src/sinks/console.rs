//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes lines to standard output or standard error.
///
/// The stream lock is taken per line, so lines from this sink never
/// interleave with other writers mid-line.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        match self.stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", line)?,
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}
