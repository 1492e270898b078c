//! Out-of-band diagnostics for the logger itself
//!
//! Queue-full warnings and sink failures cannot travel through the queue
//! they describe, so they are written synchronously to a separate sink
//! (standard error unless the builder supplies another one).

use super::sink::Sink;
use crate::sinks::ConsoleSink;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct Diagnostics {
    sink: Arc<Mutex<Box<dyn Sink>>>,
}

impl Diagnostics {
    pub(crate) fn new(sink: Box<dyn Sink>) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    pub(crate) fn stderr() -> Self {
        Self::new(Box::new(ConsoleSink::stderr()))
    }

    /// Write a diagnostic line. Failures are swallowed: there is nowhere
    /// left to report them.
    pub(crate) fn emit(&self, line: &str) {
        let mut sink = self.sink.lock();
        let _ = sink.write_line(line);
        let _ = sink.flush();
    }

    /// Warning for an entry rejected by a full queue.
    pub(crate) fn queue_full(&self, message: &str) {
        self.emit(&format!(
            "Logger buffer is full, dropping log message: [{}]",
            message
        ));
    }
}
