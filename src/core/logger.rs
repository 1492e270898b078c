//! Asynchronous buffered logger
//!
//! Callers on any thread enqueue entries into a bounded queue; a single
//! worker thread formats them and writes them to the output sink. A full
//! queue never blocks the caller: the entry is dropped and a warning is
//! written to the diagnostics sink.

use super::{
    config::{LoggerOptions, DEFAULT_BUFFER_LEN},
    diagnostics::Diagnostics,
    error::{panic_message, LoggerError, Result},
    formatter::LineFormatter,
    log_entry::{LogEntry, MessagePart},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    sink::Sink,
};
use crate::sinks::ConsoleSink;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::RwLock;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Maximum number of entries the worker writes between sink flushes
const BATCH_SIZE: usize = 64;

const WORKER_THREAD_NAME: &str = "async-logger";

/// Stand-in for a message whose parts panicked while rendering
const UNPRINTABLE: &str = "<unprintable>";

/// Callback for drop notifications
///
/// Called on the logging thread each time an entry is dropped because the
/// queue is full. The parameter is the total count of dropped entries so far.
pub type OverflowCallback = Arc<dyn Fn(u64) + Send + Sync>;

#[derive(Debug, Clone, Copy)]
struct Settings {
    min_level: LogLevel,
    color: bool,
}

/// Asynchronous logger with a bounded queue and a single writer thread
///
/// `Logger` is `Send + Sync`; share it by reference (or behind an `Arc`)
/// across producer threads. Call [`Logger::shutdown`] to flush everything
/// queued and observe a worker failure; dropping the logger performs the
/// same drain but can only report failures to the diagnostics sink.
pub struct Logger {
    settings: Arc<RwLock<Settings>>,
    sender: Option<Sender<LogEntry>>,
    worker: Option<JoinHandle<()>>,
    metrics: Arc<LoggerMetrics>,
    diagnostics: Diagnostics,
    on_drop: Option<OverflowCallback>,
    capacity: usize,
}

impl Logger {
    /// Start a logger writing to standard output.
    ///
    /// ```
    /// use safe_toolkit::{Logger, LoggerOptions};
    /// use safe_toolkit::info;
    ///
    /// let logger = Logger::new(LoggerOptions::new().with_level("debug")).unwrap();
    /// info!(logger, "main", "started with", 4, "workers");
    /// logger.shutdown().unwrap();
    /// ```
    pub fn new(options: LoggerOptions) -> Result<Self> {
        Self::builder().options(&options).build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn start(
        settings: Settings,
        capacity: usize,
        sink: Box<dyn Sink>,
        diagnostics: Diagnostics,
        on_drop: Option<OverflowCallback>,
    ) -> Result<Self> {
        let (sender, receiver) = bounded(capacity);
        let settings = Arc::new(RwLock::new(settings));
        let metrics = Arc::new(LoggerMetrics::new());

        let worker = Worker {
            receiver,
            sink,
            settings: Arc::clone(&settings),
            metrics: Arc::clone(&metrics),
            diagnostics: diagnostics.clone(),
        };
        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || worker.run())
            .map_err(|e| {
                LoggerError::io_operation("starting logger", "cannot spawn worker thread", e)
            })?;

        Ok(Self {
            settings,
            sender: Some(sender),
            worker: Some(handle),
            metrics,
            diagnostics,
            on_drop,
            capacity,
        })
    }

    /// Enqueue an entry if `level` passes the minimum level.
    ///
    /// Never blocks on the queue. When the queue is full the entry is
    /// dropped and a single warning line is written synchronously to the
    /// diagnostics sink on the calling thread; that write is the only I/O
    /// a caller can ever perform here.
    ///
    /// Ordering across threads is best-effort: the worker writes entries in
    /// the order their enqueue completed, which is a race between producers.
    pub fn log(&self, level: LogLevel, label: impl Into<String>, parts: Vec<MessagePart>) {
        if level < self.settings.read().min_level {
            return;
        }

        let Some(sender) = self.sender.as_ref() else {
            return;
        };

        match sender.try_send(LogEntry::new(level, label, parts)) {
            Ok(()) => {
                self.metrics.record_enqueued();
            }
            Err(TrySendError::Full(entry)) => self.handle_overflow(entry),
            Err(TrySendError::Disconnected(entry)) => {
                // Worker is gone (it panicked); nothing can drain the entry
                self.metrics.record_dropped();
                self.diagnostics.emit(&format!(
                    "[LOGGER ERROR] Log worker is gone, dropping log message: [{}]",
                    render_message(&entry)
                ));
            }
        }
    }

    fn handle_overflow(&self, entry: LogEntry) {
        let dropped = self.metrics.record_dropped() + 1;
        self.diagnostics.queue_full(&render_message(&entry));

        if let Some(ref callback) = self.on_drop {
            callback(dropped);
        }
    }

    #[inline]
    pub fn debug(&self, label: impl Into<String>, parts: Vec<MessagePart>) {
        self.log(LogLevel::Debug, label, parts);
    }

    #[inline]
    pub fn info(&self, label: impl Into<String>, parts: Vec<MessagePart>) {
        self.log(LogLevel::Info, label, parts);
    }

    #[inline]
    pub fn error(&self, label: impl Into<String>, parts: Vec<MessagePart>) {
        self.log(LogLevel::Error, label, parts);
    }

    pub fn min_level(&self) -> LogLevel {
        self.settings.read().min_level
    }

    pub fn set_min_level(&self, level: LogLevel) {
        self.settings.write().min_level = level;
    }

    pub fn color(&self) -> bool {
        self.settings.read().color
    }

    /// Takes effect from the next batch the worker writes.
    pub fn set_color(&self, color: bool) {
        self.settings.write().color = color;
    }

    /// Queue capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently waiting in the queue
    pub fn queued(&self) -> usize {
        self.sender.as_ref().map_or(0, Sender::len)
    }

    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Close the queue, write every entry already enqueued, and wait for
    /// the worker to exit.
    ///
    /// Blocks until the drain completes; the wait is bounded by the number
    /// of entries queued. Consuming `self` rules out logging after shutdown
    /// and shutting down twice.
    pub fn shutdown(mut self) -> Result<()> {
        self.stop()
    }

    fn stop(&mut self) -> Result<()> {
        // Dropping the only sender closes the queue
        drop(self.sender.take());

        let Some(handle) = self.worker.take() else {
            return Ok(());
        };
        handle.join().map_err(LoggerError::worker_panicked)?;

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            self.diagnostics.emit(&format!(
                "[LOGGER WARNING] Logger shut down with {} dropped entries (drop rate: {:.2}%)",
                dropped,
                self.metrics.drop_rate()
            ));
        }
        Ok(())
    }
}

/// Render an entry's parts on the calling thread.
///
/// Used only on the drop paths. A panicking part yields `<unprintable>`
/// instead of unwinding into `log`.
fn render_message(entry: &LogEntry) -> String {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| entry.message()))
        .unwrap_or_else(|_| UNPRINTABLE.to_string())
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            self.diagnostics.emit(&format!("[LOGGER ERROR] {}", e));
        }
    }
}

/// The consumer half: owns the receiver and the sink.
struct Worker {
    receiver: Receiver<LogEntry>,
    sink: Box<dyn Sink>,
    settings: Arc<RwLock<Settings>>,
    metrics: Arc<LoggerMetrics>,
    diagnostics: Diagnostics,
}

impl Worker {
    fn run(mut self) {
        let mut batch = Vec::with_capacity(BATCH_SIZE);

        // recv only fails once the queue is both closed and empty
        while let Ok(entry) = self.receiver.recv() {
            batch.push(entry);
            while batch.len() < BATCH_SIZE {
                match self.receiver.try_recv() {
                    Ok(entry) => batch.push(entry),
                    Err(_) => break,
                }
            }

            self.write_batch(&batch);
            batch.clear();
        }
    }

    /// Format and write a batch, then flush the sink once.
    ///
    /// Each entry and the flush are isolated with `catch_unwind`: a
    /// panicking part or sink costs that one entry (or flush), not the
    /// worker.
    fn write_batch(&mut self, batch: &[LogEntry]) {
        let formatter = LineFormatter::new(self.settings.read().color);

        for entry in batch {
            let sink = &mut self.sink;
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                sink.write_line(&formatter.format(entry))
            }));

            match result {
                Ok(Ok(())) => {
                    self.metrics.record_written();
                }
                Ok(Err(e)) => {
                    self.metrics.record_write_error();
                    self.diagnostics.emit(&format!(
                        "[LOGGER ERROR] Sink '{}' failed: {}",
                        self.sink.name(),
                        e
                    ));
                }
                Err(payload) => {
                    self.metrics.record_write_error();
                    self.diagnostics.emit(&format!(
                        "[LOGGER CRITICAL] Formatting entry for [{}] panicked: {}",
                        entry.label(),
                        panic_message(payload.as_ref())
                    ));
                }
            }
        }

        let sink = &mut self.sink;
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.flush())) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                self.diagnostics.emit(&format!(
                    "[LOGGER ERROR] Sink '{}' flush failed: {}",
                    self.sink.name(),
                    e
                ));
            }
            Err(payload) => {
                self.diagnostics.emit(&format!(
                    "[LOGGER CRITICAL] Sink '{}' flush panicked: {}",
                    self.sink.name(),
                    panic_message(payload.as_ref())
                ));
            }
        }
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use safe_toolkit::prelude::*;
/// use std::sync::Arc;
///
/// let output = MemorySink::new();
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .buffer_len(1000)
///     .output(output.clone())
///     .on_drop(Arc::new(|count| {
///         eprintln!("ALERT: {} log entries dropped", count);
///     }))
///     .build()
///     .unwrap();
///
/// logger.debug("cache", parts!["warm"]);
/// logger.shutdown().unwrap();
/// assert_eq!(output.lines().len(), 1);
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    color: bool,
    buffer_len: usize,
    output: Option<Box<dyn Sink>>,
    diagnostics: Option<Box<dyn Sink>>,
    on_drop: Option<OverflowCallback>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            color: false,
            buffer_len: DEFAULT_BUFFER_LEN,
            output: None,
            diagnostics: None,
            on_drop: None,
        }
    }

    /// Apply level, color, and buffer length from serializable options
    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: &LoggerOptions) -> Self {
        self.min_level = options.min_level();
        self.color = options.color;
        self.buffer_len = options.capacity();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the minimum level from a string; unrecognized values mean `Info`
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: &str) -> Self {
        self.min_level = LogLevel::parse_lenient(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Queue capacity; 0 selects the default of 100
    #[must_use = "builder methods return a new value"]
    pub fn buffer_len(mut self, buffer_len: usize) -> Self {
        self.buffer_len = if buffer_len == 0 {
            DEFAULT_BUFFER_LEN
        } else {
            buffer_len
        };
        self
    }

    /// Destination for formatted lines (standard output if unset)
    #[must_use = "builder methods return a new value"]
    pub fn output<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.output = Some(Box::new(sink));
        self
    }

    /// Destination for the logger's own warnings (standard error if unset)
    #[must_use = "builder methods return a new value"]
    pub fn diagnostics<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.diagnostics = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn on_drop(mut self, callback: OverflowCallback) -> Self {
        self.on_drop = Some(callback);
        self
    }

    /// Build the Logger and start its worker thread
    pub fn build(self) -> Result<Logger> {
        let output = self
            .output
            .unwrap_or_else(|| Box::new(ConsoleSink::stdout()) as Box<dyn Sink>);
        let diagnostics = self
            .diagnostics
            .map_or_else(Diagnostics::stderr, Diagnostics::new);

        Logger::start(
            Settings {
                min_level: self.min_level,
                color: self.color,
            },
            self.buffer_len,
            output,
            diagnostics,
            self.on_drop,
        )
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
