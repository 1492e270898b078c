//! Error types for the logger

use std::any::Any;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The worker thread panicked before the queue was drained
    #[error("Log worker panicked: {0}")]
    WorkerPanicked(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a worker panic error from a `JoinHandle::join` payload
    pub(crate) fn worker_panicked(payload: Box<dyn Any + Send>) -> Self {
        LoggerError::WorkerPanicked(panic_message(payload.as_ref()))
    }
}

/// Extract the message from a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
