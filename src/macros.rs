//! Logging macros for variadic message parts.
//!
//! Each part is boxed as a [`MessagePart`](crate::MessagePart) and rendered
//! with `Display` on the worker thread, so parts must be owned
//! (`'static`) and `Send`.
//!
//! # Examples
//!
//! ```
//! use safe_toolkit::prelude::*;
//! use safe_toolkit::{error, info};
//!
//! let logger = Logger::builder().output(MemorySink::new()).build().unwrap();
//!
//! info!(logger, "server", "listening on port", 8080);
//!
//! let user_id = 42;
//! error!(logger, "auth", "login failed for user", user_id);
//!
//! logger.shutdown().unwrap();
//! ```

/// Build a `Vec<MessagePart>` from a list of `Display` values.
///
/// ```
/// use safe_toolkit::parts;
///
/// let parts = parts!["retry", 3, "of", 5];
/// assert_eq!(parts.len(), 4);
/// assert_eq!(parts[1].to_string(), "3");
/// ```
#[macro_export]
macro_rules! parts {
    () => {
        ::std::vec::Vec::<$crate::MessagePart>::new()
    };
    ($($part:expr),+ $(,)?) => {
        ::std::vec![$(::std::boxed::Box::new($part) as $crate::MessagePart),+]
    };
}

/// Log at an explicit level.
///
/// ```
/// # use safe_toolkit::prelude::*;
/// # let logger = Logger::builder().output(MemorySink::new()).build().unwrap();
/// use safe_toolkit::log;
/// log!(logger, LogLevel::Info, "job", "started");
/// log!(logger, LogLevel::Error, "job", "exit code", 2);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $label:expr $(, $part:expr)* $(,)?) => {
        $logger.log($level, $label, $crate::parts![$($part),*])
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $label:expr $(, $part:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $label $(, $part)*)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $label:expr $(, $part:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info, $label $(, $part)*)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $label:expr $(, $part:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error, $label $(, $part)*)
    };
}
