//! Basic logger usage example
//!
//! Demonstrates level filtering, colored tags, and shutdown.
//!
//! Run with: cargo run --example basic_usage

use safe_toolkit::prelude::*;
use safe_toolkit::{debug, error, info};

fn main() -> Result<()> {
    println!("=== Safe Toolkit - Basic Usage Example ===\n");

    let logger = Logger::new(LoggerOptions::new().with_level("debug").with_color(true))?;

    println!("1. Logging at every level:");
    debug!(logger, "main", "this is a debug message");
    info!(logger, "main", "this is an info message");
    error!(logger, "main", "this is an error message, code", 500);

    println!("\n2. Raising the minimum level to error:");
    logger.set_min_level(LogLevel::Error);
    info!(logger, "main", "hidden");
    error!(logger, "main", "visible");

    logger.shutdown()?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
