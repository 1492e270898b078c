//! Concurrent logging example
//!
//! Several threads log through one logger with a deliberately small
//! buffer; overflow is reported through the drop callback and metrics.
//!
//! Run with: cargo run --example async_logging

use safe_toolkit::prelude::*;
use safe_toolkit::info;
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== Safe Toolkit - Async Logging Example ===\n");

    let logger = Logger::builder()
        .level("info")
        .buffer_len(16)
        .on_drop(Arc::new(|total| {
            if total % 100 == 0 {
                eprintln!("ALERT: {} log entries dropped so far", total);
            }
        }))
        .build()?;

    thread::scope(|s| {
        for worker in 0..4 {
            let logger = &logger;
            s.spawn(move || {
                for job in 0..250 {
                    info!(logger, format!("worker-{}", worker), "finished job", job);
                }
            });
        }
    });

    let metrics = logger.metrics().clone();
    logger.shutdown()?;

    println!("\nEnqueued: {}", metrics.enqueued());
    println!("Dropped:  {}", metrics.dropped_count());
    println!("Drop rate: {:.2}%", metrics.drop_rate());
    Ok(())
}
