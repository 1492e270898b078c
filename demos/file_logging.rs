//! File logging example
//!
//! Loads logger options from JSON and writes to a file.
//!
//! Run with: cargo run --example file_logging

use safe_toolkit::prelude::*;
use safe_toolkit::{debug, error};

fn main() -> Result<()> {
    println!("=== Safe Toolkit - File Logging Example ===\n");

    let options = LoggerOptions::from_json_str(r#"{ "level": "debug", "buffer_len": 256 }"#)?;
    let path = std::env::temp_dir().join("safe_toolkit_demo.log");

    let logger = Logger::builder()
        .options(&options)
        .output(FileSink::new(&path)?)
        .build()?;

    for i in 0..10 {
        debug!(logger, "file", "line", i);
    }
    error!(logger, "file", "done");
    logger.shutdown()?;

    println!("Wrote log entries to {}", path.display());
    println!("{}", std::fs::read_to_string(&path)?);
    Ok(())
}
