//! File logging example
//!
//! Demonstrates the severity macros writing to a file and to the console.
//!
//! Run with: cargo run --example file_logging

use file_line_logger::prelude::*;
use file_line_logger::{debug, error, info, verbose, warning, ConsoleWriter};

fn process(log: &Log, item: usize) -> Result<()> {
    info!(log, "Processing item {}/5", item)?;
    if item == 3 {
        warning!(log, "Item 3 took longer than expected")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    println!("=== File Line Logger - File Logging Example ===\n");

    let log = Log::new(FileLogWriter::open("application.log")?);
    let console = Log::new(ConsoleWriter::new());

    println!("1. Logging to 'application.log':");

    verbose!(log, "Resolving configuration search path")?;
    debug!(log, "Loading configuration...")?;
    info!(log, "Application started")?;
    error!(log, "Failed to load optional plugin")?;

    for i in 1..=5 {
        process(&log, i)?;
    }

    println!("\n2. The same layout on the console:");
    info!(console, "All operations completed")?;
    error!(console, "Errors go to stderr")?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
