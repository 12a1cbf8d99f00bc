//! Address book - demo entry point
//!
//! Builds a small directory, prints one contact's birthday countdown and then
//! lists every record page by page.

use address_book::{Config, ContactRecord, Directory};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, stdout is for the records)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(page_size = config.page_size, "Configuration loaded");

    let mut book = Directory::new();

    let mut john = ContactRecord::new("John", Some("15-05-1423"))?;
    match john.days_to_birthday() {
        Ok(Some(days)) => println!("{}", days),
        Ok(None) => println!("No birthday set"),
        Err(e) => {
            error!("Failed to compute birthday countdown: {}", e);
            return Err(e.into());
        }
    }
    john.add_phone("1231231331")?;

    book.add_record(john);
    book.add_record(ContactRecord::new("Mary", None)?);
    book.add_record(ContactRecord::new("Paul", None)?);

    for page in book.iterator(config.page_size) {
        for record in page {
            println!("{}", record);
        }
    }

    info!(records = book.len(), "Done");
    Ok(())
}
