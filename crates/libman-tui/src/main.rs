//! Library manager entry point.
//!
//! # Usage
//!
//! ```bash
//! # Data files `client`, `book` and `borrow` in the current directory
//! libman
//!
//! # Data elsewhere, verbose log
//! libman --data-dir /var/lib/libman --log-level debug
//! ```

use std::{fs::OpenOptions, sync::Mutex};

use clap::Parser;
use libman_core::{FileStorage, SystemClock};
use libman_tui::{Config, Runtime, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    config.validate()?;

    let log = OpenOptions::new().create(true).append(true).open(&config.log_file)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(log)).with_ansi(false))
        .with(filter)
        .init();

    let storage = FileStorage::new(config.data_files());
    let files = storage.files();
    tracing::info!(
        client = %files.client.display(),
        book = %files.book.display(),
        borrow = %files.borrow.display(),
        "library manager starting"
    );

    let mut runtime = Runtime::new(TerminalDriver::stdio(), storage, SystemClock)?;
    runtime.run()?;

    Ok(())
}
