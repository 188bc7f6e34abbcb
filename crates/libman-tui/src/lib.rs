//! Terminal front end for the library manager
//!
//! A thin shell over [`libman_app::Driver`] that provides line-based terminal
//! I/O. All orchestration logic lives in the generic [`libman_app::Runtime`].
//!
//! This crate only handles the terminal, command-line options and logging
//! setup.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod terminal;

pub use config::{Config, ConfigError};
pub use libman_app::{AppError, Driver, Runtime};
pub use terminal::TerminalDriver;
