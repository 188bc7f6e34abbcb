//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use libman_core::DataFiles;
use thiserror::Error;

/// Configuration problems detected before the session starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Data directory is missing or not a directory
    #[error("data directory {0} does not exist")]
    MissingDataDir(PathBuf),
}

/// Terminal library manager
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "libman")]
#[command(about = "Terminal library manager: members, books and loans")]
#[command(version)]
pub struct Config {
    /// Directory holding the data files
    #[arg(short, long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Client file name, relative to the data directory
    #[arg(long, default_value = "client")]
    pub client_file: PathBuf,

    /// Book file name, relative to the data directory
    #[arg(long, default_value = "book")]
    pub book_file: PathBuf,

    /// Borrow file name, relative to the data directory
    #[arg(long, default_value = "borrow")]
    pub borrow_file: PathBuf,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` wins if set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log file; logs never go to the terminal
    #[arg(long, default_value = "libman.log")]
    pub log_file: PathBuf,
}

impl Config {
    /// Paths of the three data files.
    pub fn data_files(&self) -> DataFiles {
        DataFiles {
            client: self.data_dir.join(&self.client_file),
            book: self.data_dir.join(&self.book_file),
            borrow: self.data_dir.join(&self.borrow_file),
        }
    }

    /// Check that the data directory exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.data_dir.is_dir() {
            return Err(ConfigError::MissingDataDir(self.data_dir.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn defaults_match_data_file_names() {
        let config = Config::try_parse_from(["libman"]).unwrap();
        assert_eq!(config.data_files(), DataFiles::in_dir("."));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, Path::new("libman.log"));
    }

    #[test]
    fn file_names_are_relative_to_data_dir() {
        let config = Config::try_parse_from([
            "libman",
            "--data-dir",
            "/var/lib/libman",
            "--book-file",
            "catalogue.txt",
        ])
        .unwrap();
        let files = config.data_files();
        assert_eq!(files.client, Path::new("/var/lib/libman/client"));
        assert_eq!(files.book, Path::new("/var/lib/libman/catalogue.txt"));
    }

    #[test]
    fn missing_data_dir_is_rejected() {
        let config =
            Config::try_parse_from(["libman", "--data-dir", "/nonexistent/libman"]).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::MissingDataDir(_))));
    }
}
