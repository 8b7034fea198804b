//! Core library for reading `nmcli` output.
//! This crate turns the tabular and `key: value` text printed by NetworkManager's
//! command-line tool into typed records, and provides a query service that
//! pulls that text through a pluggable output source.

pub mod backends;
pub mod config;
pub mod parsing;
pub mod query;
pub mod structs;
pub mod traits;

// Define a shared Error and Result type for the entire crate.

use thiserror::Error;

pub use parsing::{RowError, RowFailure, ScanOutcome};
pub use structs::{ConnectionRecord, DeviceRecord, PropertyMap, WifiScanRecord};

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// `nmcli` ran but exited unsuccessfully; nothing was parsed.
    #[error("`nmcli {command}` exited with status {status:?}: {stderr}")]
    UpstreamFailure {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// A specialized `Result` type for this crate's operations.
pub type Result<T> = std::result::Result<T, Error>;
