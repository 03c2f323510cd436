use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a run.
///
/// Each variant records the phase that failed so the message tells the
/// user whether a file failed validation, failed mid-read, or the final
/// command could not be executed. Malformed lines and key overwrites are
/// warnings, not errors, and never appear here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to validate file {}: {source}", path.display())]
    Validate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to execute {command}: {source}")]
    Exec {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
