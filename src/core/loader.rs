//! Env file parsing.
//!
//! Reads one `KEY=VALUE` file at a time, line by line. Blank lines and
//! `#` comment lines are skipped. Lines without an `=`, or with an empty
//! key, produce a stderr warning and are skipped; parsing continues.
//! Values are taken verbatim: no trimming, no quote handling, and a value
//! may itself contain `=` (the split is on the first occurrence only).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::cli::output;
use crate::error::{Error, Result};

/// A parsed (key, value) pair from one input line.
///
/// Transient: produced per line and folded into the environment
/// immediately. The key is never empty; the value may be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub key: String,
    pub value: String,
}

/// Probe that `path` exists and is stat-able.
///
/// Run before [`load`] so a missing file is reported as a validation
/// failure rather than a read failure.
pub fn validate(path: &Path) -> Result<()> {
    std::fs::metadata(path)
        .map(|_| ())
        .map_err(|source| Error::Validate {
            path: path.to_path_buf(),
            source,
        })
}

/// Parse `path` into raw entries, in file-line order.
///
/// Malformed lines are warned about and skipped. I/O failures while
/// opening or reading abort the load.
pub fn load(path: &Path) -> Result<Vec<RawEntry>> {
    let file = File::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) if !key.is_empty() => entries.push(RawEntry {
                key: key.to_string(),
                value: value.to_string(),
            }),
            // No '=' at all, or '=' as the first character
            _ => output::warning(&format!("invalid line in file \"{line}\"")),
        }
    }

    debug!(file = %path.display(), entries = entries.len(), "loaded env file");
    Ok(entries)
}
