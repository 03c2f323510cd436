//! Merge pipeline and process replacement.
//!
//! Folds env files into the inherited environment in caller order, then
//! replaces the current process with the requested command. Later files
//! win over earlier files and over the inherited environment; every
//! overwrite is reported on stderr.

use std::convert::Infallible;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::cli::output;
use crate::core::environ::Environ;
use crate::core::loader;
use crate::error::{Error, Result};

/// Merge `files` into `base`, in order.
///
/// Each file is validated before it is read; any validation or read
/// failure aborts the merge, so a partial environment is never returned.
/// A warning is emitted for every key that is overwritten, whether it
/// came from the base environment or from an earlier file.
pub fn merge(base: Environ, files: &[PathBuf]) -> Result<Environ> {
    let mut env = base;

    for path in files {
        loader::validate(path)?;

        for entry in loader::load(path)? {
            if env.is_set(&entry.key) {
                output::warning(&format!(
                    "overwriting environment variable {}",
                    entry.key
                ));
            }
            env.set(&entry.key, &entry.value);
        }
    }

    debug!(entries = env.len(), "merged environment");
    Ok(env)
}

/// Merge `files` into the ambient environment and exec `command`.
///
/// Does not return on success: the current process image is replaced by
/// the child. Every return is an error, from the merge phase or from a
/// failed exec (command not found, not executable).
pub fn run(files: &[PathBuf], command: &str, args: &[String]) -> Result<Infallible> {
    let env = merge(Environ::from_process(), files)?;
    Err(replace_process(command, args, &env))
}

/// Replace the current process with `command(args...)` under `env`.
///
/// The child sees exactly the merged environment, nothing inherited
/// beyond it. Returns only when the replacement fails.
#[cfg(unix)]
fn replace_process(command: &str, args: &[String], env: &Environ) -> Error {
    use std::os::unix::process::CommandExt;

    let source = Command::new(command)
        .args(args)
        .env_clear()
        .envs(env.pairs())
        .exec();

    Error::Exec {
        command: command.to_string(),
        source,
    }
}

/// Windows has no execvp; the closest behavior is to run the child to
/// completion and exit with its status.
#[cfg(not(unix))]
fn replace_process(command: &str, args: &[String], env: &Environ) -> Error {
    let status = Command::new(command)
        .args(args)
        .env_clear()
        .envs(env.pairs())
        .status();

    match status {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => Error::Exec {
            command: command.to_string(),
            source,
        },
    }
}
