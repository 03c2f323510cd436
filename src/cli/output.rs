//! Shared stderr diagnostics.
//!
//! The two warning shapes emitted during a merge are a compatibility
//! surface; only the `warning:`/`error:` prefixes are colored, and
//! `console` drops the color codes when stderr is not a terminal.

use console::style;

/// Print a non-fatal warning to stderr.
///
/// Shape: `warning: <message>`
pub fn warning(msg: &str) {
    eprintln!("{} {msg}", style("warning:").yellow().for_stderr());
}

/// Print a fatal error to stderr.
///
/// Shape: `error: <message>`
pub fn error(msg: &str) {
    eprintln!("{} {msg}", style("error:").red().for_stderr());
}
