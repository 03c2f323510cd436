//! Envex - load env files and exec a command with the merged environment.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # clap argument definitions and dispatch
//! │   └── output        # stderr diagnostics (warnings, errors)
//! └── core/             # Core library components
//!     ├── environ       # ordered KEY=VALUE environment set
//!     ├── loader        # env file parsing
//!     └── exec          # merge pipeline and process replacement
//! ```
//!
//! # Behavior
//!
//! Files are merged into the inherited process environment in the order
//! given on the command line. Later files win over earlier files and over
//! the inherited environment; every overwrite is reported on stderr. The
//! final environment is handed to the requested command, which replaces
//! the current process image.

pub mod cli;
pub mod core;
pub mod error;
