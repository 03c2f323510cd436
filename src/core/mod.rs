//! Core library components.

pub mod environ;
pub mod exec;
pub mod loader;
