//! gauge-cli library root.
//!
//! Re-exports the command layer so integration tests can run commands
//! against snapshot files without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
