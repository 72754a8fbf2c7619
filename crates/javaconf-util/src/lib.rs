//! Shared utilities for javaconf.
//!
//! Cross-cutting concerns used by the other javaconf crates: the unified
//! error type, path helpers for re-rooting and `~` expansion, and
//! Cargo-style status lines for the CLI.

pub mod errors;
pub mod fs;
pub mod progress;
