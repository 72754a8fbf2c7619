//! Core types for javaconf.
//!
//! This crate holds the pieces every other javaconf crate builds on: the
//! legacy-compatible version comparator, parsers for the dependency atoms
//! found in flattened dependency text, the traits through which runtimes
//! and installed packages are queried, the shell-style env-file format
//! shared by runtime and package descriptors, and the TOML configuration.
//!
//! Nothing here touches the resolver's selection policy.

pub mod atom;
pub mod config;
pub mod envfile;
pub mod package;
pub mod runtime;
pub mod version;
