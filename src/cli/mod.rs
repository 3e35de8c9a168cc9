//! Command-line interface
//!
//! Argument parsing for the `chainparams` inspection tool.

pub mod commands;

pub use commands::{Command, Opt};
