//! Configuration management
//!
//! Network selection settings, gathered from an optional TOML file, the
//! environment and command-line flags.

pub mod settings;

pub use settings::{parse_bool_flag, Config};
