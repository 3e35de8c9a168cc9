//! Utility functions and helpers
//!
//! Hashing primitives, the wall clock, and the consensus serialization
//! helpers used when building the genesis transaction and header.

pub mod crypto;
pub mod serialization;

pub use crypto::{current_timestamp, double_sha256};

pub use serialization::{write_compact_size, write_var_bytes};
