//! Shared fixtures for unit tests
//!
//! Header hashers with pinned answers, fixed clocks and temporary config
//! files, so chain parameters can be built deterministically.

pub mod test_utils;

pub use test_utils::*;
