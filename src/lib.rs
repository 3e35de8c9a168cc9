//! # Chain Params - per-network consensus constants
//!
//! Everything a node needs to know about the network it runs on, checked
//! once at start-up and then shared read-only.
//!
//! ## What's Here
//! - **Genesis rebuild**: the coinbase, Merkle root and 80-byte header are
//!   rebuilt from literals and compared with the published hashes
//! - **Three networks**: main, test and regtest, each a delta over the one
//!   before it
//! - **Registry**: selects the active network from the startup flags and is
//!   published once for the whole process
//!
//! ## Layout
//! - `core/`: hashes, scripts, transactions, Merkle trees, blocks, targets
//! - `chainparams/`: network literals, verified parameter sets, registry
//! - `config/`: flag sources (TOML file, environment, command line)
//! - `utils/`: SHA-256 and wire serialization helpers
//! - `cli/`: the `chainparams` inspection tool
//!
//! The proof-of-work hash of a block header is chain specific and is
//! injected through [`HeaderHasher`]; only [`Sha256dHasher`] ships here.

pub mod chainparams;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

#[cfg(test)]
pub mod testnet;

pub use chainparams::{
    global_registry, params, publish, Base58Prefixes, Base58Type, ChainParams, DnsSeedData,
    Network, NetworkRegistry, ParamsSummary, ParamsTemplate, SeedAddress,
};
pub use cli::{Command, Opt};
pub use config::Config;
pub use core::{
    Block, BlockHeader, GenesisBlock, GenesisConfig, Hash256, HeaderHasher, MerkleBranch,
    MerkleTree, Sha256dHasher, Transaction,
};
pub use error::{ChainParamsError, Result};
