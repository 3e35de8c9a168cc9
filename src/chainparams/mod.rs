//! Per-network chain parameters
//!
//! Literal templates for main, test and regtest, the verified parameter
//! sets built from them, and the registry that selects and publishes the
//! active one.

pub mod base58;
pub mod network;
pub mod params;
pub mod registry;
pub mod seeds;

pub use base58::{Base58Prefixes, Base58Type};
pub use network::Network;
pub use params::{ChainParams, ParamsSummary, ParamsTemplate};
pub use registry::{global_registry, params, publish, NetworkRegistry};
pub use seeds::{fixed_seed_addresses, ipv4_from_raw, DnsSeedData, SeedAddress, ONE_WEEK};
