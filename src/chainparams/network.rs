use crate::error::{ChainParamsError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The networks a node can run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Main,
    Testnet,
    Regtest,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Main, Network::Testnet, Network::Regtest];

    pub fn name(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
        }
    }

    /// Resolve the `-testnet` / `-regtest` startup flags.
    ///
    /// Both set is a configuration error. Otherwise regtest wins over
    /// testnet, and no flag means main.
    pub fn from_flags(testnet: bool, regtest: bool) -> Result<Network> {
        match (testnet, regtest) {
            (true, true) => Err(ChainParamsError::MutuallyExclusiveFlags),
            (_, true) => Ok(Network::Regtest),
            (true, false) => Ok(Network::Testnet),
            (false, false) => Ok(Network::Main),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" | "testnet3" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            _ => Err(ChainParamsError::UnknownNetwork(s.to_string())),
        }
    }
}
