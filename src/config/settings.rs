use crate::chainparams::Network;
use crate::error::{ChainParamsError, Result};
use log::debug;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

const TESTNET_KEY: &str = "CHAIN_TESTNET";
const REGTEST_KEY: &str = "CHAIN_REGTEST";

/// Startup flags that decide which network is active.
///
/// Every source can only switch a flag on, so merging is a plain OR and
/// the order sources are applied in does not matter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub testnet: bool,
    pub regtest: bool,
}

impl Config {
    /// Flags from the process environment.
    pub fn new() -> Result<Config> {
        Self::from_env_vars(|key| env::var(key).ok())
    }

    pub fn from_toml_str(contents: &str) -> Result<Config> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        debug!("Loaded {config:?} from {}", path.display());
        Ok(config)
    }

    /// Flags from `lookup`, which maps a variable name to its value if set.
    pub fn from_env_vars<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| -> Result<bool> {
            match lookup(key) {
                Some(value) => parse_bool_flag(key, &value),
                None => Ok(false),
            }
        };

        Ok(Config {
            testnet: flag(TESTNET_KEY)?,
            regtest: flag(REGTEST_KEY)?,
        })
    }

    pub fn merge(self, other: Config) -> Config {
        Config {
            testnet: self.testnet || other.testnet,
            regtest: self.regtest || other.regtest,
        }
    }

    pub fn merge_flags(self, testnet: bool, regtest: bool) -> Config {
        self.merge(Config { testnet, regtest })
    }

    pub fn network(&self) -> Result<Network> {
        Network::from_flags(self.testnet, self.regtest)
    }
}

/// Interpret a flag value the way node options are read: a bare flag is
/// on, numbers are on when non-zero.
pub fn parse_bool_flag(key: &str, value: &str) -> Result<bool> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(true);
    }
    if let Ok(n) = value.parse::<i64>() {
        return Ok(n != 0);
    }
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" => Ok(true),
        "false" | "no" | "off" => Ok(false),
        _ => Err(ChainParamsError::Config(format!(
            "Invalid boolean for {key}: {value}"
        ))),
    }
}
