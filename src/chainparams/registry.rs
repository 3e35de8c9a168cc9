use crate::chainparams::{ChainParams, Network, ParamsTemplate};
use crate::config::Config;
use crate::core::HeaderHasher;
use crate::error::{ChainParamsError, Result};
use crate::utils::current_timestamp;
use log::info;
use once_cell::sync::OnceCell;
use rand::Rng;

static REGISTRY: OnceCell<NetworkRegistry> = OnceCell::new();

/// All three verified parameter sets plus the one this process runs on.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    main: ChainParams,
    testnet: ChainParams,
    regtest: ChainParams,
    active: Network,
}

impl NetworkRegistry {
    /// Build and verify every network eagerly. Main is active.
    pub fn new(hasher: &dyn HeaderHasher) -> Result<NetworkRegistry> {
        let now = current_timestamp()?;
        Self::with_clock(hasher, now, &mut rand::thread_rng())
    }

    pub fn with_clock<R: Rng>(
        hasher: &dyn HeaderHasher,
        now: i64,
        rng: &mut R,
    ) -> Result<NetworkRegistry> {
        let mut build = |network: Network| -> Result<ChainParams> {
            let template = ParamsTemplate::for_network(network)?;
            ChainParams::build_with_clock(&template, hasher, now, &mut *rng)
        };

        let registry = NetworkRegistry {
            main: build(Network::Main)?,
            testnet: build(Network::Testnet)?,
            regtest: build(Network::Regtest)?,
            active: Network::default(),
        };
        info!("Chain parameters verified for main, test and regtest");
        Ok(registry)
    }

    /// Startup sequence: build and verify every network, then select the
    /// one named by the `testnet` / `regtest` flags of `config`.
    pub fn from_config(hasher: &dyn HeaderHasher, config: &Config) -> Result<NetworkRegistry> {
        let mut registry = Self::new(hasher)?;
        registry.select_network_from_flags(config.testnet, config.regtest)?;
        Ok(registry)
    }

    pub fn get(&self, network: Network) -> &ChainParams {
        match network {
            Network::Main => &self.main,
            Network::Testnet => &self.testnet,
            Network::Regtest => &self.regtest,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChainParams> + '_ {
        Network::ALL.into_iter().map(|network| self.get(network))
    }

    pub fn active_network(&self) -> Network {
        self.active
    }

    pub fn active_params(&self) -> &ChainParams {
        self.get(self.active)
    }

    pub fn select_network(&mut self, network: Network) {
        self.active = network;
        info!("Selected {network} network");
    }

    pub fn select_network_by_name(&mut self, name: &str) -> Result<Network> {
        let network: Network = name.parse()?;
        self.select_network(network);
        Ok(network)
    }

    /// Select from the `-testnet` / `-regtest` flags. On error the current
    /// selection is left as it was.
    pub fn select_network_from_flags(&mut self, testnet: bool, regtest: bool) -> Result<Network> {
        let network = Network::from_flags(testnet, regtest)?;
        self.select_network(network);
        Ok(network)
    }

    /// Which network a wire message header belongs to.
    pub fn network_for_magic(&self, magic: [u8; 4]) -> Option<Network> {
        self.iter()
            .find(|params| params.message_start() == magic)
            .map(ChainParams::network)
    }
}

/// Publish `registry` as the process-wide parameter source.
///
/// Only the first call succeeds; after that the registry is read-only.
pub fn publish(registry: NetworkRegistry) -> Result<&'static NetworkRegistry> {
    let network = registry.active_network();
    REGISTRY
        .set(registry)
        .map_err(|_| ChainParamsError::AlreadyInitialized)?;
    info!("Published chain parameters, active network {network}");
    global_registry()
}

pub fn global_registry() -> Result<&'static NetworkRegistry> {
    REGISTRY.get().ok_or(ChainParamsError::NotInitialized)
}

/// Parameters of the active network.
pub fn params() -> Result<&'static ChainParams> {
    Ok(global_registry()?.active_params())
}
