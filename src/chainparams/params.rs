// Per-network consensus and wire constants
// Testnet is expressed as a delta over mainnet and regtest as a delta over
// testnet, so a change to a shared constant reaches all three tables

use crate::chainparams::{
    fixed_seed_addresses, Base58Prefixes, Base58Type, DnsSeedData, Network, SeedAddress,
};
use crate::core::{
    compact_from_target, pow_limit, GenesisBlock, GenesisConfig, Hash256, HeaderHasher,
    GENESIS_REWARD,
};
use crate::error::{ChainParamsError, Result};
use crate::utils::current_timestamp;
use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use log::{info, warn};
use num_bigint::BigUint;
use rand::Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};

const GENESIS_MESSAGE: &str = "18-01-14 - Anti-fracking campaigners chain themselves to petrol pumps";

const GENESIS_OUTPUT_PUBKEY: &str = "04becedf6ebadd4596964d890f677f8d2e74fdcc313c6416434384a66d6d8758d1c92de272dc6713e4a81d98841dfdfdc95e204ba915447d2fe9313435c78af3e8";

// Raw IPv4 values in host memory order, see seeds::ipv4_from_raw
const MAIN_FIXED_SEEDS: [u32; 1] = [0x12345678];

/// The literal constants of one network, before any hashing.
///
/// Plain data: variants are produced by copying a base template and
/// overwriting the fields that differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamsTemplate {
    pub network: Network,
    pub message_start: [u8; 4],
    pub alert_pub_key: Vec<u8>,
    pub default_port: u16,
    pub rpc_port: u16,
    /// Right shift applied to the all-ones hash to get the easiest target
    pub pow_limit_shift: u32,
    pub subsidy_halving_interval: u32,
    pub masternode_port_fork_height: u32,
    pub reward_fork_height_1: u32,
    pub reward_fork_height_2: u32,
    pub genesis: GenesisConfig,
    /// `None` leaves the genesis hash advisory: computed and logged only
    pub expected_genesis_hash: Option<Hash256>,
    pub expected_merkle_root: Hash256,
    pub dns_seeds: Vec<DnsSeedData>,
    pub fixed_seeds: Vec<u32>,
    pub base58_prefixes: Base58Prefixes,
    pub data_dir: Option<String>,
    pub require_rpc_password: bool,
}

impl ParamsTemplate {
    pub fn main() -> Result<ParamsTemplate> {
        Ok(ParamsTemplate {
            network: Network::Main,
            // Rarely used upper ASCII, not valid as UTF-8, and a large
            // 4-byte int at any alignment
            message_start: [0xa1, 0xd4, 0xc3, 0xb2],
            alert_pub_key: decode_hex("04c5788ca1e268a7474763fa965210b6fa6b04a45f52d21056c62fb19a2de991aa15aa1d1c516f34d2a0016f51a87959c89f51a148db30c839f71bc525dde8c480")?,
            default_port: 11884,
            rpc_port: 11885,
            pow_limit_shift: 20,
            subsidy_halving_interval: 700_800, // 2 years
            masternode_port_fork_height: 1_246_400 - 1_000,
            reward_fork_height_1: 1_246_400,
            reward_fork_height_2: 1_275_200,
            genesis: GenesisConfig {
                message: GENESIS_MESSAGE.to_string(),
                script_bits: 486_604_799,
                script_extra: 4,
                reward: GENESIS_REWARD,
                output_pubkey: decode_hex(GENESIS_OUTPUT_PUBKEY)?,
                version: 1,
                time: 1_390_078_220,
                bits: 0x1e0f_ffff,
                nonce: 2_099_366_979,
            },
            expected_genesis_hash: Some(Hash256::from_hex(
                "00000f639db5734b2b861ef8dbccc33aebd7de44d13de000a12d093bcc866c64",
            )?),
            expected_merkle_root: Hash256::from_hex(
                "fa6ef9872494fa9662cf0fecf8c0135a6932e76d7a8764e1155207f3205c7c88",
            )?,
            dns_seeds: vec![
                DnsSeedData::new("167.99.234.230", "167.99.234.230"),
                DnsSeedData::new("149.28.196.32", "149.28.196.32"),
                DnsSeedData::new("149.28.146.79", "149.28.146.79"),
                DnsSeedData::new("217.69.13.180", "217.69.13.180"),
            ],
            fixed_seeds: MAIN_FIXED_SEEDS.to_vec(),
            base58_prefixes: Base58Prefixes::new(
                vec![48],
                vec![6],
                vec![48 + 128],
                vec![0x02, 0xfe, 0x52, 0xf8],
                vec![0x02, 0xfe, 0x52, 0xcc],
            ),
            data_dir: None,
            require_rpc_password: true,
        })
    }

    pub fn testnet() -> Result<ParamsTemplate> {
        let mut params = Self::main()?;
        params.network = Network::Testnet;
        params.message_start = [0xfb, 0xc2, 0x11, 0x02];
        params.alert_pub_key = decode_hex("040d3090a194381599d0f53f89ec60b9ec77f0e7b61978ef445142c8a4f1e154ca3441a5e46e12910540352edbd8af43fc1ee1da9a935c1c252fe7426c323d3d32")?;
        params.default_port = 21994;
        params.rpc_port = 21995;
        params.data_dir = Some("testnet3".to_string());

        params.masternode_port_fork_height = 400;
        params.reward_fork_height_1 = 500;
        params.reward_fork_height_2 = 1000;

        // Same coinbase, re-mined for a later start
        params.genesis.time = 1_388_868_139;
        params.genesis.nonce = 423_087_994;
        params.expected_genesis_hash = Some(Hash256::from_hex(
            "0000082f5939c2154dbcba35f784530d12e9d72472fcfaf29674ea312cdf4c83",
        )?);

        params.fixed_seeds.clear();
        params.dns_seeds.clear();

        params.base58_prefixes = Base58Prefixes::new(
            vec![80],
            vec![44],
            vec![88 + 128],
            vec![0x3a, 0x80, 0x61, 0xa0],
            vec![0x3a, 0x80, 0x58, 0x37],
        );
        Ok(params)
    }

    pub fn regtest() -> Result<ParamsTemplate> {
        let mut params = Self::testnet()?;
        params.network = Network::Regtest;
        params.message_start = [0xfc, 0x1f, 0xc3, 0x56];
        params.subsidy_halving_interval = 150;
        params.pow_limit_shift = 1;
        params.genesis.time = 1_296_688_602;
        params.genesis.bits = 0x207f_ffff;
        params.genesis.nonce = 3;
        params.default_port = 18444;
        params.data_dir = Some("regtest".to_string());
        params.require_rpc_password = false;

        // Not pinned: the relaxed limit means any re-mine changes this hash
        params.expected_genesis_hash = None;

        params.fixed_seeds.clear();
        params.dns_seeds.clear();
        Ok(params)
    }

    pub fn for_network(network: Network) -> Result<ParamsTemplate> {
        match network {
            Network::Main => Self::main(),
            Network::Testnet => Self::testnet(),
            Network::Regtest => Self::regtest(),
        }
    }

    pub fn pow_limit(&self) -> BigUint {
        pow_limit(self.pow_limit_shift)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParamsSummary {
    pub network: Network,
    pub message_start: String,
    pub alert_pub_key: String,
    pub default_port: u16,
    pub rpc_port: u16,
    pub pow_limit_bits: String,
    pub subsidy_halving_interval: u32,
    pub masternode_port_fork_height: u32,
    pub reward_fork_height_1: u32,
    pub reward_fork_height_2: u32,
    pub genesis_hash: Hash256,
    /// False when the hash above was accepted as computed
    pub genesis_hash_pinned: bool,
    pub genesis_merkle_root: Hash256,
    pub genesis_time: u32,
    pub genesis_bits: String,
    pub genesis_nonce: u32,
    pub base58_prefixes: Base58Prefixes,
    pub dns_seeds: Vec<DnsSeedData>,
    pub fixed_seed_count: usize,
    pub data_dir: Option<String>,
    pub require_rpc_password: bool,
}

/// Verified, immutable parameters of one network.
#[derive(Debug, Clone)]
pub struct ChainParams {
    network: Network,
    message_start: [u8; 4],
    alert_pub_key: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    pow_limit: BigUint,
    subsidy_halving_interval: u32,
    masternode_port_fork_height: u32,
    reward_fork_height_1: u32,
    reward_fork_height_2: u32,
    genesis: GenesisBlock,
    genesis_hash_pinned: bool,
    dns_seeds: Vec<DnsSeedData>,
    fixed_seeds: Vec<SeedAddress>,
    base58_prefixes: Base58Prefixes,
    data_dir: Option<String>,
    require_rpc_password: bool,
}

impl ChainParams {
    /// Build and verify a network's parameters, stamping fixed seeds with
    /// the wall clock.
    pub fn build(template: &ParamsTemplate, hasher: &dyn HeaderHasher) -> Result<ChainParams> {
        let now = current_timestamp()?;
        Self::build_with_clock(template, hasher, now, &mut rand::thread_rng())
    }

    /// Build and verify with an explicit clock and random source.
    ///
    /// Fails if the rebuilt genesis does not reproduce the pinned Merkle
    /// root or hash, or if two address kinds share a prefix. Callers treat
    /// those failures as fatal.
    pub fn build_with_clock<R: Rng>(
        template: &ParamsTemplate,
        hasher: &dyn HeaderHasher,
        now: i64,
        rng: &mut R,
    ) -> Result<ChainParams> {
        let genesis = template.genesis.build(hasher)?;
        verify_genesis(template, &genesis, hasher)?;
        template.base58_prefixes.check_distinct(template.network)?;

        let fixed_seeds =
            fixed_seed_addresses(&template.fixed_seeds, template.default_port, now, rng);

        Ok(ChainParams {
            network: template.network,
            message_start: template.message_start,
            alert_pub_key: template.alert_pub_key.clone(),
            default_port: template.default_port,
            rpc_port: template.rpc_port,
            pow_limit: template.pow_limit(),
            subsidy_halving_interval: template.subsidy_halving_interval,
            masternode_port_fork_height: template.masternode_port_fork_height,
            reward_fork_height_1: template.reward_fork_height_1,
            reward_fork_height_2: template.reward_fork_height_2,
            genesis,
            genesis_hash_pinned: template.expected_genesis_hash.is_some(),
            dns_seeds: template.dns_seeds.clone(),
            fixed_seeds,
            base58_prefixes: template.base58_prefixes.clone(),
            data_dir: template.data_dir.clone(),
            require_rpc_password: template.require_rpc_password,
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    pub fn alert_pub_key(&self) -> &[u8] {
        &self.alert_pub_key
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    pub fn pow_limit(&self) -> &BigUint {
        &self.pow_limit
    }

    pub fn subsidy_halving_interval(&self) -> u32 {
        self.subsidy_halving_interval
    }

    pub fn masternode_port_fork_height(&self) -> u32 {
        self.masternode_port_fork_height
    }

    pub fn reward_fork_height_1(&self) -> u32 {
        self.reward_fork_height_1
    }

    pub fn reward_fork_height_2(&self) -> u32 {
        self.reward_fork_height_2
    }

    pub fn genesis_block(&self) -> &GenesisBlock {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis.hash()
    }

    /// Whether the genesis hash was checked against a published literal.
    pub fn genesis_hash_pinned(&self) -> bool {
        self.genesis_hash_pinned
    }

    pub fn dns_seeds(&self) -> &[DnsSeedData] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[SeedAddress] {
        &self.fixed_seeds
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    pub fn data_dir(&self) -> Option<&str> {
        self.data_dir.as_deref()
    }

    /// Where this network keeps its files under the node's base directory.
    pub fn data_dir_path(&self, base: &Path) -> PathBuf {
        match &self.data_dir {
            Some(sub) => base.join(sub),
            None => base.to_path_buf(),
        }
    }

    pub fn require_rpc_password(&self) -> bool {
        self.require_rpc_password
    }

    /// Serializable view for inspection output.
    pub fn summary(&self) -> ParamsSummary {
        let header = self.genesis.header();
        ParamsSummary {
            network: self.network,
            message_start: HEXLOWER.encode(&self.message_start),
            alert_pub_key: HEXLOWER.encode(&self.alert_pub_key),
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            pow_limit_bits: format!("{:08x}", compact_from_target(&self.pow_limit)),
            subsidy_halving_interval: self.subsidy_halving_interval,
            masternode_port_fork_height: self.masternode_port_fork_height,
            reward_fork_height_1: self.reward_fork_height_1,
            reward_fork_height_2: self.reward_fork_height_2,
            genesis_hash: self.genesis.hash(),
            genesis_hash_pinned: self.genesis_hash_pinned,
            genesis_merkle_root: self.genesis.merkle_root(),
            genesis_time: header.time,
            genesis_bits: format!("{:08x}", header.bits),
            genesis_nonce: header.nonce,
            base58_prefixes: self.base58_prefixes.clone(),
            dns_seeds: self.dns_seeds.clone(),
            fixed_seed_count: self.fixed_seeds.len(),
            data_dir: self.data_dir.clone(),
            require_rpc_password: self.require_rpc_password,
        }
    }
}

fn verify_genesis(
    template: &ParamsTemplate,
    genesis: &GenesisBlock,
    hasher: &dyn HeaderHasher,
) -> Result<()> {
    let network = template.network;

    let merkle_root = genesis.merkle_root();
    if merkle_root != template.expected_merkle_root {
        return Err(ChainParamsError::MerkleRootMismatch {
            network,
            expected: template.expected_merkle_root,
            computed: merkle_root,
        });
    }

    match template.expected_genesis_hash {
        Some(expected) if expected != genesis.hash() => {
            Err(ChainParamsError::GenesisHashMismatch {
                network,
                expected,
                computed: genesis.hash(),
            })
        }
        Some(_) => {
            info!(
                "Verified {network} genesis block {} ({})",
                genesis.hash(),
                hasher.name()
            );
            Ok(())
        }
        None => {
            warn!(
                "Genesis hash of {network} is not pinned, using computed {} ({})",
                genesis.hash(),
                hasher.name()
            );
            Ok(())
        }
    }
}

fn decode_hex(literal: &str) -> Result<Vec<u8>> {
    Ok(HEXLOWER_PERMISSIVE.decode(literal.as_bytes())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainparams::ONE_WEEK;
    use crate::core::{check_proof_of_work, Sha256dHasher};
    use crate::testnet::{PinnedHeaderHasher, TEST_NOW};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(template: &ParamsTemplate) -> Result<ChainParams> {
        let mut rng = StdRng::seed_from_u64(11);
        ChainParams::build_with_clock(template, &PinnedHeaderHasher::genesis(), TEST_NOW, &mut rng)
    }

    #[test]
    fn test_mainnet_literals() {
        let main = ParamsTemplate::main().unwrap();
        assert_eq!(main.message_start, [0xa1, 0xd4, 0xc3, 0xb2]);
        assert_eq!((main.default_port, main.rpc_port), (11884, 11885));
        assert_eq!(main.pow_limit_shift, 20);
        assert_eq!(main.subsidy_halving_interval, 700_800);
        assert_eq!(main.masternode_port_fork_height, 1_245_400);
        assert_eq!(main.reward_fork_height_1, 1_246_400);
        assert_eq!(main.reward_fork_height_2, 1_275_200);
        assert_eq!(main.alert_pub_key.len(), 65);
        assert_eq!(main.dns_seeds.len(), 4);
        assert_eq!(main.fixed_seeds, vec![0x12345678]);
        assert_eq!(main.base58_prefixes.get(Base58Type::SecretKey), &[176]);
        assert!(main.data_dir.is_none());
        assert!(main.require_rpc_password);
    }

    #[test]
    fn test_testnet_is_a_delta_over_mainnet() {
        let main = ParamsTemplate::main().unwrap();
        let test = ParamsTemplate::testnet().unwrap();

        assert_eq!(test.message_start, [0xfb, 0xc2, 0x11, 0x02]);
        assert_eq!((test.default_port, test.rpc_port), (21994, 21995));
        assert_eq!(test.data_dir.as_deref(), Some("testnet3"));
        assert_eq!(
            (
                test.masternode_port_fork_height,
                test.reward_fork_height_1,
                test.reward_fork_height_2
            ),
            (400, 500, 1000)
        );
        assert!(test.dns_seeds.is_empty());
        assert!(test.fixed_seeds.is_empty());
        assert_eq!(test.base58_prefixes.get(Base58Type::PubkeyAddress), &[80]);
        assert_eq!(test.base58_prefixes.get(Base58Type::SecretKey), &[216]);

        // Inherited unchanged
        assert_eq!(test.subsidy_halving_interval, main.subsidy_halving_interval);
        assert_eq!(test.pow_limit_shift, main.pow_limit_shift);
        assert_eq!(test.genesis.message, main.genesis.message);
        assert_eq!(test.genesis.bits, main.genesis.bits);
        assert_eq!(test.expected_merkle_root, main.expected_merkle_root);
        assert_eq!(test.require_rpc_password, main.require_rpc_password);
    }

    #[test]
    fn test_regtest_is_a_delta_over_testnet() {
        let test = ParamsTemplate::testnet().unwrap();
        let regtest = ParamsTemplate::regtest().unwrap();

        assert_eq!(regtest.message_start, [0xfc, 0x1f, 0xc3, 0x56]);
        assert_eq!(regtest.subsidy_halving_interval, 150);
        assert_eq!(regtest.pow_limit_shift, 1);
        assert_eq!(regtest.genesis.time, 1_296_688_602);
        assert_eq!(regtest.genesis.bits, 0x207fffff);
        assert_eq!(regtest.genesis.nonce, 3);
        assert_eq!(regtest.default_port, 18444);
        assert_eq!(regtest.data_dir.as_deref(), Some("regtest"));
        assert!(!regtest.require_rpc_password);
        assert!(regtest.expected_genesis_hash.is_none());

        // Inherited from testnet, not mainnet
        assert_eq!(regtest.rpc_port, test.rpc_port);
        assert_eq!(regtest.base58_prefixes, test.base58_prefixes);
        assert_eq!(regtest.alert_pub_key, test.alert_pub_key);
        assert_eq!(regtest.reward_fork_height_2, test.reward_fork_height_2);
    }

    #[test]
    fn test_build_mainnet_with_mined_header_hash() {
        let params = build(&ParamsTemplate::main().unwrap()).unwrap();
        assert_eq!(
            params.genesis_hash().to_hex(),
            "00000f639db5734b2b861ef8dbccc33aebd7de44d13de000a12d093bcc866c64"
        );
        assert_eq!(
            params.genesis_block().merkle_root().to_hex(),
            "fa6ef9872494fa9662cf0fecf8c0135a6932e76d7a8764e1155207f3205c7c88"
        );
        assert_eq!(params.fixed_seeds().len(), 1);
        assert_eq!(
            params.fixed_seeds()[0].address.to_string(),
            "120.86.52.18:11884"
        );
    }

    #[test]
    fn test_build_testnet_with_mined_header_hash() {
        let params = build(&ParamsTemplate::testnet().unwrap()).unwrap();
        assert_eq!(
            params.genesis_hash().to_hex(),
            "0000082f5939c2154dbcba35f784530d12e9d72472fcfaf29674ea312cdf4c83"
        );
        assert_eq!(params.genesis_block().header().time, 1_388_868_139);
        assert_eq!(params.genesis_block().header().nonce, 423_087_994);
        assert!(params.fixed_seeds().is_empty());
    }

    #[test]
    fn test_wrong_header_hash_is_rejected() {
        let mut rng = StdRng::seed_from_u64(11);
        let err = ChainParams::build_with_clock(
            &ParamsTemplate::main().unwrap(),
            &Sha256dHasher,
            TEST_NOW,
            &mut rng,
        )
        .unwrap_err();

        assert!(err.is_fatal());
        match err {
            ChainParamsError::GenesisHashMismatch {
                network, computed, ..
            } => {
                assert_eq!(network, Network::Main);
                assert_eq!(
                    computed.to_hex(),
                    "b86b6d3ba7814b9189ab8116354940697dc6d0a78d3a1be5f7fc209975dcd06e"
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_corrupted_merkle_literal_is_rejected() {
        let mut template = ParamsTemplate::main().unwrap();
        template.genesis.reward += 1;
        assert!(matches!(
            build(&template),
            Err(ChainParamsError::MerkleRootMismatch {
                network: Network::Main,
                ..
            })
        ));
    }

    #[test]
    fn test_regtest_hash_is_advisory() {
        // Any header hasher is accepted; the Merkle root is still enforced
        let mut rng = StdRng::seed_from_u64(3);
        let params = ChainParams::build_with_clock(
            &ParamsTemplate::regtest().unwrap(),
            &Sha256dHasher,
            TEST_NOW,
            &mut rng,
        )
        .unwrap();
        assert_eq!(
            params.genesis_hash().to_hex(),
            "d0ce209f7c16a0cdd43a4fbedba43a560d219554ae70e45ae27ee54a04e79bf8"
        );
        assert!(!params.require_rpc_password());
        assert!(params.dns_seeds().is_empty());
    }

    #[test]
    fn test_duplicate_prefix_is_rejected() {
        let mut template = ParamsTemplate::testnet().unwrap();
        template
            .base58_prefixes
            .set(Base58Type::ExtSecretKey, vec![0x3a, 0x80, 0x61, 0xa0]);
        assert!(matches!(
            build(&template),
            Err(ChainParamsError::DuplicateBase58Prefix {
                network: Network::Testnet,
                first: Base58Type::ExtPublicKey,
                second: Base58Type::ExtSecretKey,
            })
        ));
    }

    #[test]
    fn test_pow_limit_matches_genesis_bits() {
        for network in Network::ALL {
            let template = ParamsTemplate::for_network(network).unwrap();
            assert_eq!(
                compact_from_target(&template.pow_limit()),
                template.genesis.bits,
                "{network}"
            );
        }
    }

    #[test]
    fn test_pinned_genesis_hashes_meet_their_targets() {
        for network in [Network::Main, Network::Testnet] {
            let template = ParamsTemplate::for_network(network).unwrap();
            let hash = template.expected_genesis_hash.unwrap();
            assert!(check_proof_of_work(
                &hash,
                template.genesis.bits,
                &template.pow_limit()
            ));
        }
    }

    #[test]
    fn test_data_dir_path() {
        let base = Path::new("/var/lib/node");
        let main = build(&ParamsTemplate::main().unwrap()).unwrap();
        let test = build(&ParamsTemplate::testnet().unwrap()).unwrap();
        assert_eq!(main.data_dir_path(base), PathBuf::from("/var/lib/node"));
        assert_eq!(
            test.data_dir_path(base),
            PathBuf::from("/var/lib/node/testnet3")
        );
    }

    #[test]
    fn test_summary_serializes() {
        let params = build(&ParamsTemplate::regtest().unwrap()).unwrap();
        let json = serde_json::to_value(params.summary()).unwrap();
        assert_eq!(json["network"], "regtest");
        assert_eq!(json["message_start"], "fc1fc356");
        assert_eq!(json["pow_limit_bits"], "207fffff");
        assert_eq!(json["genesis_bits"], "207fffff");
        assert_eq!(json["genesis_hash_pinned"], false);
        assert_eq!(
            json["genesis_hash"],
            "d0ce209f7c16a0cdd43a4fbedba43a560d219554ae70e45ae27ee54a04e79bf8"
        );
        assert_eq!(json["base58_prefixes"]["script_address"], "2c");
    }

    #[test]
    fn test_build_with_wall_clock() {
        let before = current_timestamp().unwrap();
        let params =
            ChainParams::build(&ParamsTemplate::main().unwrap(), &PinnedHeaderHasher::genesis())
                .unwrap();
        let after = current_timestamp().unwrap();

        assert!(params.genesis_hash_pinned());
        let seed = &params.fixed_seeds()[0];
        assert!(seed.last_seen > before - 2 * ONE_WEEK);
        assert!(seed.last_seen < after - ONE_WEEK);
    }
}
