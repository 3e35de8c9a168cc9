// Entry point for the chainparams tool
// Startup builds and verifies every network, selects one from the flags and
// publishes it; each command then reads the published parameters
use chain_params::core::{HeaderHasher, Sha256dHasher};
use chain_params::{
    global_registry, params, publish, ChainParamsError, Command, Config, NetworkRegistry, Opt,
    ParamsTemplate,
};
use clap::Parser;
use data_encoding::HEXLOWER;
use log::{error, info, LevelFilter};
use std::process;

fn main() {
    // Info by default, RUST_LOG still wins when set
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let opt = Opt::parse();

    if let Err(e) = run(opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// File first, then environment, then flags; every source can only turn a flag on
fn load_config(opt: &Opt) -> Result<Config, ChainParamsError> {
    let file = match &opt.conf {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    Ok(file
        .merge(Config::new()?)
        .merge_flags(opt.testnet, opt.regtest))
}

fn start(
    config: &Config,
    hasher: &dyn HeaderHasher,
) -> Result<&'static NetworkRegistry, ChainParamsError> {
    let registry = match NetworkRegistry::from_config(hasher, config) {
        Ok(registry) => registry,
        Err(err) => {
            if let ChainParamsError::GenesisHashMismatch { network, .. } = &err {
                // Print the preimage so it can be checked against the chain's own header hash
                if let Ok(block) =
                    ParamsTemplate::for_network(*network).and_then(|t| t.genesis.build_block())
                {
                    error!(
                        "{network} genesis header {} does not hash to the published value with {}",
                        HEXLOWER.encode(&block.header().serialize()),
                        hasher.name()
                    );
                }
            }
            return Err(err);
        }
    };
    publish(registry)
}

fn run(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&opt)?;
    start(&config, &Sha256dHasher)?;

    let active = params()?;
    info!("Using {} network", active.network());

    match opt.command {
        Command::Show { json } => {
            let summary = active.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Network:            {}", summary.network);
                println!("Message start:      {}", summary.message_start);
                println!("Ports (p2p/rpc):    {}/{}", summary.default_port, summary.rpc_port);
                println!("PoW limit bits:     {}", summary.pow_limit_bits);
                println!("Halving interval:   {}", summary.subsidy_halving_interval);
                println!(
                    "Fork heights:       masternode {}, reward {} / {}",
                    summary.masternode_port_fork_height,
                    summary.reward_fork_height_1,
                    summary.reward_fork_height_2
                );
                let pinned = if summary.genesis_hash_pinned {
                    "verified"
                } else {
                    "not pinned"
                };
                println!("Genesis hash:       {} ({pinned})", summary.genesis_hash);
                println!("Genesis merkle:     {}", summary.genesis_merkle_root);
                for (kind, prefix) in summary.base58_prefixes.iter() {
                    println!("Prefix {:<14} {}", format!("{kind}:"), HEXLOWER.encode(prefix));
                }
                println!(
                    "Data dir:           {}",
                    summary.data_dir.as_deref().unwrap_or("(base)")
                );
                println!("RPC password:       {}", summary.require_rpc_password);
            }
        }
        Command::Genesis => {
            let genesis = active.genesis_block();
            for tx in genesis.block().transactions() {
                println!("Coinbase txid:      {}", tx.txid());
                println!("Coinbase tx:        {}", HEXLOWER.encode(&tx.serialize()));
            }
            println!("Merkle root:        {}", genesis.merkle_root());
            println!("Header:             {}", HEXLOWER.encode(&genesis.header().serialize()));
            println!("Hash:               {}", genesis.hash());
        }
        Command::Seeds => {
            for seed in active.dns_seeds() {
                println!("dns   {} ({})", seed.host, seed.name);
            }
            for seed in active.fixed_seeds() {
                println!("fixed {} last seen {}", seed.address, seed.last_seen);
            }
        }
        Command::Networks => {
            for known in global_registry()?.iter() {
                let marker = if known.network() == active.network() {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{marker} {:<8} magic {} port {}",
                    known.network().name(),
                    HEXLOWER.encode(&known.message_start()),
                    known.default_port()
                );
            }
        }
    }
    Ok(())
}
