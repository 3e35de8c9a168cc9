use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "chainparams", about = "Inspect per-network chain parameters")]
pub struct Opt {
    #[arg(long, global = true, help = "Use the test network")]
    pub testnet: bool,
    #[arg(long, global = true, help = "Use the regression test network")]
    pub regtest: bool,
    #[arg(
        long = "conf",
        global = true,
        value_name = "FILE",
        help = "TOML file with testnet/regtest settings"
    )]
    pub conf: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "show", about = "Print the parameters of the selected network")]
    Show {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
    #[command(
        name = "genesis",
        about = "Rebuild the genesis block and print its header preimage"
    )]
    Genesis,
    #[command(name = "seeds", about = "Print DNS seeds and fixed seed addresses")]
    Seeds,
    #[command(name = "networks", about = "List the known networks")]
    Networks,
}
