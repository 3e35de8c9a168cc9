//! Core consensus building blocks
//!
//! Hashes, scripts, transactions, Merkle trees, blocks and the compact
//! proof-of-work target: everything needed to rebuild and check a genesis
//! block byte for byte.

pub mod block;
pub mod hash;
pub mod merkle;
pub mod monetary;
pub mod proof_of_work;
pub mod script;
pub mod transaction;

pub use block::{Block, BlockHeader, GenesisBlock, GenesisConfig, BLOCK_HEADER_SIZE};
pub use hash::{sha256d, Hash256, HeaderHasher, Sha256dHasher};
pub use merkle::{MerkleBranch, MerkleTree, ProofElement};
pub use monetary::{COIN, GENESIS_REWARD};
pub use proof_of_work::{check_proof_of_work, compact_from_target, pow_limit, target_from_compact};
pub use script::Script;
pub use transaction::{OutPoint, Transaction, TxIn, TxOut};
