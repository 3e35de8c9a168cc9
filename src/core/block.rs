use crate::core::hash::{Hash256, HeaderHasher};
use crate::core::{MerkleTree, Transaction};
use crate::error::{ChainParamsError, Result};
use log::debug;

pub const BLOCK_HEADER_SIZE: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// The 80-byte header preimage fed to the proof-of-work hash.
    pub fn serialize(&self) -> [u8; BLOCK_HEADER_SIZE] {
        let mut out = [0u8; BLOCK_HEADER_SIZE];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(self.prev_block_hash.as_bytes());
        out[36..68].copy_from_slice(self.merkle_root.as_bytes());
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    pub fn hash(&self, hasher: &dyn HeaderHasher) -> Hash256 {
        hasher.hash_header(&self.serialize())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    header: BlockHeader,
    transactions: Vec<Transaction>,
}

impl Block {
    /// Assemble a block, computing its Merkle root from `transactions`.
    pub fn new(
        version: i32,
        prev_block_hash: Hash256,
        time: u32,
        bits: u32,
        nonce: u32,
        transactions: Vec<Transaction>,
    ) -> Result<Block> {
        if transactions.is_empty() {
            return Err(ChainParamsError::InvalidBlock(
                "Block must contain at least one transaction".to_string(),
            ));
        }

        let merkle_root = Self::calculate_merkle_root(&transactions)?;
        Ok(Block {
            header: BlockHeader {
                version,
                prev_block_hash,
                merkle_root,
                time,
                bits,
                nonce,
            },
            transactions,
        })
    }

    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn merkle_root(&self) -> Hash256 {
        self.header.merkle_root
    }

    /// Verify that the header's Merkle root matches the transactions
    pub fn verify_merkle_root(&self) -> Result<bool> {
        let calculated_root = Self::calculate_merkle_root(&self.transactions)?;
        Ok(calculated_root == self.header.merkle_root)
    }

    fn calculate_merkle_root(transactions: &[Transaction]) -> Result<Hash256> {
        let transaction_hashes: Vec<Hash256> =
            transactions.iter().map(Transaction::txid).collect();

        MerkleTree::calculate_merkle_root(&transaction_hashes)
    }
}

/// The literal inputs from which a network's genesis block is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisConfig {
    /// Human-readable message embedded in the coinbase input
    pub message: String,
    /// Difficulty bits value pushed ahead of the message
    pub script_bits: i64,
    /// Small integer pushed between the bits and the message
    pub script_extra: i64,
    pub reward: i64,
    pub output_pubkey: Vec<u8>,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl GenesisConfig {
    pub fn coinbase(&self) -> Transaction {
        Transaction::new_genesis_coinbase(
            self.message.as_bytes(),
            self.script_bits,
            self.script_extra,
            self.reward,
            &self.output_pubkey,
        )
    }

    /// Build the genesis block without hashing its header.
    pub fn build_block(&self) -> Result<Block> {
        Block::new(
            self.version,
            Hash256::ZERO,
            self.time,
            self.bits,
            self.nonce,
            vec![self.coinbase()],
        )
    }

    /// Build the genesis block and hash its header with `hasher`.
    pub fn build(&self, hasher: &dyn HeaderHasher) -> Result<GenesisBlock> {
        let block = self.build_block()?;
        let hash = block.header().hash(hasher);
        debug!(
            "Built genesis block {hash} with {} (merkle root {})",
            hasher.name(),
            block.merkle_root()
        );
        Ok(GenesisBlock { block, hash })
    }
}

/// A genesis block together with its cached header hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisBlock {
    block: Block,
    hash: Hash256,
}

impl GenesisBlock {
    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn header(&self) -> &BlockHeader {
        self.block.header()
    }

    pub fn hash(&self) -> Hash256 {
        self.hash
    }

    pub fn merkle_root(&self) -> Hash256 {
        self.block.merkle_root()
    }
}
