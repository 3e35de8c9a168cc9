use crate::core::hash::{sha256d, Hash256};
use crate::core::Transaction;
use crate::error::{ChainParamsError, Result};
use serde::Serialize;

/// Merkle tree over transaction ids
///
/// Every level is kept so that inclusion branches can be produced for any
/// leaf. Odd levels pair their last hash with itself.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    levels: Vec<Vec<Hash256>>,
}

/// Inclusion proof for one leaf
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MerkleBranch {
    /// Index of the leaf in the transaction list
    pub index: usize,
    /// Sibling hashes from the leaf level upwards
    pub path: Vec<ProofElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProofElement {
    /// Sibling hash
    pub hash: Hash256,
    /// Direction: true if sibling is on the right, false if on the left
    pub is_right: bool,
}

impl MerkleTree {
    /// Create a Merkle tree from a list of transactions
    pub fn from_transactions(transactions: &[Transaction]) -> Result<Self> {
        let leaves: Vec<Hash256> = transactions.iter().map(Transaction::txid).collect();
        Self::from_hashes(&leaves)
    }

    /// Create a Merkle tree from leaf hashes
    pub fn from_hashes(hashes: &[Hash256]) -> Result<Self> {
        if hashes.is_empty() {
            return Err(ChainParamsError::EmptyMerkleInput);
        }

        let mut levels = vec![hashes.to_vec()];
        while levels[levels.len() - 1].len() > 1 {
            let next = Self::next_level(&levels[levels.len() - 1]);
            levels.push(next);
        }

        Ok(MerkleTree { levels })
    }

    /// Calculate the Merkle root without keeping the intermediate levels
    pub fn calculate_merkle_root(hashes: &[Hash256]) -> Result<Hash256> {
        if hashes.is_empty() {
            return Err(ChainParamsError::EmptyMerkleInput);
        }

        // A single leaf is its own root: zero combining rounds
        let mut current_level = hashes.to_vec();
        while current_level.len() > 1 {
            current_level = Self::next_level(&current_level);
        }

        Ok(current_level[0])
    }

    pub fn root(&self) -> Hash256 {
        // from_hashes never builds an empty tree, and the top level has one hash
        self.levels[self.levels.len() - 1][0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Build the inclusion branch for the leaf at `index`
    pub fn branch(&self, index: usize) -> Result<MerkleBranch> {
        if index >= self.leaf_count() {
            return Err(ChainParamsError::InvalidBlock(format!(
                "Leaf index {} out of bounds (leaves: {})",
                index,
                self.leaf_count()
            )));
        }

        let mut path = Vec::new();
        let mut position = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let is_right = position % 2 == 0;
            let sibling = if is_right {
                // Odd level: the last node is paired with itself
                level.get(position + 1).unwrap_or(&level[position])
            } else {
                &level[position - 1]
            };
            path.push(ProofElement {
                hash: *sibling,
                is_right,
            });
            position /= 2;
        }

        Ok(MerkleBranch { index, path })
    }

    fn next_level(level: &[Hash256]) -> Vec<Hash256> {
        level
            .chunks(2)
            .map(|pair| {
                let left = &pair[0];
                // Duplicate the last hash if odd number (Bitcoin behavior)
                let right = pair.get(1).unwrap_or(left);
                Self::hash_pair(left, right)
            })
            .collect()
    }

    /// Hash two nodes together (double SHA-256)
    fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
        let mut combined = Vec::with_capacity(64);
        combined.extend_from_slice(left.as_bytes());
        combined.extend_from_slice(right.as_bytes());
        sha256d(&combined)
    }
}

impl MerkleBranch {
    /// Recompute the root from `leaf` and check it against `root`
    pub fn verify(&self, leaf: &Hash256, root: &Hash256) -> bool {
        let mut current = *leaf;
        for element in &self.path {
            current = if element.is_right {
                MerkleTree::hash_pair(&current, &element.hash)
            } else {
                MerkleTree::hash_pair(&element.hash, &current)
            };
        }
        current == *root
    }
}
