//! Error handling for chain parameters
//!
//! Two kinds of failure exist here. Fatal ones mean a literal constant or
//! the hashing path is broken and the node must not continue. Recoverable
//! ones are configuration problems the caller can report and exit on.

use crate::chainparams::{Base58Type, Network};
use crate::core::Hash256;
use std::fmt;

/// Result type alias for chain parameter operations
pub type Result<T> = std::result::Result<T, ChainParamsError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainParamsError {
    /// Merkle root requested over zero transactions
    EmptyMerkleInput,
    /// Computed genesis hash differs from the pinned literal
    GenesisHashMismatch {
        network: Network,
        expected: Hash256,
        computed: Hash256,
    },
    /// Computed genesis Merkle root differs from the pinned literal
    MerkleRootMismatch {
        network: Network,
        expected: Hash256,
        computed: Hash256,
    },
    /// Two address kinds of one network share a prefix
    DuplicateBase58Prefix {
        network: Network,
        first: Base58Type,
        second: Base58Type,
    },
    /// Network name that is not main, test or regtest
    UnknownNetwork(String),
    /// A hard-coded literal (hex key, hash) failed to parse
    InvalidLiteral(String),
    /// Block structure errors, such as an out-of-range transaction index
    InvalidBlock(String),
    /// Compact difficulty bits that decode to a negative, zero or overflowing target
    InvalidCompactTarget(u32),
    /// Both -testnet and -regtest were requested
    MutuallyExclusiveFlags,
    /// Registry was published twice
    AlreadyInitialized,
    /// Registry read before it was published
    NotInitialized,
    /// Configuration file or value errors
    Config(String),
    /// File I/O errors
    Io(String),
    /// System clock errors
    Clock(String),
}

impl ChainParamsError {
    /// Whether this error means the process must not keep running.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ChainParamsError::EmptyMerkleInput
                | ChainParamsError::GenesisHashMismatch { .. }
                | ChainParamsError::MerkleRootMismatch { .. }
                | ChainParamsError::DuplicateBase58Prefix { .. }
                | ChainParamsError::UnknownNetwork(_)
                | ChainParamsError::InvalidLiteral(_)
                | ChainParamsError::InvalidCompactTarget(_)
        )
    }
}

impl fmt::Display for ChainParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainParamsError::EmptyMerkleInput => {
                write!(f, "Cannot compute a Merkle root from an empty list")
            }
            ChainParamsError::GenesisHashMismatch {
                network,
                expected,
                computed,
            } => write!(
                f,
                "Genesis hash mismatch on {network}: expected {expected}, computed {computed}"
            ),
            ChainParamsError::MerkleRootMismatch {
                network,
                expected,
                computed,
            } => write!(
                f,
                "Genesis Merkle root mismatch on {network}: expected {expected}, computed {computed}"
            ),
            ChainParamsError::DuplicateBase58Prefix {
                network,
                first,
                second,
            } => write!(
                f,
                "Duplicate base58 prefix on {network}: {first} and {second}"
            ),
            ChainParamsError::UnknownNetwork(name) => write!(f, "Unknown network: {name}"),
            ChainParamsError::InvalidLiteral(msg) => write!(f, "Invalid literal: {msg}"),
            ChainParamsError::InvalidBlock(msg) => write!(f, "Invalid block: {msg}"),
            ChainParamsError::InvalidCompactTarget(bits) => {
                write!(f, "Invalid compact target: {bits:#010x}")
            }
            ChainParamsError::MutuallyExclusiveFlags => {
                write!(f, "Invalid combination of -regtest and -testnet")
            }
            ChainParamsError::AlreadyInitialized => {
                write!(f, "Chain parameters were already published")
            }
            ChainParamsError::NotInitialized => {
                write!(f, "Chain parameters have not been published yet")
            }
            ChainParamsError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ChainParamsError::Io(msg) => write!(f, "I/O error: {msg}"),
            ChainParamsError::Clock(msg) => write!(f, "Clock error: {msg}"),
        }
    }
}

impl std::error::Error for ChainParamsError {}

impl From<std::io::Error> for ChainParamsError {
    fn from(err: std::io::Error) -> Self {
        ChainParamsError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ChainParamsError {
    fn from(err: toml::de::Error) -> Self {
        ChainParamsError::Config(err.to_string())
    }
}

impl From<data_encoding::DecodeError> for ChainParamsError {
    fn from(err: data_encoding::DecodeError) -> Self {
        ChainParamsError::InvalidLiteral(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(ChainParamsError::EmptyMerkleInput.is_fatal());
        assert!(ChainParamsError::UnknownNetwork("signet".to_string()).is_fatal());
        assert!(ChainParamsError::GenesisHashMismatch {
            network: Network::Main,
            expected: Hash256::ZERO,
            computed: Hash256::ZERO,
        }
        .is_fatal());

        assert!(!ChainParamsError::MutuallyExclusiveFlags.is_fatal());
        assert!(!ChainParamsError::Config("bad".to_string()).is_fatal());
        assert!(!ChainParamsError::NotInitialized.is_fatal());
    }

    #[test]
    fn test_display_mentions_network() {
        let err = ChainParamsError::MerkleRootMismatch {
            network: Network::Testnet,
            expected: Hash256::ZERO,
            computed: Hash256::ZERO,
        };
        assert!(err.to_string().contains("test"));
    }
}
