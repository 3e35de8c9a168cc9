use crate::error::{ChainParamsError, Result};
use crate::utils::double_sha256;
use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use num_bigint::BigUint;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 256-bit hash stored in internal (little-endian) byte order.
///
/// Hex strings are read and written in display order, which is the byte
/// reverse of the stored bytes. That is the form block explorers and the
/// pinned genesis literals use.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    pub fn from_bytes(bytes: [u8; 32]) -> Hash256 {
        Hash256(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse a display-order hex string, with or without a `0x` prefix.
    pub fn from_hex(input: &str) -> Result<Hash256> {
        let hex = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);

        if hex.len() != 64 {
            return Err(ChainParamsError::InvalidLiteral(format!(
                "hash must be 64 hex characters, got {}",
                hex.len()
            )));
        }

        let decoded = HEXLOWER_PERMISSIVE.decode(hex.as_bytes())?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&decoded);
        bytes.reverse();
        Ok(Hash256(bytes))
    }

    /// Display-order hex.
    pub fn to_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        HEXLOWER.encode(&reversed)
    }

    /// Interpret the hash as an unsigned 256-bit integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl FromStr for Hash256 {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self> {
        Hash256::from_hex(s)
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Double SHA-256 of `data` as a hash.
pub fn sha256d(data: &[u8]) -> Hash256 {
    Hash256(double_sha256(data))
}

/// Block header hashing, the proof-of-work hash of a chain.
///
/// Txids and Merkle nodes always use double SHA-256. The header hash is
/// chain specific, so the node supplies it and genesis verification runs
/// against whatever hasher is plugged in here.
pub trait HeaderHasher {
    fn hash_header(&self, header: &[u8]) -> Hash256;

    fn name(&self) -> &'static str;
}

/// Bitcoin-style header hashing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256dHasher;

impl HeaderHasher for Sha256dHasher {
    fn hash_header(&self, header: &[u8]) -> Hash256 {
        sha256d(header)
    }

    fn name(&self) -> &'static str {
        "sha256d"
    }
}
