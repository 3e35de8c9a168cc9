use crate::chainparams::Network;
use crate::error::{ChainParamsError, Result};
use data_encoding::HEXLOWER;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Kinds of base58-encoded payloads that carry a network prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Base58Type::PubkeyAddress => "pubkey_address",
            Base58Type::ScriptAddress => "script_address",
            Base58Type::SecretKey => "secret_key",
            Base58Type::ExtPublicKey => "ext_public_key",
            Base58Type::ExtSecretKey => "ext_secret_key",
        }
    }
}

impl fmt::Display for Base58Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Prefix bytes for each [`Base58Type`] of one network.
///
/// The address codec that consumes these owns the encoding itself; this
/// type only guarantees the prefixes are unambiguous within a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base58Prefixes {
    pubkey_address: Vec<u8>,
    script_address: Vec<u8>,
    secret_key: Vec<u8>,
    ext_public_key: Vec<u8>,
    ext_secret_key: Vec<u8>,
}

impl Base58Prefixes {
    pub fn new(
        pubkey_address: Vec<u8>,
        script_address: Vec<u8>,
        secret_key: Vec<u8>,
        ext_public_key: Vec<u8>,
        ext_secret_key: Vec<u8>,
    ) -> Base58Prefixes {
        Base58Prefixes {
            pubkey_address,
            script_address,
            secret_key,
            ext_public_key,
            ext_secret_key,
        }
    }

    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }

    pub fn set(&mut self, kind: Base58Type, prefix: Vec<u8>) {
        let slot = match kind {
            Base58Type::PubkeyAddress => &mut self.pubkey_address,
            Base58Type::ScriptAddress => &mut self.script_address,
            Base58Type::SecretKey => &mut self.secret_key,
            Base58Type::ExtPublicKey => &mut self.ext_public_key,
            Base58Type::ExtSecretKey => &mut self.ext_secret_key,
        };
        *slot = prefix;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Base58Type, &[u8])> + '_ {
        Base58Type::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Fail if two kinds share the same prefix bytes.
    pub fn check_distinct(&self, network: Network) -> Result<()> {
        for (i, first) in Base58Type::ALL.iter().enumerate() {
            for second in &Base58Type::ALL[i + 1..] {
                if self.get(*first) == self.get(*second) {
                    return Err(ChainParamsError::DuplicateBase58Prefix {
                        network,
                        first: *first,
                        second: *second,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Serialize for Base58Prefixes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Base58Type::ALL.len()))?;
        for (kind, prefix) in self.iter() {
            map.serialize_entry(kind.name(), &HEXLOWER.encode(prefix))?;
        }
        map.end()
    }
}
