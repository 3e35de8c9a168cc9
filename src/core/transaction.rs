// This file implements the transaction shape needed for genesis construction
// The layout follows the Bitcoin consensus serialization so that the txid
// (and therefore the genesis Merkle root) matches the pinned literals bit for bit

use crate::core::hash::{sha256d, Hash256};
use crate::core::script::{Script, OP_CHECKSIG};
use crate::utils::{write_compact_size, write_var_bytes};

pub const CURRENT_TX_VERSION: i32 = 1;

/// Sequence value for inputs that opt out of relative locks.
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

// A reference to an output of an earlier transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutPoint {
    pub txid: Hash256,
    pub vout: u32,
}

impl OutPoint {
    // Coinbase inputs point at nothing: zero txid and an all-ones index
    pub fn null() -> OutPoint {
        OutPoint {
            txid: Hash256::ZERO,
            vout: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    pub value: i64, // In base units, see core::monetary::COIN
    pub script_pubkey: Script,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Build the single coinbase transaction embedded in a genesis block.
    ///
    /// The input script carries `bits_push` and `extra_push` ahead of the
    /// message so the coinbase content is unique and auditable. The output
    /// pays `reward` to `output_pubkey` with a plain pay-to-pubkey script.
    pub fn new_genesis_coinbase(
        message: &[u8],
        bits_push: i64,
        extra_push: i64,
        reward: i64,
        output_pubkey: &[u8],
    ) -> Transaction {
        let script_sig = Script::new()
            .push_int(bits_push)
            .push_num(extra_push)
            .push_slice(message);

        let script_pubkey = Script::new()
            .push_slice(output_pubkey)
            .push_opcode(OP_CHECKSIG);

        Transaction {
            version: CURRENT_TX_VERSION,
            inputs: vec![TxIn {
                prevout: OutPoint::null(),
                script_sig,
                sequence: SEQUENCE_FINAL,
            }],
            outputs: vec![TxOut {
                value: reward,
                script_pubkey,
            }],
            lock_time: 0,
        }
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    /// Consensus serialization, the preimage of the txid.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut buf, self.inputs.len() as u64);
        for input in &self.inputs {
            buf.extend_from_slice(input.prevout.txid.as_bytes());
            buf.extend_from_slice(&input.prevout.vout.to_le_bytes());
            write_var_bytes(&mut buf, input.script_sig.as_bytes());
            buf.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut buf, self.outputs.len() as u64);
        for output in &self.outputs {
            buf.extend_from_slice(&output.value.to_le_bytes());
            write_var_bytes(&mut buf, output.script_pubkey.as_bytes());
        }

        buf.extend_from_slice(&self.lock_time.to_le_bytes());
        buf
    }

    pub fn txid(&self) -> Hash256 {
        sha256d(&self.serialize())
    }
}
