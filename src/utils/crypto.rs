use ring::digest::{Context, SHA256};

use crate::error::{ChainParamsError, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch.
pub fn current_timestamp() -> Result<i64> {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| ChainParamsError::Clock(format!("System time error: {e}")))?
        .as_secs();

    // Ensure the timestamp fits in i64
    if duration > i64::MAX as u64 {
        return Err(ChainParamsError::Clock("Timestamp overflow".to_string()));
    }

    Ok(duration as i64)
}

fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

/// SHA-256 applied twice, as used for txids and Merkle nodes.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = sha256_digest(data);
    let mut context = Context::new(&SHA256);
    context.update(&first);
    let mut out = [0u8; 32];
    out.copy_from_slice(context.finish().as_ref());
    out
}
