use crate::core::Hash256;
use crate::error::{ChainParamsError, Result};
use log::debug;
use num_bigint::BigUint;

/// Easiest permitted target: the all-ones 256-bit value shifted right.
pub fn pow_limit(shift: u32) -> BigUint {
    BigUint::from_bytes_be(&[0xff; 32]) >> shift
}

/// Decode compact difficulty bits into a full target.
///
/// The top byte is a base-256 exponent and the low 23 bits the mantissa.
/// Bit 23 is a sign bit; negative and overflowing encodings are rejected.
pub fn target_from_compact(bits: u32) -> Result<BigUint> {
    let size = bits >> 24;
    let mut word = bits & 0x007f_ffff;

    let negative = word != 0 && (bits & 0x0080_0000) != 0;
    let overflow =
        word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
    if negative || overflow {
        return Err(ChainParamsError::InvalidCompactTarget(bits));
    }

    let target = if size <= 3 {
        word >>= 8 * (3 - size);
        BigUint::from(word)
    } else {
        BigUint::from(word) << (8 * (size - 3))
    };
    Ok(target)
}

/// Encode a target into compact difficulty bits (the inverse of
/// [`target_from_compact`], losing precision below the top three bytes).
pub fn compact_from_target(target: &BigUint) -> u32 {
    let mut size = ((target.bits() + 7) / 8) as u32;
    let mut compact = if size <= 3 {
        low_u32(target) << (8 * (3 - size))
    } else {
        low_u32(&(target >> (8 * (size - 3))))
    };

    // Keep the mantissa clear of the sign bit
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }

    compact | (size << 24)
}

/// Check that `hash` meets the target encoded in `bits`, and that the
/// target itself is no easier than `limit`.
pub fn check_proof_of_work(hash: &Hash256, bits: u32, limit: &BigUint) -> bool {
    let target = match target_from_compact(bits) {
        Ok(target) => target,
        Err(e) => {
            debug!("Rejecting proof of work: {e}");
            return false;
        }
    };

    if target == BigUint::from(0u32) || &target > limit {
        debug!("Rejecting proof of work: target for {bits:#010x} is out of range");
        return false;
    }

    hash.to_biguint() <= target
}

fn low_u32(value: &BigUint) -> u32 {
    value.to_u32_digits().first().copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_limit_bit_lengths() {
        assert_eq!(pow_limit(20).bits(), 236);
        assert_eq!(pow_limit(1).bits(), 255);
        assert_eq!(pow_limit(0).bits(), 256);
        assert!(pow_limit(1) > pow_limit(20));
    }

    #[test]
    fn test_pow_limit_compact_encoding() {
        assert_eq!(compact_from_target(&pow_limit(20)), 0x1e0fffff);
        assert_eq!(compact_from_target(&pow_limit(1)), 0x207fffff);
    }

    #[test]
    fn test_target_from_compact_values() {
        // 0x0fffff * 256^(0x1e - 3)
        let target = target_from_compact(0x1e0fffff).unwrap();
        assert_eq!(target, BigUint::from(0x0fffffu32) << 216u32);

        // Small exponents shift the mantissa down
        assert_eq!(
            target_from_compact(0x01123456).unwrap(),
            BigUint::from(0x12u32)
        );
        assert_eq!(target_from_compact(0).unwrap(), BigUint::from(0u32));
    }

    #[test]
    fn test_target_from_compact_rejects_negative_and_overflow() {
        assert_eq!(
            target_from_compact(0x04923456),
            Err(ChainParamsError::InvalidCompactTarget(0x04923456))
        );
        assert!(target_from_compact(0xff123456).is_err());
    }

    #[test]
    fn test_compact_round_trip() {
        for bits in [0x1d00ffffu32, 0x1e0fffff, 0x207fffff, 0x1b0404cb] {
            let target = target_from_compact(bits).unwrap();
            assert_eq!(compact_from_target(&target), bits);
        }
    }

    #[test]
    fn test_check_proof_of_work() {
        let limit = pow_limit(20);
        let good =
            Hash256::from_hex("00000f639db5734b2b861ef8dbccc33aebd7de44d13de000a12d093bcc866c64")
                .unwrap();
        assert!(check_proof_of_work(&good, 0x1e0fffff, &limit));

        let bad =
            Hash256::from_hex("b86b6d3ba7814b9189ab8116354940697dc6d0a78d3a1be5f7fc209975dcd06e")
                .unwrap();
        assert!(!check_proof_of_work(&bad, 0x1e0fffff, &limit));

        // Regtest-style bits are easier than the main limit allows
        assert!(!check_proof_of_work(&good, 0x207fffff, &limit));
        assert!(!check_proof_of_work(&good, 0, &limit));
    }
}
