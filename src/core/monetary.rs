/// Monetary constants
///
/// Amounts are signed 64-bit integers of base units, which is how they are
/// serialized inside transaction outputs.
///
/// Number of base units in one coin
pub const COIN: i64 = 100_000_000;

/// Reward carried by the genesis coinbase output (16 coins)
pub const GENESIS_REWARD: i64 = 16 * COIN;
