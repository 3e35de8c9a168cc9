use log::debug;
use rand::Rng;
use serde::Serialize;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// A DNS seed: a display name and the host to resolve for peers.
///
/// Resolution itself belongs to the peer layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSeedData {
    pub name: String,
    pub host: String,
}

impl DnsSeedData {
    pub fn new(name: &str, host: &str) -> DnsSeedData {
        DnsSeedData {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// A hard-coded bootstrap peer with a jittered "last seen" time.
///
/// These are ordinary unauthenticated peer candidates, not trust anchors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedAddress {
    pub address: SocketAddr,
    /// Unix seconds
    pub last_seen: i64,
}

/// Read a raw seed value in the byte order it has in memory on the
/// little-endian hosts the seed tables were generated on.
pub fn ipv4_from_raw(raw: u32) -> Ipv4Addr {
    Ipv4Addr::from(raw.to_le_bytes())
}

/// Turn raw IPv4 seed values into dialable endpoints on `port`.
///
/// Each endpoint is stamped as last seen between one and two weeks before
/// `now`, so restarting nodes do not all prefer the same seed at once.
/// Once a node connects anywhere it learns fresher addresses and stops
/// leaning on these.
pub fn fixed_seed_addresses<R: Rng>(
    raw_seeds: &[u32],
    port: u16,
    now: i64,
    rng: &mut R,
) -> Vec<SeedAddress> {
    let seeds: Vec<SeedAddress> = raw_seeds
        .iter()
        .map(|raw| SeedAddress {
            address: SocketAddr::V4(SocketAddrV4::new(ipv4_from_raw(*raw), port)),
            last_seen: now - ONE_WEEK - rng.gen_range(1..ONE_WEEK),
        })
        .collect();

    debug!("Prepared {} fixed seed addresses on port {port}", seeds.len());
    seeds
}
