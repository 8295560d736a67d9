//! Seeded random streams for synthetic parcel data
//!
//! Each parcel gets its own stream derived from (master seed, stream, parcel id),
//! so one catalog seed reproduces every canopy grid regardless of load order.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Stream identifier, keeps unrelated consumers of the same parcel id apart.
pub type StreamId = u32;

pub const CANOPY_STREAM: StreamId = 1;

#[derive(Debug, Clone, Copy)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Deterministic RNG for the canopy grid of one parcel
    pub fn canopy_rng(&self, parcel_id: u32) -> ChaCha8Rng {
        self.stream_rng(CANOPY_STREAM, parcel_id as u64)
    }

    pub fn stream_rng(&self, stream: StreamId, key: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.derive_seed(stream, key))
    }

    fn derive_seed(&self, stream: StreamId, key: u64) -> u64 {
        let mut seed = splitmix64(self.master_seed);
        seed = splitmix64(seed ^ u64::from(stream));
        splitmix64(seed ^ key)
    }
}

/// SplitMix64 finaliser; bijective, so distinct inputs never share a seed.
fn splitmix64(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

impl Default for RngManager {
    fn default() -> Self {
        Self::new(42)
    }
}
