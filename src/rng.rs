//! Weight generator for treap balancing.
//!
//! Weights only have to be uniformly spread and independent of the insertion
//! order, so a xorshift64 step is plenty. The state is seeded from the
//! operating system unless the caller asks for a fixed seed.

use rand_core::OsRng;
use rand_core::RngCore;
use rand_core::SeedableRng;
use rand_core::impls;

/// Fallback state; xorshift never leaves zero, so zero seeds are replaced.
const DEFAULT_STATE: u64 = 0x12345678_9abcdef0;

/// A xorshift64 generator.
#[derive(Clone, Debug)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Seed from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        return Self::from_state(OsRng.next_u64());
    }

    fn from_state(state: u64) -> Self {
        let state = if state == 0 { DEFAULT_STATE } else { state };
        return XorShift64 { state };
    }
}

impl RngCore for XorShift64 {
    fn next_u32(&mut self) -> u32 {
        // High half has the better spread.
        return (self.next_u64() >> 32) as u32;
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        return x;
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        return Ok(());
    }
}

impl SeedableRng for XorShift64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        return Self::from_state(u64::from_le_bytes(seed));
    }

    fn seed_from_u64(state: u64) -> Self {
        return Self::from_state(state);
    }
}
