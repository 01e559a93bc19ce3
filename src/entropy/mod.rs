//! Randomness sources for the sampler.

mod hw;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

// Odd multipliers for the state transition.
const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xd6e8_feb8_6659_fd93,
    0xa076_1d64_78bd_642f,
    0xe703_7ed1_a0b4_28db,
    0x8ebc_6af0_9c88_c6e3,
    0x5899_65cc_7537_4cc3,
];

/// Cycle-counter mixer. Each draw folds a fresh counter read into the state,
/// then runs the SplitMix64 finalizer over it.
pub struct HwRng {
    state: u64,
}

impl HwRng {
    pub fn new() -> Self {
        Self { state: hw::counter() }
    }
}

impl Default for HwRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for HwRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let ent = hw::counter();

        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Where the sampler draws its randomness from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Hardware,
    Thread,
    Seeded(u64),
}

impl Source {
    pub fn rng(self) -> Box<dyn RngCore> {
        match self {
            Source::Hardware => Box::new(HwRng::new()),
            Source::Thread => Box::new(rand::thread_rng()),
            Source::Seeded(seed) => Box::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Source::Hardware => hw::source_name(),
            Source::Thread => "thread rng",
            Source::Seeded(_) => "seeded",
        }
    }
}
