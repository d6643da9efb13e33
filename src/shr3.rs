#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use super::gf2::BitMatrix32;
use super::rng::{impl_rand_core, SimpleRng};
use super::seed::seed_at;

/// Replaces the forbidden zero state.
pub const SHR3_DEFAULT: u32 = 0xffffffff;

/// 3-shift-register xorshift generator. Zero is a fixed point,
/// so the state is never 0 and neither is the output.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Shr3 {
    shr3: u32,
}

#[inline]
const fn step(x: u32) -> u32 {
    let x = x ^ (x << 13);
    let x = x ^ (x >> 17);
    x ^ (x << 5)
}

const fn transition_matrix() -> BitMatrix32 {
    let mut columns = [0u32; 32];
    let mut i = 0;
    while i < 32 {
        columns[i] = step(1 << i);
        i += 1;
    }
    BitMatrix32::from_columns(columns)
}

const SHR3_MATRIX: BitMatrix32 = transition_matrix();

impl Shr3 {
    pub fn new(seed: u32) -> Self {
        let mut shr3 = Shr3 { shr3: seed };
        shr3.sanitize();
        shr3
    }

    #[inline]
    fn sanitize(&mut self) {
        if self.shr3 == 0 {
            self.shr3 = SHR3_DEFAULT;
        }
    }

    #[inline]
    fn step(&mut self) {
        self.shr3 = step(self.shr3);
    }
}

impl Default for Shr3 {
    fn default() -> Self {
        Shr3::new(0)
    }
}

impl SimpleRng for Shr3 {
    const NUM_SEEDS: usize = 1;
    const MIN: u32 = 1;

    fn seed_from_slice(seeds: &[u32]) -> Self {
        Shr3::new(seed_at(seeds, 0))
    }

    #[inline]
    fn next(&mut self) -> u32 {
        self.step();
        self.shr3
    }

    #[inline]
    fn current(&self) -> u32 {
        self.shr3
    }

    fn discard(&mut self, n: u128) {
        self.shr3 = SHR3_MATRIX.apply_pow(self.shr3, n);
    }

    fn mix_one(&mut self, value: u32) {
        self.shr3 ^= value;
        self.sanitize();
        self.step();
    }
}

impl_rand_core!(Shr3, 1);
