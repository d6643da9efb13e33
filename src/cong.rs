use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use super::rng::{impl_rand_core, SimpleRng};
use super::seed::seed_at;

pub const CONG_MULTIPLIER: u32 = 69069;
pub const CONG_INCREMENT: u32 = 12345;

/// Linear congruential generator x <- 69069 * x + 12345 (mod 2**32).
/// Full period 2**32; every state is valid.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Cong {
    cong: u32,
}

impl Cong {
    pub fn new(seed: u32) -> Self {
        Cong { cong: seed }
    }

    /// Returns the number of steps it takes to get from this state to the other.
    pub fn distance(&self, other: &Cong) -> u32 {
        crate::lcg::get_iterations(CONG_MULTIPLIER, CONG_INCREMENT, self.cong, other.cong)
    }

    #[wrappit] #[inline]
    fn step(&mut self) {
        self.cong = CONG_MULTIPLIER * self.cong + CONG_INCREMENT;
    }
}

impl SimpleRng for Cong {
    const NUM_SEEDS: usize = 1;

    fn seed_from_slice(seeds: &[u32]) -> Self {
        Cong::new(seed_at(seeds, 0))
    }

    #[inline]
    fn next(&mut self) -> u32 {
        self.step();
        self.cong
    }

    #[inline]
    fn current(&self) -> u32 {
        self.cong
    }

    fn discard(&mut self, n: u128) {
        self.cong = crate::lcg::get_state(CONG_MULTIPLIER, CONG_INCREMENT, self.cong, n);
    }

    fn mix_one(&mut self, value: u32) {
        self.cong ^= value;
        self.step();
    }
}

impl_rand_core!(Cong, 1);
