#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use super::lcg::pow_mod;
use super::rng::{impl_rand_core, SimpleRng};
use super::seed::seed_at;

// Two 16-bit multiply-with-carry generators from Marsaglia (1999).
// Each 32-bit half holds a 16-bit value in the low bits and the carry
// in the high bits. Stepping x <- a * (x & 0xffff) + (x >> 16) is the same as
// x <- a * x (mod a * 2**16 - 1), which is what discard() exponentiates.

pub const MWC_UPPER_MULTIPLIER: u32 = 36969;
pub const MWC_LOWER_MULTIPLIER: u32 = 18000;
/// 36969 * 2**16 - 1.
pub const MWC_UPPER_MODULUS: u32 = 0x9068ffff;
/// 18000 * 2**16 - 1.
pub const MWC_LOWER_MODULUS: u32 = 0x464fffff;

#[inline]
fn step(x: u32, multiplier: u32) -> u32 {
    // Cannot overflow: 36969 * 0xffff + 0xffff < 2**32.
    multiplier * (x & 0xffff) + (x >> 16)
}

/// Reduces x into [1, modulus). Multiples of the modulus are fixed points;
/// those are replaced by the inverted bits, which never reduce to 0.
#[inline]
fn sanitize(x: u32, modulus: u32) -> u32 {
    match x % modulus {
        0 => !x % modulus,
        residue => residue,
    }
}

#[inline]
fn skip(x: u32, multiplier: u32, modulus: u32, n: u128) -> u32 {
    let factor = pow_mod(multiplier as u64, n, modulus as u64);
    (x as u64 * factor % modulus as u64) as u32
}

/// State shared by MWC1 and MWC2. They differ only in how the halves are combined.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub(crate) struct MwcPair {
    upper: u32,
    lower: u32,
}

impl MwcPair {
    pub(crate) fn new(seed_upper: u32, seed_lower: u32) -> Self {
        MwcPair {
            upper: sanitize(seed_upper, MWC_UPPER_MODULUS),
            lower: sanitize(seed_lower, MWC_LOWER_MODULUS),
        }
    }

    #[inline]
    pub(crate) fn step(&mut self) {
        self.step_upper();
        self.step_lower();
    }

    #[inline]
    fn step_upper(&mut self) {
        self.upper = step(self.upper, MWC_UPPER_MULTIPLIER);
    }

    #[inline]
    fn step_lower(&mut self) {
        self.lower = step(self.lower, MWC_LOWER_MULTIPLIER);
    }

    pub(crate) fn discard(&mut self, n: u128) {
        self.upper = skip(self.upper, MWC_UPPER_MULTIPLIER, MWC_UPPER_MODULUS, n);
        self.lower = skip(self.lower, MWC_LOWER_MULTIPLIER, MWC_LOWER_MODULUS, n);
    }

    pub(crate) fn mix_upper(&mut self, value: u32) {
        self.upper = sanitize(self.upper ^ value, MWC_UPPER_MODULUS);
        self.step_upper();
    }

    pub(crate) fn mix_lower(&mut self, value: u32) {
        self.lower = sanitize(self.lower ^ value, MWC_LOWER_MODULUS);
        self.step_lower();
    }

    /// Mixes into the half chosen by bit 24 of the current output.
    fn mix(&mut self, value: u32, current: u32) {
        if (current >> 24) & 1 == 0 {
            self.mix_upper(value);
        } else {
            self.mix_lower(value);
        }
    }

    #[inline]
    fn mwc1(&self) -> u32 {
        (self.upper << 16).wrapping_add(self.lower)
    }

    #[inline]
    pub(crate) fn mwc2(&self) -> u32 {
        (self.upper << 16).wrapping_add(self.upper >> 16).wrapping_add(self.lower)
    }
}

/// Marsaglia's MWC: output (upper << 16) + lower.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Mwc1 {
    mwc: MwcPair,
}

impl Mwc1 {
    pub fn new(seed_upper: u32, seed_lower: u32) -> Self {
        Mwc1 { mwc: MwcPair::new(seed_upper, seed_lower) }
    }
}

impl Default for Mwc1 {
    fn default() -> Self {
        Mwc1::new(0, 0)
    }
}

impl SimpleRng for Mwc1 {
    const NUM_SEEDS: usize = 2;

    fn seed_from_slice(seeds: &[u32]) -> Self {
        Mwc1::new(seed_at(seeds, 0), seed_at(seeds, 1))
    }

    #[inline]
    fn next(&mut self) -> u32 {
        self.mwc.step();
        self.mwc.mwc1()
    }

    #[inline]
    fn current(&self) -> u32 {
        self.mwc.mwc1()
    }

    fn discard(&mut self, n: u128) {
        self.mwc.discard(n);
    }

    fn mix_one(&mut self, value: u32) {
        let current = self.current();
        self.mwc.mix(value, current);
    }
}

impl_rand_core!(Mwc1, 2);

/// Like MWC1, but also adds the high half of upper into the output,
/// which fixes the poor randomness of the low output bits.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Mwc2 {
    mwc: MwcPair,
}

impl Mwc2 {
    pub fn new(seed_upper: u32, seed_lower: u32) -> Self {
        Mwc2 { mwc: MwcPair::new(seed_upper, seed_lower) }
    }

    pub(crate) fn mix_upper(&mut self, value: u32) {
        self.mwc.mix_upper(value);
    }

    pub(crate) fn mix_lower(&mut self, value: u32) {
        self.mwc.mix_lower(value);
    }
}

impl Default for Mwc2 {
    fn default() -> Self {
        Mwc2::new(0, 0)
    }
}

impl SimpleRng for Mwc2 {
    const NUM_SEEDS: usize = 2;

    fn seed_from_slice(seeds: &[u32]) -> Self {
        Mwc2::new(seed_at(seeds, 0), seed_at(seeds, 1))
    }

    #[inline]
    fn next(&mut self) -> u32 {
        self.mwc.step();
        self.mwc.mwc2()
    }

    #[inline]
    fn current(&self) -> u32 {
        self.mwc.mwc2()
    }

    fn discard(&mut self, n: u128) {
        self.mwc.discard(n);
    }

    fn mix_one(&mut self, value: u32) {
        let current = self.current();
        self.mwc.mix(value, current);
    }
}

impl_rand_core!(Mwc2, 2);

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn run_tests() {
        assert_eq!(MWC_UPPER_MODULUS, (MWC_UPPER_MULTIPLIER << 16) - 1);
        assert_eq!(MWC_LOWER_MODULUS, (MWC_LOWER_MULTIPLIER << 16) - 1);

        let origin = Mwc1::new(2374144069, 1046675282);
        let mut r = origin.clone();
        for n in 0 .. 2000 {
            let mut jumped = origin.clone();
            jumped.discard(n);
            assert_eq!(r, jumped);
            r.next();
        }
    }

    #[test] pub fn sanitize_avoids_fixed_points() {
        for &(modulus, multiplier) in &[(MWC_UPPER_MODULUS, MWC_UPPER_MULTIPLIER), (MWC_LOWER_MODULUS, MWC_LOWER_MULTIPLIER)] {
            let mut k = 0u64;
            while k * modulus as u64 <= u32::MAX as u64 {
                let x = sanitize((k * modulus as u64) as u32, modulus);
                assert_ne!(0, x);
                assert!(x < modulus);
                // A sanitized state must not collapse under stepping.
                assert_ne!(0, step(x, multiplier));
                k += 1;
            }
        }
        assert_eq!(12345, sanitize(12345, MWC_LOWER_MODULUS));
        assert_eq!(1, sanitize(MWC_LOWER_MODULUS + 1, MWC_LOWER_MODULUS));
    }

    #[test] pub fn state_stays_reduced() {
        // The largest reduced state steps to a reduced state, so skip() stays exact.
        let mut pair = MwcPair::new(MWC_UPPER_MODULUS - 1, MWC_LOWER_MODULUS - 1);
        for _ in 0 .. 10000 {
            pair.step();
            assert!(pair.upper < MWC_UPPER_MODULUS);
            assert!(pair.lower < MWC_LOWER_MODULUS);
        }
    }

    #[test] pub fn mix_touches_one_half() {
        let mut r = Mwc2::new(1, 2);
        let before = r.clone();
        let selector = (r.current() >> 24) & 1;
        r.mix_one(0x5555);
        if selector == 0 {
            assert_eq!(before.mwc.lower, r.mwc.lower);
            assert_ne!(before.mwc.upper, r.mwc.upper);
        } else {
            assert_eq!(before.mwc.upper, r.mwc.upper);
            assert_ne!(before.mwc.lower, r.mwc.lower);
        }
    }

    #[test] pub fn mwc2_adds_upper_carry() {
        let mut a = Mwc1::new(99, 100);
        let mut b = Mwc2::new(99, 100);
        let x = a.next();
        let y = b.next();
        assert_eq!(x.wrapping_add(a.mwc.upper >> 16), y);
    }
}
