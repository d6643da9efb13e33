#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use super::lcg::{mul_mod, pow_mod};
use super::rng::{impl_rand_core, SimpleRng};
use super::seed::seed_at;

pub const MWC64_MULTIPLIER: u32 = 698769069;
/// 698769069 * 2**32 - 1.
pub const MWC64_MODULUS: u64 = ((MWC64_MULTIPLIER as u64) << 32) - 1;

/// 32-bit multiply-with-carry generator with a 64-bit accumulator.
/// The register carry * 2**32 + value steps as multiplication by 698769069
/// modulo 698769069 * 2**32 - 1.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Mwc64 {
    /// High half of the register.
    carry: u32,
    /// Low half of the register, which is also the output.
    value: u32,
}

impl Mwc64 {
    pub fn new(seed_upper: u32, seed_lower: u32) -> Self {
        let mut mwc = Mwc64 { carry: seed_upper, value: seed_lower };
        mwc.sanitize();
        mwc
    }

    #[inline]
    fn register(&self) -> u64 {
        ((self.carry as u64) << 32) | self.value as u64
    }

    #[inline]
    fn set_register(&mut self, register: u64) {
        self.carry = (register >> 32) as u32;
        self.value = register as u32;
    }

    /// Reduces the register below the modulus, avoiding the zero fixed point.
    fn sanitize(&mut self) {
        let register = self.register();
        let reduced = match register % MWC64_MODULUS {
            0 => !register % MWC64_MODULUS,
            residue => residue,
        };
        self.set_register(reduced);
    }

    #[inline]
    fn step(&mut self) {
        // Cannot overflow: (2**32 - 1) * 698769069 + 2**32 - 1 < 2**64.
        let t = MWC64_MULTIPLIER as u64 * self.value as u64 + self.carry as u64;
        self.set_register(t);
    }

    pub(crate) fn mix_upper(&mut self, value: u32) {
        self.carry ^= value;
        self.sanitize();
        self.step();
    }

    pub(crate) fn mix_lower(&mut self, value: u32) {
        self.value ^= value;
        self.sanitize();
        self.step();
    }
}

impl Default for Mwc64 {
    fn default() -> Self {
        Mwc64::new(0, 0)
    }
}

impl SimpleRng for Mwc64 {
    const NUM_SEEDS: usize = 2;

    fn seed_from_slice(seeds: &[u32]) -> Self {
        Mwc64::new(seed_at(seeds, 0), seed_at(seeds, 1))
    }

    #[inline]
    fn next(&mut self) -> u32 {
        self.step();
        self.value
    }

    #[inline]
    fn current(&self) -> u32 {
        self.value
    }

    fn discard(&mut self, n: u128) {
        let factor = pow_mod(MWC64_MULTIPLIER as u64, n, MWC64_MODULUS);
        self.set_register(mul_mod(self.register(), factor, MWC64_MODULUS));
    }

    fn mix_one(&mut self, value: u32) {
        if (self.current() >> 24) & 1 == 0 {
            self.mix_upper(value);
        } else {
            self.mix_lower(value);
        }
    }
}

impl_rand_core!(Mwc64, 2);

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn run_tests() {
        let origin = Mwc64::new(0x12345678, 0x9abcdef0);
        let mut r = origin.clone();
        for n in 0 .. 2000 {
            let mut jumped = origin.clone();
            jumped.discard(n);
            assert_eq!(r, jumped);
            r.next();
        }
    }

    #[test] pub fn sanitize() {
        let zero = Mwc64::new(0, 0);
        assert_eq!(!0u64 % MWC64_MODULUS, zero.register());

        // The modulus itself is equivalent to zero.
        let m = Mwc64::new((MWC64_MODULUS >> 32) as u32, MWC64_MODULUS as u32);
        assert_ne!(0, m.register());
        assert!(m.register() < MWC64_MODULUS);

        // Registers above the modulus are reduced.
        let high = Mwc64::new(u32::MAX, 5);
        assert_eq!((((u32::MAX as u64) << 32) | 5) % MWC64_MODULUS, high.register());

        // Reduced registers are left alone.
        assert_eq!((1u64 << 32) | 2, Mwc64::new(1, 2).register());
    }

    #[test] pub fn mix_steps_whole_register() {
        let mut r = Mwc64::new(3, 4);
        let selector = (r.current() >> 24) & 1;
        assert_eq!(0, selector);
        r.mix_one(0xf0);
        let mut expected = Mwc64::new(3 ^ 0xf0, 4);
        expected.next();
        assert_eq!(expected, r);
    }
}
