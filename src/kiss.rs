#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use super::rng::{impl_rand_core, SimpleRng};
use super::seed::seed_at;
use super::{Cong, Mwc2, Mwc64, Shr3};

// KISS generators combine independent component generators.
// Components never interact: discard() jumps each one separately,
// and mix() feeds each value into exactly one component.

/// Marsaglia's KISS (1999) with MWC2 in place of MWC1.
/// Output is ((mwc2 ^ cong) + shr3).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Kiss {
    mwc: Mwc2,
    cong: Cong,
    shr3: Shr3,
}

impl Kiss {
    pub fn new(seed_mwc_upper: u32, seed_mwc_lower: u32, seed_cong: u32, seed_shr3: u32) -> Self {
        Kiss {
            mwc: Mwc2::new(seed_mwc_upper, seed_mwc_lower),
            cong: Cong::new(seed_cong),
            shr3: Shr3::new(seed_shr3),
        }
    }
}

impl Default for Kiss {
    fn default() -> Self {
        Kiss::new(0, 0, 0, 0)
    }
}

impl SimpleRng for Kiss {
    const NUM_SEEDS: usize = 4;

    fn seed_from_slice(seeds: &[u32]) -> Self {
        Kiss::new(seed_at(seeds, 0), seed_at(seeds, 1), seed_at(seeds, 2), seed_at(seeds, 3))
    }

    #[inline]
    fn next(&mut self) -> u32 {
        self.mwc.next();
        self.cong.next();
        self.shr3.next();
        self.current()
    }

    #[inline]
    fn current(&self) -> u32 {
        (self.mwc.current() ^ self.cong.current()).wrapping_add(self.shr3.current())
    }

    fn discard(&mut self, n: u128) {
        self.mwc.discard(n);
        self.cong.discard(n);
        self.shr3.discard(n);
    }

    fn mix_one(&mut self, value: u32) {
        match (self.current() >> 24) & 3 {
            0 => self.mwc.mix_upper(value),
            1 => self.mwc.mix_lower(value),
            2 => self.cong.mix_one(value),
            _ => self.shr3.mix_one(value),
        }
    }
}

impl_rand_core!(Kiss, 4);

/// KISS built on MWC64. Output is (mwc64 + cong + shr3).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Kiss2 {
    mwc: Mwc64,
    cong: Cong,
    shr3: Shr3,
}

impl Kiss2 {
    pub fn new(seed_mwc_upper: u32, seed_mwc_lower: u32, seed_cong: u32, seed_shr3: u32) -> Self {
        Kiss2 {
            mwc: Mwc64::new(seed_mwc_upper, seed_mwc_lower),
            cong: Cong::new(seed_cong),
            shr3: Shr3::new(seed_shr3),
        }
    }
}

impl Default for Kiss2 {
    fn default() -> Self {
        Kiss2::new(0, 0, 0, 0)
    }
}

impl SimpleRng for Kiss2 {
    const NUM_SEEDS: usize = 4;

    fn seed_from_slice(seeds: &[u32]) -> Self {
        Kiss2::new(seed_at(seeds, 0), seed_at(seeds, 1), seed_at(seeds, 2), seed_at(seeds, 3))
    }

    #[inline]
    fn next(&mut self) -> u32 {
        self.mwc.next();
        self.cong.next();
        self.shr3.next();
        self.current()
    }

    #[inline]
    fn current(&self) -> u32 {
        self.mwc.current().wrapping_add(self.cong.current()).wrapping_add(self.shr3.current())
    }

    fn discard(&mut self, n: u128) {
        self.mwc.discard(n);
        self.cong.discard(n);
        self.shr3.discard(n);
    }

    fn mix_one(&mut self, value: u32) {
        match (self.current() >> 24) & 3 {
            0 => self.mwc.mix_upper(value),
            1 => self.mwc.mix_lower(value),
            2 => self.cong.mix_one(value),
            _ => self.shr3.mix_one(value),
        }
    }
}

impl_rand_core!(Kiss2, 4);

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn run_tests() {
        let origin = Kiss::new(2247183469, 99545079, 3269400377, 3950144837);
        let mut r = origin.clone();
        for n in 0 .. 2000 {
            let mut jumped = origin.clone();
            jumped.discard(n);
            assert_eq!(r, jumped);
            r.next();
        }

        let origin = Kiss2::new(1, 2, 3, 4);
        let mut r = origin.clone();
        for n in 0 .. 2000 {
            let mut jumped = origin.clone();
            jumped.discard(n);
            assert_eq!(r, jumped);
            r.next();
        }
    }

    #[test] pub fn combines_components() {
        let mut kiss = Kiss::new(10, 20, 30, 40);
        let mut mwc = Mwc2::new(10, 20);
        let mut cong = Cong::new(30);
        let mut shr3 = Shr3::new(40);
        for _ in 0 .. 100 {
            let expected = (mwc.next() ^ cong.next()).wrapping_add(shr3.next());
            assert_eq!(expected, kiss.next());
        }

        let mut kiss2 = Kiss2::new(10, 20, 30, 40);
        let mut mwc = Mwc64::new(10, 20);
        let mut cong = Cong::new(30);
        let mut shr3 = Shr3::new(40);
        for _ in 0 .. 100 {
            let expected = mwc.next().wrapping_add(cong.next()).wrapping_add(shr3.next());
            assert_eq!(expected, kiss2.next());
        }
    }

    #[test] pub fn mix_touches_one_component() {
        let mut kiss = Kiss::new(5, 6, 7, 8);
        for i in 0 .. 1000 {
            let before = kiss.clone();
            kiss.mix_one(i);
            let changed = (before.mwc != kiss.mwc) as u32
                + (before.cong != kiss.cong) as u32
                + (before.shr3 != kiss.shr3) as u32;
            assert_eq!(1, changed);
        }
    }
}
