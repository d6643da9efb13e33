#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use super::gf2::BitMatrix32;
use super::rng::{impl_rand_core, SimpleRng};
use super::seed::seed_at;

// Combined Tausworthe generators by P. L'Ecuyer:
// "Maximally Equidistributed Combined Tausworthe Generators" (1996) for LFSR88 and
// "Tables of Maximally-Equidistributed Combined LFSR Generators" (1999) for LFSR113.

/// One Tausworthe component:
/// b = ((z << a) ^ z) >> b; z = ((z & mask) << c) ^ b.
#[derive(Clone, Copy)]
struct Taus {
    a: u32,
    b: u32,
    c: u32,
    mask: u32,
    /// Components below this value have all their active bits clear and stay stuck.
    min: u32,
}

impl Taus {
    #[inline]
    const fn step(&self, z: u32) -> u32 {
        let b = ((z << self.a) ^ z) >> self.b;
        ((z & self.mask) << self.c) ^ b
    }

    /// Invalid components are replaced by their bitwise inverse, which is always valid.
    #[inline]
    const fn sanitize(&self, z: u32) -> u32 {
        if z < self.min { !z } else { z }
    }

    const fn matrix(&self) -> BitMatrix32 {
        let mut columns = [0u32; 32];
        let mut i = 0;
        while i < 32 {
            columns[i] = self.step(1 << i);
            i += 1;
        }
        BitMatrix32::from_columns(columns)
    }
}

const LFSR113_COMPONENTS: [Taus; 4] = [
    Taus { a: 6, b: 13, c: 18, mask: 0xfffffffe, min: 2 },
    Taus { a: 2, b: 27, c: 2, mask: 0xfffffff8, min: 8 },
    Taus { a: 13, b: 21, c: 7, mask: 0xfffffff0, min: 16 },
    Taus { a: 3, b: 12, c: 13, mask: 0xffffff80, min: 128 },
];

const LFSR113_MATRICES: [BitMatrix32; 4] = [
    LFSR113_COMPONENTS[0].matrix(),
    LFSR113_COMPONENTS[1].matrix(),
    LFSR113_COMPONENTS[2].matrix(),
    LFSR113_COMPONENTS[3].matrix(),
];

const LFSR88_COMPONENTS: [Taus; 3] = [
    Taus { a: 13, b: 19, c: 12, mask: 0xfffffffe, min: 2 },
    Taus { a: 2, b: 25, c: 4, mask: 0xfffffff8, min: 8 },
    Taus { a: 3, b: 11, c: 17, mask: 0xfffffff0, min: 16 },
];

const LFSR88_MATRICES: [BitMatrix32; 3] = [
    LFSR88_COMPONENTS[0].matrix(),
    LFSR88_COMPONENTS[1].matrix(),
    LFSR88_COMPONENTS[2].matrix(),
];

fn seed_components<const N: usize>(components: &[Taus; N], seeds: &[u32]) -> [u32; N] {
    core::array::from_fn(|i| components[i].sanitize(seed_at(seeds, i)))
}

#[inline]
fn step_all<const N: usize>(components: &[Taus; N], z: &mut [u32; N]) {
    for (z, taus) in z.iter_mut().zip(components.iter()) {
        *z = taus.step(*z);
    }
}

#[inline]
fn combine<const N: usize>(z: &[u32; N]) -> u32 {
    z.iter().fold(0, |acc, z| acc ^ z)
}

fn discard_all<const N: usize>(matrices: &[BitMatrix32; N], z: &mut [u32; N], n: u128) {
    for (z, matrix) in z.iter_mut().zip(matrices.iter()) {
        *z = matrix.apply_pow(*z, n);
    }
}

/// Mixes into the component selected by the top bits of the current output,
/// scaled to the number of components.
fn mix_into<const N: usize>(components: &[Taus; N], z: &mut [u32; N], value: u32) {
    let current = combine(z);
    let i = ((current as u64 * N as u64) >> 32) as usize;
    let taus = &components[i];
    z[i] = taus.step(taus.sanitize(z[i] ^ value));
}

/// LFSR113: four Tausworthe components, period about 2**113.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Lfsr113 {
    z: [u32; 4],
}

impl Lfsr113 {
    pub fn new(seed1: u32, seed2: u32, seed3: u32, seed4: u32) -> Self {
        Lfsr113 { z: seed_components(&LFSR113_COMPONENTS, &[seed1, seed2, seed3, seed4]) }
    }
}

impl Default for Lfsr113 {
    fn default() -> Self {
        Lfsr113::new(0, 0, 0, 0)
    }
}

impl SimpleRng for Lfsr113 {
    const NUM_SEEDS: usize = 4;

    fn seed_from_slice(seeds: &[u32]) -> Self {
        Lfsr113 { z: seed_components(&LFSR113_COMPONENTS, seeds) }
    }

    #[inline]
    fn next(&mut self) -> u32 {
        step_all(&LFSR113_COMPONENTS, &mut self.z);
        combine(&self.z)
    }

    #[inline]
    fn current(&self) -> u32 {
        combine(&self.z)
    }

    fn discard(&mut self, n: u128) {
        discard_all(&LFSR113_MATRICES, &mut self.z, n);
    }

    fn mix_one(&mut self, value: u32) {
        mix_into(&LFSR113_COMPONENTS, &mut self.z, value);
    }
}

impl_rand_core!(Lfsr113, 4);

/// LFSR88: three Tausworthe components, period about 2**88.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Lfsr88 {
    z: [u32; 3],
}

impl Lfsr88 {
    pub fn new(seed1: u32, seed2: u32, seed3: u32) -> Self {
        Lfsr88 { z: seed_components(&LFSR88_COMPONENTS, &[seed1, seed2, seed3]) }
    }
}

impl Default for Lfsr88 {
    fn default() -> Self {
        Lfsr88::new(0, 0, 0)
    }
}

impl SimpleRng for Lfsr88 {
    const NUM_SEEDS: usize = 3;

    fn seed_from_slice(seeds: &[u32]) -> Self {
        Lfsr88 { z: seed_components(&LFSR88_COMPONENTS, seeds) }
    }

    #[inline]
    fn next(&mut self) -> u32 {
        step_all(&LFSR88_COMPONENTS, &mut self.z);
        combine(&self.z)
    }

    #[inline]
    fn current(&self) -> u32 {
        combine(&self.z)
    }

    fn discard(&mut self, n: u128) {
        discard_all(&LFSR88_MATRICES, &mut self.z, n);
    }

    fn mix_one(&mut self, value: u32) {
        mix_into(&LFSR88_COMPONENTS, &mut self.z, value);
    }
}

impl_rand_core!(Lfsr88, 3);
