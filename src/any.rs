#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use super::*;

/// The generator families in this crate.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Family {
    Cong,
    Shr3,
    Mwc1,
    Mwc2,
    Mwc64,
    Kiss,
    Kiss2,
    Lfsr113,
    Lfsr88,
}

impl Family {
    pub const ALL: [Family; 9] = [
        Family::Cong,
        Family::Shr3,
        Family::Mwc1,
        Family::Mwc2,
        Family::Mwc64,
        Family::Kiss,
        Family::Kiss2,
        Family::Lfsr113,
        Family::Lfsr88,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::Cong => "Cong",
            Family::Shr3 => "SHR3",
            Family::Mwc1 => "MWC1",
            Family::Mwc2 => "MWC2",
            Family::Mwc64 => "MWC64",
            Family::Kiss => "KISS",
            Family::Kiss2 => "KISS2",
            Family::Lfsr113 => "LFSR113",
            Family::Lfsr88 => "LFSR88",
        }
    }

    pub fn num_seeds(self) -> usize {
        match self {
            Family::Cong => Cong::NUM_SEEDS,
            Family::Shr3 => Shr3::NUM_SEEDS,
            Family::Mwc1 => Mwc1::NUM_SEEDS,
            Family::Mwc2 => Mwc2::NUM_SEEDS,
            Family::Mwc64 => Mwc64::NUM_SEEDS,
            Family::Kiss => Kiss::NUM_SEEDS,
            Family::Kiss2 => Kiss2::NUM_SEEDS,
            Family::Lfsr113 => Lfsr113::NUM_SEEDS,
            Family::Lfsr88 => Lfsr88::NUM_SEEDS,
        }
    }
}

impl core::fmt::Display for Family {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A generator of any family, for callers that pick the family at runtime.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub enum AnyRng {
    Cong(Cong),
    Shr3(Shr3),
    Mwc1(Mwc1),
    Mwc2(Mwc2),
    Mwc64(Mwc64),
    Kiss(Kiss),
    Kiss2(Kiss2),
    Lfsr113(Lfsr113),
    Lfsr88(Lfsr88),
}

macro_rules! dispatch {
    ($self:expr, $rng:ident => $body:expr) => {
        match $self {
            AnyRng::Cong($rng) => $body,
            AnyRng::Shr3($rng) => $body,
            AnyRng::Mwc1($rng) => $body,
            AnyRng::Mwc2($rng) => $body,
            AnyRng::Mwc64($rng) => $body,
            AnyRng::Kiss($rng) => $body,
            AnyRng::Kiss2($rng) => $body,
            AnyRng::Lfsr113($rng) => $body,
            AnyRng::Lfsr88($rng) => $body,
        }
    };
}

macro_rules! construct {
    ($family:expr, $make:ident ( $($arg:expr),* )) => {
        match $family {
            Family::Cong => AnyRng::Cong(Cong::$make($($arg),*)),
            Family::Shr3 => AnyRng::Shr3(Shr3::$make($($arg),*)),
            Family::Mwc1 => AnyRng::Mwc1(Mwc1::$make($($arg),*)),
            Family::Mwc2 => AnyRng::Mwc2(Mwc2::$make($($arg),*)),
            Family::Mwc64 => AnyRng::Mwc64(Mwc64::$make($($arg),*)),
            Family::Kiss => AnyRng::Kiss(Kiss::$make($($arg),*)),
            Family::Kiss2 => AnyRng::Kiss2(Kiss2::$make($($arg),*)),
            Family::Lfsr113 => AnyRng::Lfsr113(Lfsr113::$make($($arg),*)),
            Family::Lfsr88 => AnyRng::Lfsr88(Lfsr88::$make($($arg),*)),
        }
    };
}

impl AnyRng {
    /// Creates a generator of the family with all seeds zero (sanitized where needed).
    pub fn new(family: Family) -> Self {
        construct!(family, default())
    }

    /// See `SimpleRng::from_seeds`.
    pub fn from_seeds(family: Family, seeds: &[u32], mix_extras: bool) -> Self {
        construct!(family, from_seeds(seeds, mix_extras))
    }

    /// See `SimpleRng::from_seeder`.
    pub fn from_seeder(family: Family, seeder: &mut Seeder) -> Self {
        construct!(family, from_seeder(seeder))
    }

    pub fn family(&self) -> Family {
        match self {
            AnyRng::Cong(_) => Family::Cong,
            AnyRng::Shr3(_) => Family::Shr3,
            AnyRng::Mwc1(_) => Family::Mwc1,
            AnyRng::Mwc2(_) => Family::Mwc2,
            AnyRng::Mwc64(_) => Family::Mwc64,
            AnyRng::Kiss(_) => Family::Kiss,
            AnyRng::Kiss2(_) => Family::Kiss2,
            AnyRng::Lfsr113(_) => Family::Lfsr113,
            AnyRng::Lfsr88(_) => Family::Lfsr88,
        }
    }

    pub fn num_seeds(&self) -> usize {
        self.family().num_seeds()
    }

    /// Smallest possible output. Only SHR3 never returns 0.
    pub fn min(&self) -> u32 {
        match self {
            AnyRng::Shr3(_) => Shr3::MIN,
            _ => 0,
        }
    }

    pub fn max(&self) -> u32 {
        u32::MAX
    }

    #[inline]
    pub fn next(&mut self) -> u32 {
        dispatch!(self, rng => rng.next())
    }

    #[inline]
    pub fn current(&self) -> u32 {
        dispatch!(self, rng => rng.current())
    }

    pub fn discard(&mut self, n: u128) {
        dispatch!(self, rng => rng.discard(n))
    }

    pub fn mix_one(&mut self, value: u32) {
        dispatch!(self, rng => rng.mix_one(value))
    }

    pub fn mix(&mut self, values: &[u32]) -> u32 {
        dispatch!(self, rng => rng.mix(values))
    }
}

impl RngCore for AnyRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl core::fmt::Debug for AnyRng {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "AnyRng({})", self.family())
    }
}
