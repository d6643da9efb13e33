use super::seed::{extra_seeds, Seeder};

/// Uniform interface of the generators in this crate.
pub trait SimpleRng: Clone {
    /// Number of 32-bit seed words that make up the state.
    const NUM_SEEDS: usize;
    /// Smallest possible output.
    const MIN: u32 = 0;
    /// Largest possible output.
    const MAX: u32 = u32::MAX;

    /// Creates a generator from the leading `NUM_SEEDS` values of `seeds`.
    /// Missing values read as 0. Degenerate values are replaced with valid ones.
    fn seed_from_slice(seeds: &[u32]) -> Self;

    /// Advances the state by one step and returns the new output.
    fn next(&mut self) -> u32;

    /// Returns the output for the current state without advancing.
    fn current(&self) -> u32;

    /// Advances the state by n steps in O(log n) time.
    fn discard(&mut self, n: u128);

    /// Folds one external value into the state and advances it.
    fn mix_one(&mut self, value: u32);

    /// Creates a generator from an arbitrary number of seed values.
    /// With `mix_extras`, values beyond `NUM_SEEDS` are mixed in, in order;
    /// otherwise they are ignored.
    fn from_seeds(seeds: &[u32], mix_extras: bool) -> Self {
        let mut rng = Self::seed_from_slice(seeds);
        if mix_extras {
            rng.mix(extra_seeds(seeds, Self::NUM_SEEDS));
        }
        rng
    }

    /// Creates a generator seeded with `NUM_SEEDS` consecutive outputs of the seeder.
    fn from_seeder(seeder: &mut Seeder) -> Self {
        let mut seeds = [0u32; 4];
        for seed in seeds.iter_mut().take(Self::NUM_SEEDS) {
            *seed = seeder.next();
        }
        Self::seed_from_slice(&seeds[.. Self::NUM_SEEDS])
    }

    /// Mixes the values into the state one at a time and returns the resulting output.
    /// The order of values matters.
    fn mix(&mut self, values: &[u32]) -> u32 {
        for &value in values {
            self.mix_one(value);
        }
        self.current()
    }
}

/// Implements `RngCore` and `SeedableRng` in terms of `SimpleRng`.
/// Seeds are `NUM_SEEDS` little-endian 32-bit words.
macro_rules! impl_rand_core {
    ($rng:ty, $num_seeds:literal) => {
        impl $crate::RngCore for $rng {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                $crate::SimpleRng::next(self)
            }

            fn next_u64(&mut self) -> u64 {
                $crate::impls::next_u64_via_u32(self)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                $crate::impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), $crate::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        impl $crate::SeedableRng for $rng {
            type Seed = [u8; $num_seeds * 4];

            fn from_seed(seed: Self::Seed) -> Self {
                let words = $crate::seed::words_from_le_bytes::<$num_seeds>(&seed);
                <$rng as $crate::SimpleRng>::seed_from_slice(&words)
            }
        }

        // As recommended, this Debug implementation does not expose internal state.
        impl core::fmt::Debug for $rng {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{} {{}}", stringify!($rng))
            }
        }
    };
}

pub(crate) use impl_rand_core;
