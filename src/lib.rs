#![no_std]

pub mod any;
pub mod cong;
pub mod gf2;
pub mod kiss;
pub mod lcg;
pub mod lfsr;
pub mod mwc;
pub mod mwc64;
pub mod rng;
pub mod seed;
pub mod shr3;

pub use any::{AnyRng, Family};
pub use cong::Cong;
pub use kiss::{Kiss, Kiss2};
pub use lfsr::{Lfsr113, Lfsr88};
pub use mwc::{Mwc1, Mwc2};
pub use mwc64::Mwc64;
pub use rng::SimpleRng;
pub use seed::Seeder;
pub use shr3::Shr3;
pub use rand_core::*;

// Generators from George Marsaglia's posts to sci.stat.math (1999, 2003) and
// Pierre L'Ecuyer's combined Tausworthe generators.
// None of them are suitable for cryptography.
