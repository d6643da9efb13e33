// Linear maps over GF(2) on 32-bit words. Shift-and-xor generators
// (SHR3 and the Tausworthe components) are linear in this sense,
// so jumping ahead reduces to raising their transition matrix to a power.

/// 32x32 bit matrix over GF(2).
/// Column i holds the image of the basis vector 1 << i.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct BitMatrix32 {
    columns: [u32; 32],
}

impl BitMatrix32 {
    pub const IDENTITY: BitMatrix32 = {
        let mut columns = [0u32; 32];
        let mut i = 0;
        while i < 32 {
            columns[i] = 1 << i;
            i += 1;
        }
        BitMatrix32 { columns }
    };

    #[inline]
    pub const fn from_columns(columns: [u32; 32]) -> Self {
        BitMatrix32 { columns }
    }

    /// Builds the matrix of a linear map by observing its effect on each basis vector.
    /// The map must actually be linear over GF(2) for the result to mean anything.
    pub fn from_linear_map(f: impl Fn(u32) -> u32) -> Self {
        BitMatrix32 { columns: core::array::from_fn(|i| f(1 << i)) }
    }

    /// Multiplies the matrix with a bit vector: XOR of the columns selected by set bits of x.
    #[inline]
    pub const fn apply(&self, x: u32) -> u32 {
        let mut result = 0;
        let mut bits = x;
        let mut i = 0;
        while bits != 0 {
            if bits & 1 == 1 {
                result ^= self.columns[i];
            }
            bits >>= 1;
            i += 1;
        }
        result
    }

    /// Matrix product: the map that applies `first` and then `self`.
    pub fn after(&self, first: &BitMatrix32) -> BitMatrix32 {
        BitMatrix32 { columns: core::array::from_fn(|i| self.apply(first.columns[i])) }
    }

    /// Returns self**n.
    pub fn pow(&self, n: u128) -> BitMatrix32 {
        let mut unit = *self;
        let mut result = BitMatrix32::IDENTITY;
        let mut delta = n;

        while delta > 0 {
            if delta & 1 == 1 {
                result = unit.after(&result);
            }
            unit = unit.after(&unit);
            delta >>= 1;
        }
        result
    }

    /// Returns self**n applied to x, without materializing self**n.
    /// Powers of one matrix commute, so each set bit of n can be applied to x directly.
    pub fn apply_pow(&self, x: u32, n: u128) -> u32 {
        let mut unit = *self;
        let mut state = x;
        let mut delta = n;

        while delta > 0 {
            if delta & 1 == 1 {
                state = unit.apply(state);
            }
            delta >>= 1;
            if delta > 0 {
                unit = unit.after(&unit);
            }
        }
        state
    }
}

impl Default for BitMatrix32 {
    fn default() -> Self {
        BitMatrix32::IDENTITY
    }
}
