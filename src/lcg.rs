use wrapping_arithmetic::wrappit;

// This module contains utility functions for working with
// congruential generators: affine maps modulo 2**32 and
// multiplicative maps modulo an arbitrary 64-bit modulus.

/// LCG iteration is state <- state * m + p (mod 2**32).
/// Returns the (m, p) pair that iterates by n steps at once.
#[wrappit]
pub fn get_jump(m: u32, p: u32, n: u128) -> (u32, u32) {
    let mut unit_m = m;
    let mut unit_p = p;
    let mut jump_m: u32 = 1;
    let mut jump_p: u32 = 0;
    let mut delta = n;

    while delta > 0 {
        if delta & 1 == 1 {
            jump_m = jump_m * unit_m;
            jump_p = jump_p * unit_m + unit_p;
        }
        unit_p = (unit_m + 1) * unit_p;
        unit_m *= unit_m;
        delta >>= 1;
    }
    (jump_m, jump_p)
}

/// Composes two LCG steps: first applies (m1, p1), then (m2, p2).
#[wrappit]
pub fn compose(first: (u32, u32), then: (u32, u32)) -> (u32, u32) {
    (then.0 * first.0, then.0 * first.1 + then.1)
}

/// LCG iteration is state <- state * m + p (mod 2**32).
/// Returns the number of iterations between origin state and the given state.
/// Assumes (m, p) is full period.
#[wrappit]
pub fn get_iterations(m: u32, p: u32, origin: u32, state: u32) -> u32 {
    let mut jump_m = m;
    let mut jump_p = p;
    let mut ordinal: u32 = 0;
    let mut bit: u32 = 1;
    let mut address = origin;

    while address != state {
        if (bit & address) != (bit & state) {
            address = address * jump_m + jump_p;
            ordinal = ordinal + bit;
        }
        jump_p = (jump_m + 1) * jump_p;
        jump_m *= jump_m;
        bit <<= 1;
    }
    ordinal
}

/// LCG iteration is state <- state * m + p (mod 2**32).
/// Returns state after the specified number of iterations from the origin state.
#[wrappit]
pub fn get_state(m: u32, p: u32, origin: u32, iterations: u128) -> u32 {
    let mut jump_m = m;
    let mut jump_p = p;
    let mut state = origin;
    let mut ordinal = iterations;

    while ordinal > 0 {
        if ordinal & 1 == 1 {
            state = state * jump_m + jump_p;
        }
        jump_p = (jump_m + 1) * jump_p;
        jump_m *= jump_m;
        ordinal >>= 1;
    }
    state
}

/// Returns x * y mod m. Operands need not be reduced.
#[inline]
pub fn mul_mod(x: u64, y: u64, m: u64) -> u64 {
    ((x as u128 * y as u128) % m as u128) as u64
}

/// Returns a**n mod m by repeated squaring.
pub fn pow_mod(a: u64, n: u128, m: u64) -> u64 {
    let mut unit = a % m;
    let mut result = 1 % m;
    let mut delta = n;

    while delta > 0 {
        if delta & 1 == 1 {
            result = mul_mod(result, unit, m);
        }
        unit = mul_mod(unit, unit, m);
        delta >>= 1;
    }
    result
}

#[cfg(test)] mod tests {
    use super::*;

    const M: u32 = 69069;
    const P: u32 = 12345;

    #[test] pub fn run_tests() {

        let mut r: u32 = 0;
        let mut rnd = || -> u32 { r = r.wrapping_mul(1664525).wrapping_add(1013904223); r };

        for _ in 0 .. 1<<12 {

            let origin = rnd();

            assert_eq!(origin.wrapping_mul(M).wrapping_add(P), get_state(M, P, origin, 1));
            assert_eq!(1, get_iterations(M, P, origin, origin.wrapping_mul(M).wrapping_add(P)));
            assert_eq!(origin, get_state(M, P, origin, 0));

            // Consistency between the three views of the same jump.
            let state = rnd();
            let n = get_iterations(M, P, origin, state);
            assert_eq!(state, get_state(M, P, origin, n as u128));

            let (m_total, p_total) = get_jump(M, P, n as u128);
            assert_eq!(origin.wrapping_mul(m_total).wrapping_add(p_total), state);

            // Full period: n and n + 2**32 land on the same state.
            assert_eq!(state, get_state(M, P, origin, n as u128 + (1 << 32)));

            let h = n & rnd();
            let state_h = get_state(M, P, origin, h as u128);
            assert_eq!(n - h, get_iterations(M, P, state_h, state));

            let jump_h = get_jump(M, P, h as u128);
            let jump_rest = get_jump(M, P, (n - h) as u128);
            assert_eq!((m_total, p_total), compose(jump_h, jump_rest));
        }
    }

    #[test] pub fn identity_jump() {
        assert_eq!((1, 0), get_jump(M, P, 0));
        assert_eq!((M, P), compose((1, 0), (M, P)));
        assert_eq!((M, P), compose((M, P), (1, 0)));
    }

    #[test] pub fn pow_mod_matches_iteration() {
        const A: u64 = 36969;
        const MODULUS: u64 = 0x9068ffff;
        let mut x: u64 = 1;
        for n in 0 .. 2000u128 {
            assert_eq!(x, pow_mod(A, n, MODULUS));
            x = x * A % MODULUS;
        }

        // Large modulus needs the 128-bit intermediate.
        const A64: u64 = 698769069;
        const M64: u64 = (A64 << 32) - 1;
        assert_eq!(1, pow_mod(A64, 0, M64));
        assert_eq!(A64, pow_mod(A64, 1, M64));
        assert_eq!(mul_mod(A64, A64, M64), pow_mod(A64, 2, M64));
        // a * 2**32 = 1 (mod m), so a**-1 = 2**32.
        assert_eq!(1, mul_mod(A64, 1 << 32, M64));
    }
}
