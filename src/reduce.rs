//! Modular arithmetic modulo `Q = 8380417`.
//!
//! Grounded on `original_source/mldsa/reduce.h` (MONT/QINV constants and the
//! four-function contract) and the Montgomery-reduction pattern already
//! sketched in `pqcrypto_native::algorithms::mldsa_ntt::montgomery_reduce`.
//! These are total functions: every input in the documented range produces
//! an in-range output, never an error.

use crate::params::{Q, QINV};

/// Largest magnitude a `reduce32` output can take:
/// `(Q-1)/2 + 2^22 * Q / 2^32`, rounded up. Callers that chain `reduce32`
/// into a precondition expecting a tighter bound should additionally apply
/// [`caddq`].
pub const REDUCE_RANGE_MAX: i32 = 6_283_008;

/// Montgomery reduction: given `a` with `|a| <= 2^31 * Q`, returns
/// `r == a * 2^{-32} (mod Q)` with `|r| < Q`.
#[inline(always)]
pub fn montgomery_reduce(a: i64) -> i32 {
    let t = (a as i32).wrapping_mul(QINV as i32) as i64;
    let r = (a - t * Q as i64) >> 32;
    r as i32
}

/// Barrett-style reduction: given 32-bit `a`, returns `r == a (mod Q)` with
/// `|r| <= REDUCE_RANGE_MAX`.
#[inline(always)]
pub fn reduce32(a: i32) -> i32 {
    let mut t = (a + (1 << 22)) >> 23;
    t = a - t * Q;
    t
}

/// Conditionally add `Q` if the argument is negative, producing a canonical
/// non-negative residue when combined with a prior reduction.
#[inline(always)]
pub fn caddq(a: i32) -> i32 {
    a + ((a >> 31) & Q)
}

/// `freeze(a) = caddq(reduce32(a))`: the canonical representative in
/// `[0, Q)`.
#[inline(always)]
pub fn freeze(a: i32) -> i32 {
    caddq(reduce32(a))
}
