//! Hint-vector wire codec.
//!
//! Grounded on `original_source/mldsa/packing.c`'s `pack_sig`/`unpack_sig`
//! hint handling: the hint is stored as `omega` index bytes followed by `k`
//! length bytes (one per polynomial), rather than a dense bitmap, so a
//! signature's size only grows with its actual hint weight. Decoding is
//! strict — indices must be non-decreasing within each polynomial, counts
//! must be non-decreasing across polynomials and bounded by `omega`, and
//! every byte past the final count must be zero — because a signature is
//! only as unforgeable as this encoding is unambiguous: a single index that
//! could decode two different ways would let an attacker mutate a valid
//! signature into a second valid encoding of the same message (breaking
//! strong unforgeability even though the *signed* data never changed).
//!
//! `k` (the number of polynomials, `K` in spec.md's vocabulary) and `omega`
//! are both caller-supplied rather than generic parameters: this module has
//! no per-level type of its own, it just operates on whatever slice of
//! `Poly` the level module passes in.

use crate::error::{Error, Result};
use crate::params::N;
use crate::poly::Poly;

/// Encode the hint vector's nonzero positions into `out`, which must be
/// exactly `omega + polys.len()` bytes. Returns the total hint weight.
///
/// # Panics
/// Panics if `out` is not exactly `omega + polys.len()` bytes, or if the
/// true hint weight of `polys` exceeds `omega` — both are programmer errors
/// (the signer is expected to have already rejected any commitment whose
/// hint weight overflows `omega`, per spec.md sec 4.8's signing loop).
pub fn encode(polys: &[Poly], omega: usize, out: &mut [u8]) -> usize {
    assert_eq!(out.len(), omega + polys.len());
    let mut k = 0usize;
    for (i, poly) in polys.iter().enumerate() {
        for j in 0..N {
            if poly.0[j] != 0 {
                out[k] = j as u8;
                k += 1;
            }
        }
        out[omega + i] = k as u8;
    }
    assert!(k <= omega);
    for b in out[k..omega].iter_mut() {
        *b = 0;
    }
    k
}

/// Decode a hint vector of `num_polys` polynomials from `data`, which must
/// be exactly `omega + num_polys` bytes. Rejects any encoding that is not
/// the unique canonical one: non-ascending indices within a polynomial,
/// non-monotonic or over-`omega` counts across polynomials, or a nonzero
/// byte past the final count.
pub fn decode(data: &[u8], num_polys: usize, omega: usize) -> Result<[Poly; 8]> {
    debug_assert_eq!(data.len(), omega + num_polys);
    // `[Poly; 8]` is an upper bound on K across ML-DSA-44/65/87 (K in
    // {4,6,8}); callers take only the first `num_polys` entries.
    let mut polys = [Poly::zero(); 8];
    let mut prev_k = 0usize;
    for i in 0..num_polys {
        let this_k = data[omega + i] as usize;
        if this_k < prev_k || this_k > omega {
            return Err(Error::MalformedHint);
        }
        let mut prev_j = -1i32;
        for &idx in &data[prev_k..this_k] {
            let j = idx as i32;
            if j <= prev_j {
                return Err(Error::MalformedHint);
            }
            prev_j = j;
            polys[i].0[idx as usize] = 1;
        }
        prev_k = this_k;
    }
    for &b in &data[prev_k..omega] {
        if b != 0 {
            return Err(Error::MalformedHint);
        }
    }
    Ok(polys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_encode_decode() {
        let mut polys = [Poly::zero(); 4];
        polys[0].0[3] = 1;
        polys[0].0[200] = 1;
        polys[2].0[0] = 1;
        let omega = 80;
        let mut buf = vec![0u8; omega + polys.len()];
        let weight = encode(&polys, omega, &mut buf);
        assert_eq!(weight, 3);
        let decoded = decode(&buf, polys.len(), omega).unwrap();
        for i in 0..polys.len() {
            assert_eq!(polys[i], decoded[i]);
        }
    }

    #[test]
    fn rejects_non_ascending_indices() {
        let omega = 8;
        let mut buf = vec![0u8; omega + 2];
        buf[0] = 5;
        buf[1] = 3; // descending within the same polynomial
        buf[omega] = 2;
        buf[omega + 1] = 2;
        assert!(decode(&buf, 2, omega).is_err());
    }

    #[test]
    fn rejects_nonzero_padding_past_final_count() {
        let omega = 8;
        let mut buf = vec![0u8; omega + 1];
        buf[0] = 1;
        buf[2] = 9; // nonzero past the count k=1
        buf[omega] = 1;
        assert!(decode(&buf, 1, omega).is_err());
    }

    #[test]
    fn rejects_count_exceeding_omega() {
        let omega = 4;
        let mut buf = vec![0u8; omega + 1];
        buf[omega] = omega as u8 + 1;
        assert!(decode(&buf, 1, omega).is_err());
    }
}
