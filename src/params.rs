//! Scheme-wide constants and the small runtime parameter enums that let the
//! shared single-polynomial code (sampling, packing, decompose) branch on
//! eta/gamma1/gamma2 without being generic over a whole parameter set.
//!
//! N and Q are identical across ML-DSA-44/65/87, so the bulk of the
//! polynomial and NTT layer lives outside any per-level module; only K, L,
//! and the sizes below actually vary, and those live in the per-level
//! modules generated by `crate::level::define_level!`.

/// Degree of the polynomial ring `Z_q[X]/(X^N + 1)`.
pub const N: usize = 256;

/// Prime modulus `Q = 2^23 - 2^13 + 1`.
pub const Q: i32 = 8_380_417;

/// Bits of `t` dropped when splitting into `t1`/`t0`.
pub const D: u32 = 13;

/// Bytes of a public seed (rho) or the `K`/trace seed.
pub const SEEDBYTES: usize = 32;

/// Bytes of a collision-resistant hash (mu, rho-prime derivation).
pub const CRHBYTES: usize = 64;

/// Bytes reserved for `tr` in the secret key.
pub const TRBYTES: usize = 64;

/// Montgomery reduction constant: `2^32 mod Q` as a signed residue.
pub const MONT: i32 = -4_186_625;

/// `-Q^{-1} mod 2^32`.
pub const QINV: i64 = 58_728_449;

/// Secret coefficient bound eta, selects the bit-width of the eta codec and
/// the rejection-sampling nibble map (spec.md sec 4.4/4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eta {
    Two,
    Four,
}

impl Eta {
    pub const fn value(self) -> i32 {
        match self {
            Eta::Two => 2,
            Eta::Four => 4,
        }
    }

    /// Bits per coefficient in the packed eta codec.
    pub const fn packed_bits(self) -> u32 {
        match self {
            Eta::Two => 3,
            Eta::Four => 4,
        }
    }

    pub const fn packed_bytes(self) -> usize {
        (N * self.packed_bits() as usize) / 8
    }
}

/// Mask range gamma1, selects the bit-width of the z codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gamma1 {
    TwoPow17,
    TwoPow19,
}

impl Gamma1 {
    pub const fn value(self) -> i32 {
        match self {
            Gamma1::TwoPow17 => 1 << 17,
            Gamma1::TwoPow19 => 1 << 19,
        }
    }

    pub const fn packed_bits(self) -> u32 {
        match self {
            Gamma1::TwoPow17 => 18,
            Gamma1::TwoPow19 => 20,
        }
    }

    pub const fn packed_bytes(self) -> usize {
        (N * self.packed_bits() as usize) / 8
    }
}

/// Low-bits rounding gamma2, selects the bit-width of the w1 codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gamma2 {
    QMinus1Over88,
    QMinus1Over32,
}

impl Gamma2 {
    pub const fn value(self) -> i32 {
        match self {
            Gamma2::QMinus1Over88 => (Q - 1) / 88,
            Gamma2::QMinus1Over32 => (Q - 1) / 32,
        }
    }

    pub const fn packed_bits(self) -> u32 {
        match self {
            Gamma2::QMinus1Over88 => 6,
            Gamma2::QMinus1Over32 => 4,
        }
    }

    pub const fn packed_bytes(self) -> usize {
        (N * self.packed_bits() as usize) / 8
    }
}

/// Whether `sign` hedges the transcript with fresh randomness or is a pure
/// function of (sk, msg, ctx). The base spec's redesign notes call the
/// randomized-vs-deterministic choice a build-time open question with "no
/// silent default"; making it a required argument enforces that at every
/// call site rather than behind a `#[cfg]` flag a caller could forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningMode {
    /// Sign is a pure function of (sk, msg, ctx); rho' is derived without
    /// fresh randomness. Required for the round-trip/KAT determinism tests.
    Deterministic,
    /// Fold 32 bytes of caller-supplied randomness into rho' (FIPS 204's
    /// "hedged" variant), hardening against faulty RNGs without losing
    /// determinism guarantees the caller doesn't ask for.
    Hedged,
}

/// Cap on signing-loop restarts before giving up with
/// [`crate::error::Error::RejectionSamplingExhausted`]. The loop has no
/// theoretical bound (spec.md sec 4.8); this is a DoS backstop, sized well
/// above the expected ~4-8 iterations to keep false exhaustion negligible.
pub const MAX_SIGN_ATTEMPTS: u32 = 1000;
