//! Pure Rust implementation of ML-DSA (FIPS 204, final version of Dilithium)
//!
//! References:
//! - NIST FIPS 204: <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.204.pdf>
//! - PQClean reference Dilithium/ML-DSA implementation
//!
//! This crate implements the polynomial arithmetic, NTT, rejection samplers,
//! wire-format packing, and the keygen/sign/verify composition for the three
//! standard ML-DSA security levels. All key material is zeroized on drop.
//! No heap allocation happens on the signing/verification hot path; working
//! polynomials are fixed-size stack arrays.

pub mod error;
pub mod reduce;
pub mod poly;
pub mod ntt;
pub mod sample;
pub mod packing;
pub mod hint;
pub mod params;

#[macro_use]
mod level;

level::define_level! {
    /// ML-DSA-44 (NIST security category 2).
    mod mldsa44 -> Mldsa44 {
        name: "ML-DSA-44",
        k: 4, l: 4, eta: Eta::Two, tau: 39, beta: 78,
        gamma1: Gamma1::TwoPow17, gamma2: Gamma2::QMinus1Over88, omega: 80,
        ctildebytes: 32,
        public_key_bytes: 1312, secret_key_bytes: 2560, signature_bytes: 2420,
    }
}

level::define_level! {
    /// ML-DSA-65 (NIST security category 3).
    mod mldsa65 -> Mldsa65 {
        name: "ML-DSA-65",
        k: 6, l: 5, eta: Eta::Four, tau: 49, beta: 196,
        gamma1: Gamma1::TwoPow19, gamma2: Gamma2::QMinus1Over32, omega: 55,
        ctildebytes: 48,
        public_key_bytes: 1952, secret_key_bytes: 4032, signature_bytes: 3309,
    }
}

level::define_level! {
    /// ML-DSA-87 (NIST security category 5).
    mod mldsa87 -> Mldsa87 {
        name: "ML-DSA-87",
        k: 8, l: 7, eta: Eta::Two, tau: 60, beta: 120,
        gamma1: Gamma1::TwoPow19, gamma2: Gamma2::QMinus1Over32, omega: 75,
        ctildebytes: 64,
        public_key_bytes: 2592, secret_key_bytes: 4896, signature_bytes: 4627,
    }
}

pub use mldsa44::Mldsa44;
pub use mldsa65::Mldsa65;
pub use mldsa87::Mldsa87;
