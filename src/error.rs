//! Crate-wide error type for signature operations.
//!
//! All failures are returned by explicit value; there is no panic path for
//! attacker-controlled input (malformed keys/signatures/context strings).

use thiserror::Error;

/// Errors produced by keypair generation, signing, and verification.
///
/// Intentionally coarse-grained: verification failures for different reasons
/// (bad hint encoding vs. hash mismatch vs. oversized norm) all surface as
/// [`Error::VerificationFailed`] to the public `verify` entry point so that
/// callers cannot distinguish rejection causes from the return value alone.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `ctx` passed to `sign`/`verify` exceeded 255 bytes.
    #[error("context string exceeds 255 bytes")]
    ContextTooLong,
    /// A public key byte slice had the wrong length for this parameter set.
    #[error("invalid public key length")]
    InvalidPublicKeyLength,
    /// A secret key byte slice had the wrong length for this parameter set.
    #[error("invalid secret key length")]
    InvalidSecretKeyLength,
    /// A signature byte slice had the wrong length for this parameter set.
    #[error("invalid signature length")]
    InvalidSignatureLength,
    /// The hint block failed the strict-ascent / monotonic-tail / zero-pad
    /// checks required for strong unforgeability.
    #[error("malformed hint encoding")]
    MalformedHint,
    /// The rejection-sampling signing loop exceeded its iteration cap.
    #[error("signing loop exhausted its retry budget")]
    RejectionSamplingExhausted,
    /// `sign` was called with [`crate::params::SigningMode::Hedged`] but no
    /// RNG was supplied.
    #[error("hedged signing mode requires an rng")]
    MissingRng,
    /// Signature did not verify (hash mismatch, norm bound violated, or
    /// hint weight exceeded omega).
    #[error("signature verification failed")]
    VerificationFailed,
}

pub type Result<T> = core::result::Result<T, Error>;
