//! Cross-level keygen/sign/verify integration tests.

use mldsa::params::SigningMode;
use rand::rngs::OsRng;

macro_rules! level_tests {
    ($mod_name:ident, $level:ty, $sig:ty) => {
        mod $mod_name {
            use super::*;

            #[test]
            fn keygen_sign_verify_roundtrips() {
                let mut rng = OsRng;
                let (pk, sk) = <$level>::keypair(&mut rng);
                let message = b"test message for keygen_sign_verify_roundtrips";
                let sig =
                    <$level>::sign::<OsRng>(&sk, message, b"", SigningMode::Deterministic, None)
                        .expect("sign");
                assert!(<$level>::verify(&pk, message, b"", &sig).is_ok());
            }

            #[test]
            fn verify_rejects_modified_message() {
                let mut rng = OsRng;
                let (pk, sk) = <$level>::keypair(&mut rng);
                let message = b"original message";
                let sig =
                    <$level>::sign::<OsRng>(&sk, message, b"", SigningMode::Deterministic, None)
                        .expect("sign");
                assert!(<$level>::verify(&pk, b"tampered message", b"", &sig).is_err());
            }

            #[test]
            fn verify_rejects_modified_signature() {
                let mut rng = OsRng;
                let (pk, sk) = <$level>::keypair(&mut rng);
                let message = b"test message";
                let sig =
                    <$level>::sign::<OsRng>(&sk, message, b"", SigningMode::Deterministic, None)
                        .expect("sign");
                let mut bytes = sig.as_bytes().to_vec();
                bytes[0] ^= 0xff;
                let corrupted = <$sig>::try_from(bytes.as_slice()).expect("still well-formed");
                assert!(<$level>::verify(&pk, message, b"", &corrupted).is_err());
            }

            #[test]
            fn verify_rejects_different_context() {
                let mut rng = OsRng;
                let (pk, sk) = <$level>::keypair(&mut rng);
                let message = b"context sensitive message";
                let sig = <$level>::sign::<OsRng>(
                    &sk,
                    message,
                    b"context-a",
                    SigningMode::Deterministic,
                    None,
                )
                .expect("sign");
                assert!(<$level>::verify(&pk, message, b"context-b", &sig).is_err());
            }

            #[test]
            fn verify_rejects_wrong_public_key() {
                let mut rng = OsRng;
                let (_, sk) = <$level>::keypair(&mut rng);
                let (other_pk, _) = <$level>::keypair(&mut rng);
                let message = b"key mismatch message";
                let sig =
                    <$level>::sign::<OsRng>(&sk, message, b"", SigningMode::Deterministic, None)
                        .expect("sign");
                assert!(<$level>::verify(&other_pk, message, b"", &sig).is_err());
            }

            #[test]
            fn sign_rejects_oversized_context() {
                let mut rng = OsRng;
                let (_, sk) = <$level>::keypair(&mut rng);
                let ctx = vec![0u8; 256];
                let result =
                    <$level>::sign::<OsRng>(&sk, b"msg", &ctx, SigningMode::Deterministic, None);
                assert!(result.is_err());
            }

            #[test]
            fn hedged_mode_varies_signature_bytes_across_calls() {
                let mut rng = OsRng;
                let (_, sk) = <$level>::keypair(&mut rng);
                let message = b"hedged message";
                let sig_a = <$level>::sign(&sk, message, b"", SigningMode::Hedged, Some(&mut rng))
                    .expect("sign");
                let sig_b = <$level>::sign(&sk, message, b"", SigningMode::Hedged, Some(&mut rng))
                    .expect("sign");
                assert_ne!(sig_a.as_bytes(), sig_b.as_bytes());
            }

            #[test]
            fn key_sizes_match_declared_constants() {
                let mut rng = OsRng;
                let (pk, sk) = <$level>::keypair(&mut rng);
                assert_eq!(pk.as_bytes().len(), <$level>::PUBLIC_KEY_BYTES);
                assert_eq!(sk.as_bytes().len(), <$level>::SECRET_KEY_BYTES);
            }
        }
    };
}

level_tests!(mldsa44, mldsa::Mldsa44, mldsa::mldsa44::Signature);
level_tests!(mldsa65, mldsa::Mldsa65, mldsa::mldsa65::Signature);
level_tests!(mldsa87, mldsa::Mldsa87, mldsa::mldsa87::Signature);
