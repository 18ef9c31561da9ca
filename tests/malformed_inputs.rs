//! Wire-format boundary tests: wrong-length keys/signatures and malformed
//! hint encodings must fail cleanly rather than panic.

use mldsa::error::Error;
use mldsa::mldsa44::{PublicKey, SecretKey, Signature};

#[test]
fn public_key_rejects_wrong_length() {
    let short = vec![0u8; mldsa::mldsa44::PUBLIC_KEY_BYTES - 1];
    assert_eq!(
        PublicKey::try_from(short.as_slice()).unwrap_err(),
        Error::InvalidPublicKeyLength
    );
}

#[test]
fn secret_key_rejects_wrong_length() {
    // `SecretKey` has no `Debug` impl (key material should never be
    // logged), so the error is checked by matching rather than
    // `unwrap_err`, which would require one.
    let long = vec![0u8; mldsa::mldsa44::SECRET_KEY_BYTES + 1];
    match SecretKey::try_from(long.as_slice()) {
        Err(Error::InvalidSecretKeyLength) => {}
        _ => panic!("expected InvalidSecretKeyLength"),
    }
}

#[test]
fn signature_rejects_wrong_length() {
    let empty: Vec<u8> = Vec::new();
    assert_eq!(
        Signature::try_from(empty.as_slice()).unwrap_err(),
        Error::InvalidSignatureLength
    );
}

#[test]
fn hint_decode_rejects_descending_indices_within_a_polynomial() {
    let omega = 8;
    let mut buf = vec![0u8; omega + 2];
    buf[0] = 5;
    buf[1] = 3;
    buf[omega] = 2;
    buf[omega + 1] = 2;
    assert!(mldsa::hint::decode(&buf, 2, omega).is_err());
}

#[test]
fn hint_decode_rejects_nonzero_padding_past_final_count() {
    let omega = 8;
    let mut buf = vec![0u8; omega + 1];
    buf[0] = 1;
    buf[3] = 7;
    buf[omega] = 1;
    assert!(mldsa::hint::decode(&buf, 1, omega).is_err());
}
