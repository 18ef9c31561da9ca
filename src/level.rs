//! `define_level!` generates one concrete, non-generic module per ML-DSA
//! security level (44/65/87).
//!
//! `N` and `Q` never change across levels, so the shared ring/NTT/sampler/
//! packing/hint modules stay plain functions. What *does* change — `K`,
//! `L`, `eta`, `tau`, `beta`, `gamma1`, `gamma2`, `omega`, and every byte
//! size derived from them — only shows up as array lengths and match arms,
//! which stable Rust does not let a single generic type express without
//! `generic_const_exprs`. Rather than reach for that (or an unstable
//! feature), each level gets its own copy of the vector-sized code, the way
//! the reference implementation compiles three distinct `MLD_NAMESPACE`
//! variants rather than one generic one.
macro_rules! define_level {
    (
        $(#[$attr:meta])*
        mod $modname:ident -> $ty:ident {
            name: $display:literal,
            k: $k:expr, l: $l:expr, eta: $eta:expr, tau: $tau:expr, beta: $beta:expr,
            gamma1: $gamma1:expr, gamma2: $gamma2:expr, omega: $omega:expr,
            ctildebytes: $ctb:expr,
            public_key_bytes: $pkb:expr, secret_key_bytes: $skb:expr, signature_bytes: $sigb:expr,
        }
    ) => {
        $(#[$attr])*
        pub mod $modname {
            use crate::error::{Error, Result};
            use crate::hint;
            use crate::packing;
            use crate::params::{
                Eta, Gamma1, Gamma2, SigningMode, CRHBYTES, D, N, SEEDBYTES, TRBYTES,
                MAX_SIGN_ATTEMPTS,
            };
            use crate::poly::{NttPoly, Poly};
            use crate::sample;
            use rand_core::{CryptoRng, RngCore};
            use sha3::digest::{ExtendableOutput, Update, XofReader};
            use sha3::Shake256;
            use subtle::ConstantTimeEq;
            use tracing::{debug, instrument};
            use zeroize::{Zeroize, ZeroizeOnDrop};

            /// Human-readable parameter-set name, e.g. `"ML-DSA-44"`.
            pub const NAME: &str = $display;
            pub const K: usize = $k;
            pub const L: usize = $l;
            pub const ETA: Eta = $eta;
            pub const TAU: usize = $tau;
            pub const BETA: i32 = $beta;
            pub const GAMMA1: Gamma1 = $gamma1;
            pub const GAMMA2: Gamma2 = $gamma2;
            pub const OMEGA: usize = $omega;
            pub const CTILDEBYTES: usize = $ctb;
            pub const PUBLIC_KEY_BYTES: usize = $pkb;
            pub const SECRET_KEY_BYTES: usize = $skb;
            pub const SIGNATURE_BYTES: usize = $sigb;

            const T1_BYTES: usize = (N * 10) / 8;
            const T0_BYTES: usize = (N * D as usize) / 8;
            const ETA_BYTES: usize = ETA.packed_bytes();
            const Z_BYTES: usize = GAMMA1.packed_bytes();
            const W1_BYTES: usize = GAMMA2.packed_bytes();

            /// `rho || pack_t1(t1_0) || .. || pack_t1(t1_{K-1})`.
            #[derive(Clone, Debug, PartialEq, Eq)]
            pub struct PublicKey(pub [u8; PUBLIC_KEY_BYTES]);

            /// `rho || key || tr || pack_eta(s1) || pack_eta(s2) || pack_t0(t0)`.
            ///
            /// Zeroized on drop and never `Debug`/`Clone`, so secret material
            /// cannot be accidentally logged or duplicated past the copy the
            /// caller already holds.
            #[derive(Zeroize, ZeroizeOnDrop)]
            pub struct SecretKey(pub [u8; SECRET_KEY_BYTES]);

            /// `c~ || pack_z(z_0) || .. || pack_z(z_{L-1}) || encode_hint(h)`.
            #[derive(Clone, Debug, PartialEq, Eq)]
            pub struct Signature(pub [u8; SIGNATURE_BYTES]);

            impl PublicKey {
                pub fn as_bytes(&self) -> &[u8] {
                    &self.0
                }
            }

            impl SecretKey {
                pub fn as_bytes(&self) -> &[u8] {
                    &self.0
                }
            }

            impl Signature {
                pub fn as_bytes(&self) -> &[u8] {
                    &self.0
                }
            }

            impl TryFrom<&[u8]> for PublicKey {
                type Error = Error;
                fn try_from(data: &[u8]) -> Result<Self> {
                    let arr: [u8; PUBLIC_KEY_BYTES] =
                        data.try_into().map_err(|_| Error::InvalidPublicKeyLength)?;
                    Ok(PublicKey(arr))
                }
            }

            impl TryFrom<&[u8]> for SecretKey {
                type Error = Error;
                fn try_from(data: &[u8]) -> Result<Self> {
                    let arr: [u8; SECRET_KEY_BYTES] =
                        data.try_into().map_err(|_| Error::InvalidSecretKeyLength)?;
                    Ok(SecretKey(arr))
                }
            }

            impl TryFrom<&[u8]> for Signature {
                type Error = Error;
                fn try_from(data: &[u8]) -> Result<Self> {
                    let arr: [u8; SIGNATURE_BYTES] =
                        data.try_into().map_err(|_| Error::InvalidSignatureLength)?;
                    Ok(Signature(arr))
                }
            }

            fn shake256_xof(parts: &[&[u8]], out: &mut [u8]) {
                let mut hasher = Shake256::default();
                for part in parts {
                    Update::update(&mut hasher, part);
                }
                let mut reader = hasher.finalize_xof();
                reader.read(out);
            }

            fn ntt_vec_l(v: &[Poly; L]) -> [NttPoly; L] {
                let mut r = [NttPoly([0; N]); L];
                for i in 0..L {
                    r[i] = v[i].ntt();
                }
                r
            }

            fn ntt_vec_k(v: &[Poly; K]) -> [NttPoly; K] {
                let mut r = [NttPoly([0; N]); K];
                for i in 0..K {
                    r[i] = v[i].ntt();
                }
                r
            }

            /// ExpandA: sample the public `K x L` matrix directly in the NTT
            /// domain from `rho` (spec.md sec 4.4). `nonce = (i << 8) | j`
            /// matches the reference's row/column convention.
            fn expand_a(rho: &[u8; SEEDBYTES]) -> [[NttPoly; L]; K] {
                let mut a = [[NttPoly([0; N]); L]; K];
                for i in 0..K {
                    for j in 0..L {
                        let nonce = ((i as u16) << 8) | j as u16;
                        a[i][j] = NttPoly(sample::uniform(rho, nonce).0);
                    }
                }
                a
            }

            fn mat_vec(a: &[[NttPoly; L]; K], v: &[NttPoly; L]) -> [NttPoly; K] {
                let mut out = [NttPoly([0; N]); K];
                for i in 0..K {
                    let mut acc = a[i][0].pointwise_montgomery(&v[0]);
                    for j in 1..L {
                        acc = acc.add(&a[i][j].pointwise_montgomery(&v[j]));
                    }
                    out[i] = acc;
                }
                out
            }

            fn derive_mu(tr: &[u8; TRBYTES], ctx: &[u8], msg: &[u8]) -> [u8; CRHBYTES] {
                let mut mu = [0u8; CRHBYTES];
                // FIPS 204's context-string encoding: `0x00 || len(ctx) || ctx || M`.
                let header = [0u8, ctx.len() as u8];
                shake256_xof(&[tr, &header, ctx, msg], &mut mu);
                mu
            }

            /// Generate a fresh keypair.
            ///
            /// Grounded on `pqcrypto_native::algorithms::mldsa::keygen`'s control
            /// flow: expand a 32-byte seed into `(rho, rho', key)`, sample `A`
            /// from `rho` and `(s1, s2)` from `rho'`, fold `t = A*s1 + s2`, and
            /// split `t` into the public high bits `t1` and the secret low bits
            /// `t0`.
            #[instrument(skip_all, fields(level = NAME))]
            pub fn keypair<R: RngCore + CryptoRng>(rng: &mut R) -> (PublicKey, SecretKey) {
                let mut seed = [0u8; SEEDBYTES];
                rng.fill_bytes(&mut seed);

                let mut expanded = [0u8; 2 * SEEDBYTES + CRHBYTES];
                shake256_xof(&[&seed, &[K as u8, L as u8]], &mut expanded);
                let rho: [u8; SEEDBYTES] = expanded[..SEEDBYTES].try_into().unwrap();
                let rho_prime: [u8; CRHBYTES] =
                    expanded[SEEDBYTES..SEEDBYTES + CRHBYTES].try_into().unwrap();
                let key: [u8; SEEDBYTES] = expanded[SEEDBYTES + CRHBYTES..].try_into().unwrap();
                seed.zeroize();

                let a_hat = expand_a(&rho);

                let mut s1 = [Poly::zero(); L];
                for i in 0..L {
                    s1[i] = sample::eta(&rho_prime, i as u16, ETA);
                }
                let mut s2 = [Poly::zero(); K];
                for i in 0..K {
                    s2[i] = sample::eta(&rho_prime, (L + i) as u16, ETA);
                }

                let s1_hat = ntt_vec_l(&s1);
                let t_hat = mat_vec(&a_hat, &s1_hat);

                let mut t1 = [Poly::zero(); K];
                let mut t0 = [Poly::zero(); K];
                for i in 0..K {
                    let mut t = t_hat[i].inv_ntt_tomont();
                    t = t.add(&s2[i]);
                    t.reduce();
                    t.caddq();
                    let (a1, a0) = t.power2round();
                    t1[i] = a1;
                    t0[i] = a0;
                }

                let mut pk_bytes = [0u8; PUBLIC_KEY_BYTES];
                pk_bytes[..SEEDBYTES].copy_from_slice(&rho);
                for i in 0..K {
                    let start = SEEDBYTES + i * T1_BYTES;
                    packing::pack_t1(&t1[i], &mut pk_bytes[start..start + T1_BYTES]);
                }

                let mut tr = [0u8; TRBYTES];
                shake256_xof(&[&pk_bytes], &mut tr);

                let mut sk_bytes = [0u8; SECRET_KEY_BYTES];
                let mut off = 0usize;
                sk_bytes[off..off + SEEDBYTES].copy_from_slice(&rho);
                off += SEEDBYTES;
                sk_bytes[off..off + SEEDBYTES].copy_from_slice(&key);
                off += SEEDBYTES;
                sk_bytes[off..off + TRBYTES].copy_from_slice(&tr);
                off += TRBYTES;
                for s in s1.iter() {
                    packing::pack_eta(s, ETA, &mut sk_bytes[off..off + ETA_BYTES]);
                    off += ETA_BYTES;
                }
                for s in s2.iter() {
                    packing::pack_eta(s, ETA, &mut sk_bytes[off..off + ETA_BYTES]);
                    off += ETA_BYTES;
                }
                for t in t0.iter() {
                    packing::pack_t0(t, &mut sk_bytes[off..off + T0_BYTES]);
                    off += T0_BYTES;
                }
                debug_assert_eq!(off, SECRET_KEY_BYTES);

                debug!("generated keypair");
                (PublicKey(pk_bytes), SecretKey(sk_bytes))
            }

            /// Sign `msg` under `ctx` (at most 255 bytes).
            ///
            /// `mode` picks [`SigningMode::Deterministic`] (rho' is a pure
            /// function of `sk`/`msg`/`ctx`) or [`SigningMode::Hedged`] (32
            /// bytes from `rng` are folded in); `rng` is required exactly when
            /// `mode` is `Hedged`. Grounded on
            /// `pqcrypto_native::algorithms::mldsa::try_sign`'s rejection loop.
            #[instrument(skip(sk, msg, rng), fields(level = NAME, msg_len = msg.len()))]
            pub fn sign<R: RngCore + CryptoRng>(
                sk: &SecretKey,
                msg: &[u8],
                ctx: &[u8],
                mode: SigningMode,
                rng: Option<&mut R>,
            ) -> Result<Signature> {
                if ctx.len() > 255 {
                    return Err(Error::ContextTooLong);
                }

                let mut off = 0usize;
                let rho: [u8; SEEDBYTES] = sk.0[off..off + SEEDBYTES].try_into().unwrap();
                off += SEEDBYTES;
                let key: [u8; SEEDBYTES] = sk.0[off..off + SEEDBYTES].try_into().unwrap();
                off += SEEDBYTES;
                let tr: [u8; TRBYTES] = sk.0[off..off + TRBYTES].try_into().unwrap();
                off += TRBYTES;
                let mut s1 = [Poly::zero(); L];
                for slot in s1.iter_mut() {
                    *slot = packing::unpack_eta(&sk.0[off..off + ETA_BYTES], ETA);
                    off += ETA_BYTES;
                }
                let mut s2 = [Poly::zero(); K];
                for slot in s2.iter_mut() {
                    *slot = packing::unpack_eta(&sk.0[off..off + ETA_BYTES], ETA);
                    off += ETA_BYTES;
                }
                let mut t0 = [Poly::zero(); K];
                for slot in t0.iter_mut() {
                    *slot = packing::unpack_t0(&sk.0[off..off + T0_BYTES]);
                    off += T0_BYTES;
                }

                let a_hat = expand_a(&rho);
                let s1_hat = ntt_vec_l(&s1);
                let s2_hat = ntt_vec_k(&s2);
                let t0_hat = ntt_vec_k(&t0);

                let mu = derive_mu(&tr, ctx, msg);

                let mut rnd = [0u8; SEEDBYTES];
                if let SigningMode::Hedged = mode {
                    rng.ok_or(Error::MissingRng)?.fill_bytes(&mut rnd);
                }

                let mut rho_prime = [0u8; CRHBYTES];
                shake256_xof(&[&key, &rnd, &mu], &mut rho_prime);

                let mut kappa: u16 = 0;
                for _attempt in 0..MAX_SIGN_ATTEMPTS {
                    let mut y = [Poly::zero(); L];
                    for (i, slot) in y.iter_mut().enumerate() {
                        *slot = sample::gamma1_mask(&rho_prime, kappa + i as u16, GAMMA1);
                    }
                    kappa += L as u16;

                    let y_hat = ntt_vec_l(&y);
                    let w_hat = mat_vec(&a_hat, &y_hat);
                    let mut w1 = [Poly::zero(); K];
                    let mut w0 = [Poly::zero(); K];
                    let mut w_full = [Poly::zero(); K];
                    for i in 0..K {
                        let mut w = w_hat[i].inv_ntt_tomont();
                        w.caddq();
                        let (hi, lo) = w.decompose(GAMMA2);
                        w1[i] = hi;
                        w0[i] = lo;
                        w_full[i] = w;
                    }

                    let mut wbuf = [0u8; K * W1_BYTES];
                    for i in 0..K {
                        packing::pack_w1(&w1[i], GAMMA2, &mut wbuf[i * W1_BYTES..(i + 1) * W1_BYTES]);
                    }
                    let mut c_tilde = [0u8; CTILDEBYTES];
                    shake256_xof(&[&mu, &wbuf], &mut c_tilde);

                    let c = sample::challenge(&c_tilde, TAU);
                    let c_hat = c.ntt();

                    let mut z = [Poly::zero(); L];
                    let mut reject = false;
                    for i in 0..L {
                        let cs1 = c_hat.pointwise_montgomery(&s1_hat[i]).inv_ntt_tomont();
                        let mut zi = y[i].add(&cs1);
                        zi.reduce();
                        reject |= zi.chknorm(GAMMA1.value() - BETA);
                        z[i] = zi;
                    }
                    if reject {
                        continue;
                    }

                    let mut r0 = [Poly::zero(); K];
                    for i in 0..K {
                        let cs2 = c_hat.pointwise_montgomery(&s2_hat[i]).inv_ntt_tomont();
                        let mut r0i = w0[i].sub(&cs2);
                        r0i.reduce();
                        reject |= r0i.chknorm(GAMMA2.value() - BETA);
                        r0[i] = r0i;
                    }
                    if reject {
                        continue;
                    }

                    let mut ct0 = [Poly::zero(); K];
                    for i in 0..K {
                        let mut v = c_hat.pointwise_montgomery(&t0_hat[i]).inv_ntt_tomont();
                        v.reduce();
                        reject |= v.chknorm(GAMMA2.value());
                        ct0[i] = v;
                    }
                    if reject {
                        continue;
                    }

                    let mut hint_polys = [Poly::zero(); K];
                    let mut total_weight = 0u32;
                    for i in 0..K {
                        // v = r0 + ct0 = (w0 - cs2) + ct0; subtracting w0
                        // back out leaves exactly the perturbation (ct0 -
                        // cs2) relative to the full, undecomposed `w_full`.
                        let v = r0[i].add(&ct0[i]);
                        let v0 = v.sub(&w0[i]);
                        let (h, w) = Poly::make_hint(&v0, &w_full[i], GAMMA2);
                        hint_polys[i] = h;
                        total_weight += w;
                    }
                    if total_weight as usize > OMEGA {
                        continue;
                    }

                    let mut sig_bytes = [0u8; SIGNATURE_BYTES];
                    let mut sig_off = 0usize;
                    sig_bytes[sig_off..sig_off + CTILDEBYTES].copy_from_slice(&c_tilde);
                    sig_off += CTILDEBYTES;
                    for zi in z.iter() {
                        packing::pack_z(zi, GAMMA1, &mut sig_bytes[sig_off..sig_off + Z_BYTES]);
                        sig_off += Z_BYTES;
                    }
                    hint::encode(&hint_polys[..K], OMEGA, &mut sig_bytes[sig_off..]);

                    debug!("signature accepted");
                    return Ok(Signature(sig_bytes));
                }

                Err(Error::RejectionSamplingExhausted)
            }

            /// Verify `sig` over `msg` under `ctx` against `pk`.
            ///
            /// Grounded on `pqcrypto_native::algorithms::mldsa::verify`:
            /// reconstruct the commitment from `z`, the hint, and the public
            /// high bits `t1`, then check it hashes back to the challenge seed
            /// embedded in the signature.
            #[instrument(skip(pk, msg, sig), fields(level = NAME, msg_len = msg.len()))]
            pub fn verify(pk: &PublicKey, msg: &[u8], ctx: &[u8], sig: &Signature) -> Result<()> {
                if ctx.len() > 255 {
                    return Err(Error::ContextTooLong);
                }

                let rho: [u8; SEEDBYTES] = pk.0[..SEEDBYTES].try_into().unwrap();
                let mut t1 = [Poly::zero(); K];
                for i in 0..K {
                    let start = SEEDBYTES + i * T1_BYTES;
                    t1[i] = packing::unpack_t1(&pk.0[start..start + T1_BYTES]);
                }

                let mut off = 0usize;
                let c_tilde: [u8; CTILDEBYTES] =
                    sig.0[off..off + CTILDEBYTES].try_into().unwrap();
                off += CTILDEBYTES;
                let mut z = [Poly::zero(); L];
                for slot in z.iter_mut() {
                    *slot = packing::unpack_z(&sig.0[off..off + Z_BYTES], GAMMA1);
                    off += Z_BYTES;
                }
                let hint_data = &sig.0[off..];
                let hint_polys =
                    hint::decode(hint_data, K, OMEGA).map_err(|_| Error::VerificationFailed)?;

                for zi in z.iter() {
                    if zi.chknorm(GAMMA1.value() - BETA) {
                        return Err(Error::VerificationFailed);
                    }
                }

                let mut tr = [0u8; TRBYTES];
                shake256_xof(&[&pk.0], &mut tr);
                let mu = derive_mu(&tr, ctx, msg);

                let a_hat = expand_a(&rho);
                let z_hat = ntt_vec_l(&z);
                let c = sample::challenge(&c_tilde, TAU);
                let c_hat = c.ntt();
                let az_hat = mat_vec(&a_hat, &z_hat);

                let mut w1_approx = [Poly::zero(); K];
                for i in 0..K {
                    let mut t1_shifted = t1[i];
                    t1_shifted.shiftl();
                    let t1_hat = t1_shifted.ntt();
                    let ct1 = c_hat.pointwise_montgomery(&t1_hat);
                    let mut w_approx = az_hat[i].sub(&ct1).inv_ntt_tomont();
                    w_approx.caddq();
                    w1_approx[i] = w_approx.use_hint(&hint_polys[i], GAMMA2);
                }

                let mut wbuf = [0u8; K * W1_BYTES];
                for i in 0..K {
                    packing::pack_w1(&w1_approx[i], GAMMA2, &mut wbuf[i * W1_BYTES..(i + 1) * W1_BYTES]);
                }
                let mut c_tilde2 = [0u8; CTILDEBYTES];
                shake256_xof(&[&mu, &wbuf], &mut c_tilde2);

                if c_tilde[..].ct_eq(&c_tilde2[..]).unwrap_u8() != 1 {
                    debug!("verification failed: challenge mismatch");
                    return Err(Error::VerificationFailed);
                }
                debug!("verification succeeded");
                Ok(())
            }

            /// Zero-sized handle for this parameter set; every operation is
            /// an associated function, so callers never construct one except
            /// to read its size constants.
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $ty;

            impl $ty {
                pub const NAME: &'static str = NAME;
                pub const PUBLIC_KEY_BYTES: usize = PUBLIC_KEY_BYTES;
                pub const SECRET_KEY_BYTES: usize = SECRET_KEY_BYTES;
                pub const SIGNATURE_BYTES: usize = SIGNATURE_BYTES;

                pub fn keypair<R: RngCore + CryptoRng>(rng: &mut R) -> (PublicKey, SecretKey) {
                    keypair(rng)
                }

                pub fn sign<R: RngCore + CryptoRng>(
                    sk: &SecretKey,
                    msg: &[u8],
                    ctx: &[u8],
                    mode: SigningMode,
                    rng: Option<&mut R>,
                ) -> Result<Signature> {
                    sign(sk, msg, ctx, mode, rng)
                }

                pub fn verify(pk: &PublicKey, msg: &[u8], ctx: &[u8], sig: &Signature) -> Result<()> {
                    verify(pk, msg, ctx, sig)
                }
            }

            #[cfg(test)]
            mod tests {
                use super::*;
                use rand::rngs::OsRng;

                #[test]
                fn sign_then_verify_round_trips() {
                    let mut rng = OsRng;
                    let (pk, sk) = keypair(&mut rng);
                    let msg = b"integration test message";
                    let ctx = b"ctx";
                    let sig = sign::<OsRng>(&sk, msg, ctx, SigningMode::Deterministic, None)
                        .expect("signing should succeed");
                    assert!(verify(&pk, msg, ctx, &sig).is_ok());
                }

                #[test]
                fn verify_rejects_tampered_message() {
                    let mut rng = OsRng;
                    let (pk, sk) = keypair(&mut rng);
                    let sig = sign::<OsRng>(&sk, b"original", b"", SigningMode::Deterministic, None)
                        .unwrap();
                    assert!(verify(&pk, b"tampered", b"", &sig).is_err());
                }

                #[test]
                fn deterministic_signing_is_reproducible() {
                    let mut rng = OsRng;
                    let (_, sk) = keypair(&mut rng);
                    let sig_a =
                        sign::<OsRng>(&sk, b"msg", b"", SigningMode::Deterministic, None).unwrap();
                    let sig_b =
                        sign::<OsRng>(&sk, b"msg", b"", SigningMode::Deterministic, None).unwrap();
                    assert!(sig_a.0[..] == sig_b.0[..]);
                }

                #[test]
                fn hedged_signing_requires_rng() {
                    let mut rng = OsRng;
                    let (_, sk) = keypair(&mut rng);
                    let result = sign::<OsRng>(&sk, b"msg", b"", SigningMode::Hedged, None);
                    assert!(result.is_err());
                }

                #[test]
                fn key_and_signature_sizes_match_declared_constants() {
                    let mut rng = OsRng;
                    let (pk, sk) = keypair(&mut rng);
                    assert_eq!(pk.as_bytes().len(), PUBLIC_KEY_BYTES);
                    assert_eq!(sk.as_bytes().len(), SECRET_KEY_BYTES);
                    let sig = sign::<OsRng>(&sk, b"m", b"", SigningMode::Deterministic, None).unwrap();
                    assert_eq!(sig.as_bytes().len(), SIGNATURE_BYTES);
                }
            }
        }
    };
}
