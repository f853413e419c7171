//! SM2 public-key encryption (GM/T 0003.4), national suite.
//!
//! ```text
//! C1 (65, SEC1 uncompressed kG) || C3 (32) || C2 (len M)
//!
//! (x2, y2) = k * P
//! t        = KDF_SM3(x2 || y2, len M)
//! C2       = M xor t
//! C3       = SM3(x2 || M || y2)
//! ```

use crate::crypto::curve::random_secret_key;
use crate::error::{CryptoError, Result};
use elliptic_curve::sec1::{EncodedPoint, FromEncodedPoint, ToEncodedPoint};
use sm2::{NonZeroScalar, PublicKey, SecretKey, Sm2};
use sm3::{Digest, Sm3};
use subtle::ConstantTimeEq;
use tracing::trace;
use zeroize::Zeroizing;

const POINT_LEN: usize = 65;
const DIGEST_LEN: usize = 32;
const COORD_LEN: usize = 32;
const MAX_EPHEMERAL_ROUNDS: usize = 8;

/// Bytes added to the plaintext by [`encrypt`].
pub const OVERHEAD: usize = POINT_LEN + DIGEST_LEN;

/// KDF from GM/T 0003.4: `SM3(z || ct)` for ct = 1, 2, ... (32-bit big-endian).
fn sm3_kdf(z: &[u8], len: usize) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(Vec::with_capacity(len + DIGEST_LEN));
    let mut counter: u32 = 1;
    while out.len() < len {
        let mut hasher = Sm3::new();
        hasher.update(z);
        hasher.update(counter.to_be_bytes());
        out.extend_from_slice(&hasher.finalize());
        counter += 1;
    }
    out.truncate(len);
    out
}

/// Returns `x2 || y2` of `scalar * point`.
fn shared_coordinates(point: &PublicKey, scalar: &NonZeroScalar) -> Option<Zeroizing<Vec<u8>>> {
    let shared = (point.to_projective() * **scalar).to_affine();
    let encoded = shared.to_encoded_point(false);

    let mut xy = Zeroizing::new(Vec::with_capacity(2 * COORD_LEN));
    xy.extend_from_slice(encoded.x()?);
    xy.extend_from_slice(encoded.y()?);
    Some(xy)
}

fn is_all_zero(t: &[u8]) -> bool {
    !t.is_empty() && t.iter().all(|&b| b == 0)
}

fn c3_digest(xy: &[u8], message: &[u8]) -> Vec<u8> {
    let (x2, y2) = xy.split_at(COORD_LEN);
    let mut hasher = Sm3::new();
    hasher.update(x2);
    hasher.update(message);
    hasher.update(y2);
    hasher.finalize().to_vec()
}

/// Encryption with a caller-chosen ephemeral scalar `k`.
///
/// Returns `None` when `k` has to be redrawn (all-zero key stream).
pub(crate) fn encrypt_with_ephemeral(
    recipient: &PublicKey,
    k: &NonZeroScalar,
    plaintext: &[u8],
) -> Option<Vec<u8>> {
    let xy = shared_coordinates(recipient, k)?;
    let t = sm3_kdf(&xy, plaintext.len());
    if is_all_zero(&t) {
        return None;
    }

    let c1 = PublicKey::from_secret_scalar(k).to_encoded_point(false);
    let c3 = c3_digest(&xy, plaintext);

    let mut out = Vec::with_capacity(OVERHEAD + plaintext.len());
    out.extend_from_slice(c1.as_bytes());
    out.extend_from_slice(&c3);
    out.extend(plaintext.iter().zip(t.iter()).map(|(m, t)| m ^ t));
    Some(out)
}

/// Encrypts `plaintext` to `recipient`, C1C3C2 order.
pub fn encrypt(recipient: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    for _ in 0..MAX_EPHEMERAL_ROUNDS {
        let k: SecretKey = random_secret_key::<Sm2>()?;
        if let Some(out) = encrypt_with_ephemeral(recipient, &k.to_nonzero_scalar(), plaintext) {
            trace!(
                target: "crypto::sm2_pke",
                plaintext_len = plaintext.len(),
                ciphertext_len = out.len(),
                "SM2 encrypt"
            );
            return Ok(out);
        }
    }
    Err(CryptoError::EncryptionError(
        "no usable ephemeral key".to_string(),
    ))
}

/// Decrypts an [`encrypt`] output. Every failure is the uniform `DecryptionError`.
pub fn decrypt(secret: &SecretKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() < OVERHEAD {
        return Err(CryptoError::DecryptionError);
    }

    let (c1, rest) = ciphertext.split_at(POINT_LEN);
    let (c3, c2) = rest.split_at(DIGEST_LEN);

    let c1 = EncodedPoint::<Sm2>::from_bytes(c1)
        .ok()
        .and_then(|p| Option::<PublicKey>::from(PublicKey::from_encoded_point(&p)))
        .ok_or(CryptoError::DecryptionError)?;

    let xy = shared_coordinates(&c1, &secret.to_nonzero_scalar())
        .ok_or(CryptoError::DecryptionError)?;
    let t = sm3_kdf(&xy, c2.len());
    if is_all_zero(&t) {
        return Err(CryptoError::DecryptionError);
    }

    let plaintext = Zeroizing::new(
        c2.iter()
            .zip(t.iter())
            .map(|(c, t)| c ^ t)
            .collect::<Vec<u8>>(),
    );

    let expected = c3_digest(&xy, &plaintext);
    if bool::from(expected.ct_eq(c3)) {
        Ok(plaintext.to_vec())
    } else {
        Err(CryptoError::DecryptionError)
    }
}
