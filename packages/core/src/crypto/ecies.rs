//! ECIES over NIST P-256 (conventional suite).
//!
//! ```text
//! R (65, SEC1 uncompressed) || IV (16) || C || TAG (32)
//!
//! z       = ECDH(r, Q).x
//! K       = ConcatKDF-SHA256(z, 32)
//! Ke, Km' = K[..16], K[16..];  Km = SHA-256(Km')
//! C       = AES-128-CTR(Ke, IV, M)
//! TAG     = HMAC-SHA256(Km, IV || C)
//! ```

use crate::crypto::curve::random_secret_key;
use crate::error::{CryptoError, Result};
use aes::Aes128;
use ctr::cipher::{KeyIvInit, StreamCipher};
use hmac::{Hmac, Mac};
use p256::ecdh::diffie_hellman;
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::{EncodedPoint, NistP256, PublicKey, SecretKey};
use rand::rngs::OsRng;
use rand_core::RngCore;
use sha2::{Digest, Sha256};
use tracing::trace;
use zeroize::Zeroizing;

type Aes128Ctr = ctr::Ctr128BE<Aes128>;
type HmacSha256 = Hmac<Sha256>;

const POINT_LEN: usize = 65;
const IV_LEN: usize = 16;
const TAG_LEN: usize = 32;
const CIPHER_KEY_LEN: usize = 16;
const MAC_KEY_LEN: usize = 16;

/// Bytes added to the plaintext by [`encrypt`].
pub const OVERHEAD: usize = POINT_LEN + IV_LEN + TAG_LEN;

type KeyPair = (Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>);

/// Ke and Km from the NIST SP 800-56A concatenation KDF (SHA-256, empty
/// shared info). Km is hashed once more before use as the HMAC key.
fn derive_keys(z: &[u8]) -> std::result::Result<KeyPair, concat_kdf::Error> {
    let mut k = Zeroizing::new([0u8; CIPHER_KEY_LEN + MAC_KEY_LEN]);
    concat_kdf::derive_key_into::<Sha256>(z, &[], k.as_mut_slice())?;

    let ke = Zeroizing::new(k[..CIPHER_KEY_LEN].to_vec());
    let km = Zeroizing::new(Sha256::digest(&k[CIPHER_KEY_LEN..]).to_vec());
    Ok((ke, km))
}

fn new_mac(km: &[u8], iv: &[u8], body: &[u8]) -> Option<HmacSha256> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(km).ok()?;
    mac.update(iv);
    mac.update(body);
    Some(mac)
}

/// Encrypts `plaintext` to `recipient`.
pub fn encrypt(recipient: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let ephemeral: SecretKey = random_secret_key::<NistP256>()?;
    let shared = diffie_hellman(ephemeral.to_nonzero_scalar(), recipient.as_affine());
    let (ke, km) = derive_keys(shared.raw_secret_bytes())
        .map_err(|e| CryptoError::EncryptionError(e.to_string()))?;

    let mut iv = [0u8; IV_LEN];
    OsRng.try_fill_bytes(&mut iv)?;

    let mut body = plaintext.to_vec();
    Aes128Ctr::new_from_slices(&ke, &iv)
        .map_err(|e| CryptoError::EncryptionError(e.to_string()))?
        .apply_keystream(&mut body);

    let tag = new_mac(&km, &iv, &body)
        .ok_or_else(|| CryptoError::EncryptionError("invalid MAC key".to_string()))?
        .finalize()
        .into_bytes();

    let point = ephemeral.public_key().to_encoded_point(false);

    let mut out = Vec::with_capacity(OVERHEAD + body.len());
    out.extend_from_slice(point.as_bytes());
    out.extend_from_slice(&iv);
    out.extend_from_slice(&body);
    out.extend_from_slice(&tag);

    trace!(
        target: "crypto::ecies",
        plaintext_len = plaintext.len(),
        ciphertext_len = out.len(),
        "ECIES encrypt"
    );
    Ok(out)
}

/// Decrypts an [`encrypt`] output with the recipient's secret key.
///
/// Any malformed or unauthenticated input is the uniform `DecryptionError`.
pub fn decrypt(secret: &SecretKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() < OVERHEAD {
        return Err(CryptoError::DecryptionError);
    }

    let (point, rest) = ciphertext.split_at(POINT_LEN);
    let (iv, rest) = rest.split_at(IV_LEN);
    let (body, tag) = rest.split_at(rest.len() - TAG_LEN);

    let ephemeral = EncodedPoint::from_bytes(point)
        .ok()
        .and_then(|p| Option::<PublicKey>::from(PublicKey::from_encoded_point(&p)))
        .ok_or(CryptoError::DecryptionError)?;

    let shared = diffie_hellman(secret.to_nonzero_scalar(), ephemeral.as_affine());
    let (ke, km) = derive_keys(shared.raw_secret_bytes())
        .map_err(|_| CryptoError::DecryptionError)?;

    new_mac(&km, iv, body)
        .ok_or(CryptoError::DecryptionError)?
        .verify_slice(tag)
        .map_err(|_| CryptoError::DecryptionError)?;

    let mut out = body.to_vec();
    Aes128Ctr::new_from_slices(&ke, iv)
        .map_err(|_| CryptoError::DecryptionError)?
        .apply_keystream(&mut out);
    Ok(out)
}
