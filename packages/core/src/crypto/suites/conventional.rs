use crate::crypto::codec::{decode_public_key, decode_signature, encode_signature, left_pad, trim_leading_zeros};
use crate::crypto::curve;
use crate::crypto::ecies;
use crate::crypto::provider::CryptoProvider;
use crate::crypto::suites::{iv_prefix, CipherSuite};
use crate::error::{CryptoError, Result};
use aes::{Aes128, Aes256};
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::{FieldBytes, NistP256};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner};
use tracing::debug;

/// Concrete implementation of `CryptoProvider` for the conventional suite.
pub struct ConventionalSuite;

fn invalid_key_length(len: usize) -> CryptoError {
    CryptoError::SymmetricError(format!("key must be 16 or 32 bytes, got {}", len))
}

fn cipher_init_error(err: impl std::fmt::Display) -> CryptoError {
    CryptoError::SymmetricError(err.to_string())
}

/// Rebuilds an ECDSA signature from minimal big-endian `r` and `s`.
fn signature_from_components(r: &[u8], s: &[u8]) -> Option<Signature> {
    let r = left_pad(r, 32).ok()?;
    let s = left_pad(s, 32).ok()?;
    Signature::from_scalars(
        FieldBytes::clone_from_slice(&r),
        FieldBytes::clone_from_slice(&s),
    )
    .ok()
}

impl CryptoProvider for ConventionalSuite {
    fn suite() -> CipherSuite {
        CipherSuite::Conventional
    }

    fn encrypt(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let iv = iv_prefix(iv)?;
        let ciphertext = match key.len() {
            16 => cbc::Encryptor::<Aes128>::new_from_slices(key, iv)
                .map_err(cipher_init_error)?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            32 => cbc::Encryptor::<Aes256>::new_from_slices(key, iv)
                .map_err(cipher_init_error)?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            n => return Err(invalid_key_length(n)),
        };
        Ok(ciphertext)
    }

    fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let iv = iv_prefix(iv)?;
        let plaintext = match key.len() {
            16 => cbc::Decryptor::<Aes128>::new_from_slices(key, iv)
                .map_err(cipher_init_error)?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
            32 => cbc::Decryptor::<Aes256>::new_from_slices(key, iv)
                .map_err(cipher_init_error)?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
            n => return Err(invalid_key_length(n)),
        };
        plaintext.map_err(|_| CryptoError::PaddingError)
    }

    fn generate_keys() -> Result<(Vec<u8>, Vec<u8>)> {
        let keys = curve::generate_key_blobs::<NistP256>()?;
        debug!(target: "crypto::conventional", "Generated P-256 key pair");
        Ok(keys)
    }

    fn sign(message: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
        let secret = curve::secret_key_from_blob::<NistP256>(private_key)?;
        let signing_key = SigningKey::from(secret.to_nonzero_scalar());

        let digest = Sha256::digest(message);
        let signature: Signature = signing_key
            .sign_prehash_with_rng(&mut OsRng, &digest)
            .map_err(|e| CryptoError::CurveOperationError(e.to_string()))?;

        let (r, s) = signature.split_bytes();
        debug!(
            target: "crypto::conventional",
            message_len = message.len(),
            "ECDSA signature created"
        );
        encode_signature(trim_leading_zeros(&r), trim_leading_zeros(&s))
    }

    fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        let Ok((r, s)) = decode_signature(signature) else {
            return Ok(false);
        };
        let Ok((x, y)) = decode_public_key(public_key) else {
            return Ok(false);
        };

        let Ok(public) = curve::public_key_from_coordinates::<NistP256>(x, y) else {
            return Ok(false);
        };
        let Ok(verifying_key) = VerifyingKey::from_affine(*public.as_affine()) else {
            return Ok(false);
        };
        let Some(signature) = signature_from_components(r, s) else {
            return Ok(false);
        };

        let digest = Sha256::digest(message);
        Ok(verifying_key.verify_prehash(&digest, &signature).is_ok())
    }

    fn encrypt_asymmetric(plaintext: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
        let public = curve::public_key_from_blob::<NistP256>(public_key)?;
        ecies::encrypt(&public, plaintext)
    }

    fn decrypt_asymmetric(ciphertext: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
        let secret = curve::secret_key_from_blob::<NistP256>(private_key)?;
        ecies::decrypt(&secret, ciphertext)
    }
}
