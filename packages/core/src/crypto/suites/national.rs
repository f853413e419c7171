use crate::crypto::codec::{decode_public_key, decode_signature, encode_signature, left_pad, trim_leading_zeros};
use crate::crypto::curve;
use crate::crypto::padding;
use crate::crypto::provider::CryptoProvider;
use crate::crypto::selector::active_config;
use crate::crypto::sm2_pke;
use crate::crypto::suites::{iv_prefix, CipherSuite};
use crate::error::{CryptoError, Result};
use cbc::cipher::{block_padding::NoPadding, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use signature::{RandomizedSigner, Verifier};
use sm2::dsa::{Signature, SigningKey, VerifyingKey};
use sm2::Sm2;
use sm4::Sm4;
use tracing::debug;
use zeroize::Zeroizing;

const SM4_KEY_LEN: usize = 16;
const SCALAR_LEN: usize = 32;

/// Concrete implementation of `CryptoProvider` for the national suite.
///
/// SM4 runs unpadded in CBC mode; PKCS#7 is applied by [`padding`]. SM2
/// signatures bind the user id of the active configuration
/// ([`active_config`]), read on every call.
pub struct NationalSuite;

fn sm4_key(key: &[u8]) -> Result<&[u8]> {
    key.get(..SM4_KEY_LEN).ok_or_else(|| {
        CryptoError::SymmetricError(format!(
            "key must be at least {} bytes, got {}",
            SM4_KEY_LEN,
            key.len()
        ))
    })
}

/// Rebuilds an SM2 signature from minimal big-endian `r` and `s`.
fn signature_from_components(r: &[u8], s: &[u8]) -> Option<Signature> {
    let r = left_pad(r, SCALAR_LEN).ok()?;
    let s = left_pad(s, SCALAR_LEN).ok()?;

    let mut bytes = [0u8; 2 * SCALAR_LEN];
    bytes[..SCALAR_LEN].copy_from_slice(&r);
    bytes[SCALAR_LEN..].copy_from_slice(&s);
    Signature::from_bytes(&bytes).ok()
}

impl CryptoProvider for NationalSuite {
    fn suite() -> CipherSuite {
        CipherSuite::National
    }

    fn encrypt(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let key = sm4_key(key)?;
        let iv = iv_prefix(iv)?;

        let padded = Zeroizing::new(padding::pad(plaintext));
        let ciphertext = cbc::Encryptor::<Sm4>::new_from_slices(key, iv)
            .map_err(|e| CryptoError::SymmetricError(e.to_string()))?
            .encrypt_padded_vec_mut::<NoPadding>(&padded);
        Ok(ciphertext)
    }

    fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let key = sm4_key(key)?;
        let iv = iv_prefix(iv)?;

        // Невыровненный шифротекст даёт ту же ошибку заполнения
        let decrypted = Zeroizing::new(
            cbc::Decryptor::<Sm4>::new_from_slices(key, iv)
                .map_err(|e| CryptoError::SymmetricError(e.to_string()))?
                .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
                .map_err(|_| CryptoError::PaddingError)?,
        );
        Ok(padding::unpad(&decrypted)?.to_vec())
    }

    fn generate_keys() -> Result<(Vec<u8>, Vec<u8>)> {
        let keys = curve::generate_key_blobs::<Sm2>()?;
        debug!(target: "crypto::national", "Generated SM2 key pair");
        Ok(keys)
    }

    fn sign(message: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
        let secret = curve::secret_key_from_blob::<Sm2>(private_key)?;
        let config = active_config();
        let signing_key = SigningKey::new(&config.sm2_user_id, &secret)
            .map_err(|e| CryptoError::CurveOperationError(e.to_string()))?;

        let signature: Signature = signing_key
            .try_sign_with_rng(&mut OsRng, message)
            .map_err(|e| CryptoError::CurveOperationError(e.to_string()))?;

        let bytes = signature.to_bytes();
        let (r, s) = bytes.split_at(SCALAR_LEN);
        debug!(
            target: "crypto::national",
            message_len = message.len(),
            "SM2 signature created"
        );
        encode_signature(trim_leading_zeros(r), trim_leading_zeros(s))
    }

    fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        // Испорченный блоб подписи или ключа: просто не проходит проверку
        let Ok((r, s)) = decode_signature(signature) else {
            return Ok(false);
        };
        let Ok((x, y)) = decode_public_key(public_key) else {
            return Ok(false);
        };

        let Ok(public) = curve::public_key_from_coordinates::<Sm2>(x, y) else {
            return Ok(false);
        };
        let config = active_config();
        let Ok(verifying_key) = VerifyingKey::new(&config.sm2_user_id, public) else {
            return Ok(false);
        };
        let Some(signature) = signature_from_components(r, s) else {
            return Ok(false);
        };

        Ok(verifying_key.verify(message, &signature).is_ok())
    }

    fn encrypt_asymmetric(plaintext: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
        let public = curve::public_key_from_blob::<Sm2>(public_key)?;
        let ciphertext = sm2_pke::encrypt(&public, plaintext)?;

        debug!(
            target: "crypto::national",
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext.len(),
            "SM2 encrypt"
        );
        Ok(ciphertext)
    }

    fn decrypt_asymmetric(ciphertext: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
        let secret = curve::secret_key_from_blob::<Sm2>(private_key)?;
        sm2_pke::decrypt(&secret, ciphertext)
    }
}
