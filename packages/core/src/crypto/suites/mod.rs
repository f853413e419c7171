//! Криптографические наборы (Crypto Suites)
//!
//! Этот модуль содержит обе реализации CryptoProvider trait и тег
//! [`CipherSuite`] для выбора набора во время выполнения.
//!
//! ## Доступные наборы
//!
//! ### Conventional Suite
//! - **Hash**: SHA-512
//! - **Symmetric**: AES-128/256-CBC, PKCS#7
//! - **Signatures**: ECDSA P-256 over SHA-256(message)
//! - **Asymmetric encryption**: ECIES P-256 (AES-128-CTR + HMAC-SHA256)
//!
//! ### National Suite
//! - **Hash**: SM3
//! - **Symmetric**: SM4-CBC, PKCS#7
//! - **Signatures**: SM2 (Z_A with the configured user id)
//! - **Asymmetric encryption**: SM2 PKE, C1C3C2
//!
//! ## Выбор suite
//!
//! ```rust
//! use crypt_core::crypto::suites::{CipherSuite, national::NationalSuite};
//! use crypt_core::crypto::CryptoProvider;
//!
//! // Набор, зафиксированный на этапе компиляции
//! let (private_key, public_key) = NationalSuite::generate_keys()?;
//! let signature = NationalSuite::sign(b"hello", &private_key)?;
//!
//! // Тот же вызов через тег, выбранный во время выполнения
//! let suite = CipherSuite::from_mode("gm");
//! assert!(suite.verify(b"hello", &signature, &public_key)?);
//! # Ok::<(), crypt_core::CryptoError>(())
//! ```

pub mod conventional;
pub mod national;

use crate::crypto::hash::SuiteHasher;
use crate::crypto::provider::CryptoProvider;
use crate::error::{CryptoError, Result};
use conventional::ConventionalSuite;
use national::NationalSuite;
use std::fmt;
use std::str::FromStr;

/// Length of the IV prefix every CBC call uses.
pub(crate) const IV_LEN: usize = 16;

/// Returns the first 16 bytes of a caller-supplied IV.
pub(crate) fn iv_prefix(iv: &[u8]) -> Result<&[u8]> {
    iv.get(..IV_LEN).ok_or_else(|| {
        CryptoError::SymmetricError(format!(
            "IV must be at least {} bytes, got {}",
            IV_LEN,
            iv.len()
        ))
    })
}

/// Identifies which implementation backs a capability call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CipherSuite {
    /// SHA-2, AES-CBC, ECDSA P-256, ECIES
    #[default]
    Conventional,
    /// SM3, SM4-CBC, SM2
    National,
}

impl CipherSuite {
    /// Maps a configuration `mode` value to a suite.
    ///
    /// `gm`, `national` and `sm` (case-insensitive) select the national suite;
    /// every other value, including `cm` and the empty string, selects the
    /// conventional one.
    pub fn from_mode(mode: &str) -> Self {
        match mode.trim().to_ascii_lowercase().as_str() {
            "gm" | "national" | "sm" => CipherSuite::National,
            _ => CipherSuite::Conventional,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CipherSuite::Conventional => "conventional",
            CipherSuite::National => "national",
        }
    }

    pub fn new_hash(self) -> SuiteHasher {
        match self {
            CipherSuite::Conventional => ConventionalSuite::new_hash(),
            CipherSuite::National => NationalSuite::new_hash(),
        }
    }

    pub fn hash(self, parts: &[&[u8]]) -> Vec<u8> {
        match self {
            CipherSuite::Conventional => ConventionalSuite::hash(parts),
            CipherSuite::National => NationalSuite::hash(parts),
        }
    }

    pub fn encrypt(self, plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        match self {
            CipherSuite::Conventional => ConventionalSuite::encrypt(plaintext, key, iv),
            CipherSuite::National => NationalSuite::encrypt(plaintext, key, iv),
        }
    }

    pub fn decrypt(self, ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        match self {
            CipherSuite::Conventional => ConventionalSuite::decrypt(ciphertext, key, iv),
            CipherSuite::National => NationalSuite::decrypt(ciphertext, key, iv),
        }
    }

    pub fn generate_keys(self) -> Result<(Vec<u8>, Vec<u8>)> {
        match self {
            CipherSuite::Conventional => ConventionalSuite::generate_keys(),
            CipherSuite::National => NationalSuite::generate_keys(),
        }
    }

    pub fn sign(self, message: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
        match self {
            CipherSuite::Conventional => ConventionalSuite::sign(message, private_key),
            CipherSuite::National => NationalSuite::sign(message, private_key),
        }
    }

    pub fn verify(self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        match self {
            CipherSuite::Conventional => ConventionalSuite::verify(message, signature, public_key),
            CipherSuite::National => NationalSuite::verify(message, signature, public_key),
        }
    }

    pub fn encrypt_asymmetric(self, plaintext: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
        match self {
            CipherSuite::Conventional => ConventionalSuite::encrypt_asymmetric(plaintext, public_key),
            CipherSuite::National => NationalSuite::encrypt_asymmetric(plaintext, public_key),
        }
    }

    pub fn decrypt_asymmetric(self, ciphertext: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
        match self {
            CipherSuite::Conventional => {
                ConventionalSuite::decrypt_asymmetric(ciphertext, private_key)
            }
            CipherSuite::National => NationalSuite::decrypt_asymmetric(ciphertext, private_key),
        }
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict parsing, unlike [`CipherSuite::from_mode`]: unknown names are errors.
impl FromStr for CipherSuite {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conventional" | "cm" | "international" => Ok(CipherSuite::Conventional),
            "national" | "gm" | "sm" => Ok(CipherSuite::National),
            other => Err(CryptoError::ConfigError(format!("Unknown cipher suite: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mode() {
        assert_eq!(CipherSuite::from_mode("gm"), CipherSuite::National);
        assert_eq!(CipherSuite::from_mode(" GM "), CipherSuite::National);
        assert_eq!(CipherSuite::from_mode("national"), CipherSuite::National);
        assert_eq!(CipherSuite::from_mode("cm"), CipherSuite::Conventional);
        assert_eq!(CipherSuite::from_mode(""), CipherSuite::Conventional);
        assert_eq!(CipherSuite::from_mode("anything"), CipherSuite::Conventional);
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("gm".parse::<CipherSuite>().unwrap(), CipherSuite::National);
        assert_eq!(
            "Conventional".parse::<CipherSuite>().unwrap(),
            CipherSuite::Conventional
        );
        assert!("rot13".parse::<CipherSuite>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for suite in [CipherSuite::Conventional, CipherSuite::National] {
            assert_eq!(suite.to_string().parse::<CipherSuite>().unwrap(), suite);
        }
    }

    #[test]
    fn test_iv_prefix() {
        assert_eq!(iv_prefix(&[1u8; 32]).unwrap().len(), 16);
        assert!(matches!(
            iv_prefix(&[0u8; 15]),
            Err(CryptoError::SymmetricError(_))
        ));
    }

    #[test]
    fn test_dispatch_matches_provider() {
        let parts: [&[u8]; 2] = [b"ab", b"c"];
        assert_eq!(
            CipherSuite::National.hash(&parts),
            NationalSuite::hash(&[b"abc".as_slice()])
        );
        assert_eq!(
            CipherSuite::Conventional.new_hash().algorithm(),
            "SHA-512"
        );
    }
}
