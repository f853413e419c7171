//! Фасады для вызывающего кода
//!
//! Каждый фасад либо закреплён за набором, либо следует за набором по
//! умолчанию (`SuiteChoice::Default`), который перечитывается при каждом вызове.
//! Строковые методы принимают и возвращают hex; `*_bytes` работают с байтами.

use crate::crypto::hash::SuiteHasher;
use crate::crypto::selector;
use crate::crypto::suites::CipherSuite;
use crate::error::Result;
use crate::utils::encoding::utf8;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use sm3::Sm3;

/// Which suite a facade routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuiteChoice {
    Pinned(CipherSuite),
    /// Resolved through the selector on every call
    #[default]
    Default,
}

impl SuiteChoice {
    pub fn resolve(self) -> CipherSuite {
        match self {
            SuiteChoice::Pinned(suite) => suite,
            SuiteChoice::Default => selector::default_suite(),
        }
    }
}

/// Symmetric CBC encryption (AES or SM4).
#[derive(Debug, Clone, Copy)]
pub struct Symmetric {
    choice: SuiteChoice,
}

impl Symmetric {
    pub fn new(choice: SuiteChoice) -> Self {
        Self { choice }
    }

    pub fn aes() -> Self {
        Self::new(SuiteChoice::Pinned(CipherSuite::Conventional))
    }

    pub fn sm4() -> Self {
        Self::new(SuiteChoice::Pinned(CipherSuite::National))
    }

    pub fn configured() -> Self {
        Self::new(SuiteChoice::Default)
    }

    pub fn suite(&self) -> CipherSuite {
        self.choice.resolve()
    }

    /// Encrypts UTF-8 text. `key_hex` and `iv_hex` are hex-encoded; returns hex.
    pub fn encrypt(&self, data: &str, key_hex: &str, iv_hex: &str) -> Result<String> {
        let key = hex::decode(key_hex)?;
        let iv = hex::decode(iv_hex)?;
        Ok(hex::encode(self.encrypt_bytes(data.as_bytes(), &key, &iv)?))
    }

    pub fn encrypt_bytes(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.suite().encrypt(data, key, iv)
    }

    /// Decrypts hex ciphertext back to UTF-8 text.
    pub fn decrypt(&self, data_hex: &str, key_hex: &str, iv_hex: &str) -> Result<String> {
        let key = hex::decode(key_hex)?;
        let iv = hex::decode(iv_hex)?;
        let data = hex::decode(data_hex)?;
        utf8(self.decrypt_bytes(&data, &key, &iv)?)
    }

    pub fn decrypt_bytes(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.suite().decrypt(data, key, iv)
    }
}

/// Key generation, signatures and public-key encryption (ECDSA/ECIES or SM2).
#[derive(Debug, Clone, Copy)]
pub struct Asymmetric {
    choice: SuiteChoice,
}

impl Asymmetric {
    pub fn new(choice: SuiteChoice) -> Self {
        Self { choice }
    }

    pub fn ecdsa() -> Self {
        Self::new(SuiteChoice::Pinned(CipherSuite::Conventional))
    }

    pub fn sm2() -> Self {
        Self::new(SuiteChoice::Pinned(CipherSuite::National))
    }

    pub fn configured() -> Self {
        Self::new(SuiteChoice::Default)
    }

    pub fn suite(&self) -> CipherSuite {
        self.choice.resolve()
    }

    /// Returns `(private_hex, public_hex)`.
    pub fn gen_key(&self) -> Result<(String, String)> {
        let (private_key, public_key) = self.gen_key_bytes()?;
        Ok((hex::encode(private_key), hex::encode(public_key)))
    }

    pub fn gen_key_bytes(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        self.suite().generate_keys()
    }

    pub fn sign(&self, data: &str, private_key_hex: &str) -> Result<String> {
        let private_key = hex::decode(private_key_hex)?;
        Ok(hex::encode(self.sign_bytes(data.as_bytes(), &private_key)?))
    }

    pub fn sign_bytes(&self, data: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
        self.suite().sign(data, private_key)
    }

    pub fn verify(&self, data: &str, signature_hex: &str, public_key_hex: &str) -> Result<bool> {
        let signature = hex::decode(signature_hex)?;
        let public_key = hex::decode(public_key_hex)?;
        self.verify_bytes(data.as_bytes(), &signature, &public_key)
    }

    pub fn verify_bytes(&self, data: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        self.suite().verify(data, signature, public_key)
    }

    pub fn encrypt(&self, data: &str, public_key_hex: &str) -> Result<String> {
        let public_key = hex::decode(public_key_hex)?;
        Ok(hex::encode(self.encrypt_bytes(data.as_bytes(), &public_key)?))
    }

    pub fn encrypt_bytes(&self, data: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
        self.suite().encrypt_asymmetric(data, public_key)
    }

    pub fn decrypt(&self, data_hex: &str, private_key_hex: &str) -> Result<String> {
        let data = hex::decode(data_hex)?;
        let private_key = hex::decode(private_key_hex)?;
        utf8(self.decrypt_bytes(&data, &private_key)?)
    }

    pub fn decrypt_bytes(&self, data: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
        self.suite().decrypt_asymmetric(data, private_key)
    }
}

// ============================================================================
// Digest helpers
// ============================================================================

pub fn sha256(data: &[u8]) -> Vec<u8> {
    Sha256::digest(data).to_vec()
}

pub fn sha256_hex(data: &str) -> String {
    hex::encode(sha256(data.as_bytes()))
}

pub fn sha512(data: &[u8]) -> Vec<u8> {
    Sha512::digest(data).to_vec()
}

pub fn sha512_hex(data: &str) -> String {
    hex::encode(sha512(data.as_bytes()))
}

pub fn sm3(data: &[u8]) -> Vec<u8> {
    Sm3::digest(data).to_vec()
}

pub fn sm3_hex(data: &str) -> String {
    hex::encode(sm3(data.as_bytes()))
}

pub fn md5(data: &[u8]) -> Vec<u8> {
    Md5::digest(data).to_vec()
}

pub fn md5_hex(data: &str) -> String {
    hex::encode(md5(data.as_bytes()))
}

pub fn sha1(data: &[u8]) -> Vec<u8> {
    Sha1::digest(data).to_vec()
}

pub fn sha1_hex(data: &str) -> String {
    hex::encode(sha1(data.as_bytes()))
}

/// Digest with the current default suite.
pub fn hash(data: &[u8]) -> Vec<u8> {
    selector::default_suite().hash(&[data])
}

pub fn hash_hex(data: &str) -> String {
    hex::encode(hash(data.as_bytes()))
}

/// Streaming hash bound to the default suite at creation time.
pub fn new_hash() -> SuiteHasher {
    selector::default_suite().new_hash()
}

pub fn new_md5() -> SuiteHasher {
    SuiteHasher::new_md5()
}

pub fn new_sha1() -> SuiteHasher {
    SuiteHasher::new_sha1()
}

pub fn new_sha256() -> SuiteHasher {
    SuiteHasher::new_sha256()
}

pub fn new_sha512() -> SuiteHasher {
    SuiteHasher::new_sha512()
}

pub fn new_sm3() -> SuiteHasher {
    SuiteHasher::new_sm3()
}
