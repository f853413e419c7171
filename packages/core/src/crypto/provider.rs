//! Defines the CryptoProvider trait for crypto-agility.

use crate::crypto::hash::SuiteHasher;
use crate::crypto::suites::CipherSuite;
use crate::error::Result;

/// Trait that formalizes all cryptographic operations of a cipher suite.
///
/// Implemented by [`ConventionalSuite`](crate::crypto::suites::conventional::ConventionalSuite)
/// and [`NationalSuite`](crate::crypto::suites::national::NationalSuite). Every key,
/// signature and ciphertext crosses this boundary as raw bytes in the shared blob
/// layout (see [`codec`](crate::crypto::codec)); no parsed key object survives a call.
pub trait CryptoProvider: Send + Sync + 'static {
    /// Returns the tag identifying this suite.
    fn suite() -> CipherSuite;

    /// Creates a fresh streaming hash using this suite's digest.
    fn new_hash() -> SuiteHasher {
        SuiteHasher::for_suite(Self::suite())
    }

    /// Hashes all `parts` in order as one message.
    fn hash(parts: &[&[u8]]) -> Vec<u8> {
        let mut hasher = Self::new_hash();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize()
    }

    /// Symmetric CBC encryption.
    /// `key`: 16 or 32 bytes.
    /// `iv`: at least 16 bytes; only the first 16 are used.
    fn encrypt(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>>;

    /// Symmetric CBC decryption. Any padding failure is a uniform `PaddingError`.
    fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>>;

    /// Generates a key pair, returned as `(private blob, public blob)`.
    fn generate_keys() -> Result<(Vec<u8>, Vec<u8>)>;

    /// Signs a message with a private scalar blob.
    fn sign(message: &[u8], private_key: &[u8]) -> Result<Vec<u8>>;

    /// Verifies a signature blob against a public key blob.
    ///
    /// Never fails on attacker-controlled input: a blob with broken framing, a
    /// point off the curve and a mismatched signature are all `Ok(false)`.
    fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool>;

    /// Encrypts to a public key blob.
    fn encrypt_asymmetric(plaintext: &[u8], public_key: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts with a private scalar blob.
    fn decrypt_asymmetric(ciphertext: &[u8], private_key: &[u8]) -> Result<Vec<u8>>;
}
