// Crypt Core
// Dual-suite cryptography: SHA-2/AES/ECDSA and SM3/SM4/SM2 behind one contract

#![warn(clippy::all)]

// Модули
pub mod api;
pub mod config;
pub mod crypto;
pub mod error;
pub mod utils;

// Re-exports для удобства
pub use api::crypto::{Asymmetric, SuiteChoice, Symmetric};
pub use config::Config;
pub use crypto::{CipherSuite, ConventionalSuite, CryptoProvider, NationalSuite, SuiteHasher};
pub use error::{CryptoError, Result};
