//! Криптографический модуль
//!
//! # Архитектура
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │               Facades (api::crypto)                         │
//! │  - Symmetric / Asymmetric, hex и байтовые варианты          │
//! │  - SuiteChoice: фиксированный набор или набор по умолчанию  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                ┌─────────────┴─────────────┐
//!                ▼                           ▼
//! ┌───────────────────────────┐  ┌──────────────────────────┐
//! │   selector                │  │  CipherSuite (tag)       │
//! │  - активная конфигурация  │──▶  - диспетчеризация        │
//! │  - горячая замена         │  │    во время выполнения   │
//! └───────────────────────────┘  └──────────────────────────┘
//!                                            │
//!                              ┌─────────────┴─────────────┐
//!                              ▼                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              CryptoProvider (Crypto-Agility)                │
//! │  - ConventionalSuite: SHA-512, AES-CBC, ECDSA P-256, ECIES  │
//! │  - NationalSuite: SM3, SM4-CBC, SM2                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  codec (key/signature blobs), padding (PKCS#7), curve       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Модули
//!
//! ### Core Traits
//! - [`provider`]: CryptoProvider trait для crypto-agility
//!
//! ### Implementations
//! - [`suites`]: Реализации CryptoProvider (Conventional, National) и тег `CipherSuite`
//! - [`ecies`]: асимметричное шифрование на P-256
//! - [`sm2_pke`]: асимметричное шифрование SM2 (C1C3C2)
//! - [`selector`]: набор по умолчанию для всего процесса
//!
//! ### Utilities
//! - [`codec`]: формат ключей и подписей
//! - [`padding`]: PKCS#7
//! - [`curve`]: преобразование blob <-> ключи эллиптических кривых
//! - [`hash`]: потоковый хеш набора

// ============================================================================
// Core Traits
// ============================================================================

/// CryptoProvider trait для crypto-agility
pub mod provider;

// ============================================================================
// Implementations
// ============================================================================

/// Conventional and national suites
pub mod suites;

pub mod ecies;
pub mod sm2_pke;

/// Default suite for calls that do not pin one
pub mod selector;

// ============================================================================
// Utilities
// ============================================================================

pub mod codec;
pub mod curve;
pub mod hash;
pub mod padding;

// ============================================================================
// Re-exports
// ============================================================================

pub use hash::SuiteHasher;
pub use provider::CryptoProvider;
pub use selector::{active_config, configure, default_suite, set_default_suite};
pub use suites::conventional::ConventionalSuite;
pub use suites::national::NationalSuite;
pub use suites::CipherSuite;
