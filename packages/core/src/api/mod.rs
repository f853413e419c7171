// Публичный API криптографического ядра
// Высокоуровневые фасады поверх CryptoProvider

pub mod crypto;

pub use crypto::{Asymmetric, SuiteChoice, Symmetric};
