use thiserror::Error;

/// Единая таксономия ошибок криптографического ядра.
///
/// `PaddingError` and `DecryptionError` intentionally carry no detail: every
/// failure on a decryption path renders the same text regardless of which
/// check rejected the input or which suite was in use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid key format: {0}")]
    KeyFormatError(String),
    #[error("decryption failed")]
    PaddingError,
    #[error("Curve operation failed: {0}")]
    CurveOperationError(String),
    #[error("Randomness source failed: {0}")]
    RandomnessError(String),
    #[error("Symmetric cipher error: {0}")]
    SymmetricError(String),
    #[error("Asymmetric encryption failed: {0}")]
    EncryptionError(String),
    #[error("decryption failed")]
    DecryptionError,
    #[error("Encoding error: {0}")]
    EncodingError(String),
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<rand_core::Error> for CryptoError {
    fn from(err: rand_core::Error) -> Self {
        CryptoError::RandomnessError(err.to_string())
    }
}

impl From<hex::FromHexError> for CryptoError {
    fn from(err: hex::FromHexError) -> Self {
        CryptoError::EncodingError(format!("Hex decode failed: {}", err))
    }
}

impl From<base64::DecodeError> for CryptoError {
    fn from(err: base64::DecodeError) -> Self {
        CryptoError::EncodingError(format!("Base64 decode failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, CryptoError>;
