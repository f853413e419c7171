// Base64 и hex утилиты

use crate::error::{CryptoError, Result};

/// Interprets decoded bytes as UTF-8 text.
pub(crate) fn utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| CryptoError::EncodingError(e.to_string()))
}

/// Standard alphabet, padded.
pub mod b64 {
    use super::utf8;
    use crate::error::Result;
    use base64::{engine::general_purpose, Engine};

    pub fn encode(data: &str) -> String {
        encode_bytes(data.as_bytes())
    }

    pub fn encode_bytes(data: &[u8]) -> String {
        general_purpose::STANDARD.encode(data)
    }

    pub fn decode(data: &str) -> Result<String> {
        utf8(decode_bytes(data)?)
    }

    pub fn decode_bytes(data: &str) -> Result<Vec<u8>> {
        Ok(general_purpose::STANDARD.decode(data)?)
    }
}

/// URL-safe alphabet, padded.
pub mod url_b64 {
    use super::utf8;
    use crate::error::Result;
    use base64::{engine::general_purpose, Engine};

    pub fn encode(data: &str) -> String {
        encode_bytes(data.as_bytes())
    }

    pub fn encode_bytes(data: &[u8]) -> String {
        general_purpose::URL_SAFE.encode(data)
    }

    pub fn decode(data: &str) -> Result<String> {
        utf8(decode_bytes(data)?)
    }

    pub fn decode_bytes(data: &str) -> Result<Vec<u8>> {
        Ok(general_purpose::URL_SAFE.decode(data)?)
    }
}

/// Lowercase hex.
pub mod hex {
    use super::utf8;
    use crate::error::Result;

    pub fn encode(data: &str) -> String {
        encode_bytes(data.as_bytes())
    }

    pub fn encode_bytes(data: &[u8]) -> String {
        ::hex::encode(data)
    }

    pub fn decode(data: &str) -> Result<String> {
        utf8(decode_bytes(data)?)
    }

    pub fn decode_bytes(data: &str) -> Result<Vec<u8>> {
        Ok(::hex::decode(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b64_text() {
        assert_eq!(b64::encode("hello"), "aGVsbG8=");
        assert_eq!(b64::decode("aGVsbG8=").unwrap(), "hello");
    }

    #[test]
    fn test_url_b64_differs_from_standard() {
        let data = [0xfbu8, 0xff, 0xfe];
        assert_eq!(b64::encode_bytes(&data), "+//+");
        assert_eq!(url_b64::encode_bytes(&data), "-__-");
        assert_eq!(url_b64::decode_bytes("-__-").unwrap(), data);
        assert!(b64::decode_bytes("-__-").is_err());
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex::encode("ab"), "6162");
        assert_eq!(hex::decode("6162").unwrap(), "ab");
        assert!(matches!(
            hex::decode_bytes("xyz"),
            Err(CryptoError::EncodingError(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        assert!(matches!(
            hex::decode("ff"),
            Err(CryptoError::EncodingError(_))
        ));
    }
}
