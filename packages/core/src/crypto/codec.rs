//! Байтовый формат ключей и подписей, общий для обоих наборов.
//!
//! ```text
//! PublicKeyBlob : [len(X): 1 byte][X][Y]
//! SignatureBlob : [len(R): 1 byte][R][S]
//! ```
//!
//! The second component has no length prefix: it is whatever follows the first
//! one. Components are minimal big-endian integers, so both lengths may be
//! shorter than the curve's field size.

use crate::error::{CryptoError, Result};

/// Largest first component the one-byte length prefix can describe.
pub const MAX_COMPONENT_LEN: usize = u8::MAX as usize;

/// Encodes a pair of big-endian integers as `[len(first)][first][second]`.
///
/// Fails with `KeyFormatError` when `first` does not fit the one-byte prefix;
/// the component is never truncated.
pub fn encode_pair(first: &[u8], second: &[u8]) -> Result<Vec<u8>> {
    let len = u8::try_from(first.len()).map_err(|_| {
        CryptoError::KeyFormatError(format!(
            "first component is {} bytes, at most {} can be encoded",
            first.len(),
            MAX_COMPONENT_LEN
        ))
    })?;

    let mut buf = Vec::with_capacity(1 + first.len() + second.len());
    buf.push(len);
    buf.extend_from_slice(first);
    buf.extend_from_slice(second);
    Ok(buf)
}

/// Splits `[len][first][second]` without copying.
///
/// Bounds are validated before any slicing: an empty buffer or a length byte
/// that runs past the end of the buffer is a `KeyFormatError`.
pub fn decode_pair(buf: &[u8]) -> Result<(&[u8], &[u8])> {
    let (&len, rest) = buf
        .split_first()
        .ok_or_else(|| CryptoError::KeyFormatError("empty buffer".to_string()))?;

    let len = usize::from(len);
    if len > rest.len() {
        return Err(CryptoError::KeyFormatError(format!(
            "declared length {} exceeds remaining {} bytes",
            len,
            rest.len()
        )));
    }

    Ok(rest.split_at(len))
}

/// Encodes a public point `(X, Y)`.
pub fn encode_public_key(x: &[u8], y: &[u8]) -> Result<Vec<u8>> {
    encode_pair(x, y)
}

/// Decodes a public key blob into `(X, Y)`.
pub fn decode_public_key(buf: &[u8]) -> Result<(&[u8], &[u8])> {
    decode_pair(buf)
}

/// Encodes a signature `(R, S)`.
pub fn encode_signature(r: &[u8], s: &[u8]) -> Result<Vec<u8>> {
    encode_pair(r, s)
}

/// Decodes a signature blob into `(R, S)`.
pub fn decode_signature(buf: &[u8]) -> Result<(&[u8], &[u8])> {
    decode_pair(buf)
}

/// Strips leading zero bytes, giving the minimal big-endian form of an integer.
pub fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Left-pads a big-endian integer to exactly `width` bytes.
///
/// Leading zeros in the input are ignored; anything still wider than `width`
/// is a `KeyFormatError`.
pub fn left_pad(bytes: &[u8], width: usize) -> Result<Vec<u8>> {
    let trimmed = trim_leading_zeros(bytes);
    if trimmed.len() > width {
        return Err(CryptoError::KeyFormatError(format!(
            "integer is {} bytes, field size is {}",
            trimmed.len(),
            width
        )));
    }

    let mut out = vec![0u8; width];
    out[width - trimmed.len()..].copy_from_slice(trimmed);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let blob = encode_public_key(&[1, 2, 3], &[4, 5]).unwrap();
        assert_eq!(blob, vec![3, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_decode_roundtrip_uneven_lengths() {
        let x = vec![0xAA; 31];
        let y = vec![0xBB; 32];
        let blob = encode_public_key(&x, &y).unwrap();
        let (dx, dy) = decode_public_key(&blob).unwrap();
        assert_eq!(dx, &x[..]);
        assert_eq!(dy, &y[..]);
    }

    #[test]
    fn test_first_component_too_long() {
        let x = vec![1u8; 256];
        assert!(matches!(
            encode_pair(&x, &[]),
            Err(CryptoError::KeyFormatError(_))
        ));
        assert!(encode_pair(&x[..255], &[]).is_ok());
    }

    #[test]
    fn test_decode_empty_buffer() {
        assert!(matches!(
            decode_public_key(&[]),
            Err(CryptoError::KeyFormatError(_))
        ));
        assert!(matches!(
            decode_signature(&[]),
            Err(CryptoError::KeyFormatError(_))
        ));
    }

    #[test]
    fn test_decode_length_past_end() {
        // Claims 5 bytes of X with only 3 bytes following.
        let buf = [5u8, 1, 2, 3];
        assert!(matches!(
            decode_public_key(&buf),
            Err(CryptoError::KeyFormatError(_))
        ));
        assert!(matches!(
            decode_signature(&[255u8]),
            Err(CryptoError::KeyFormatError(_))
        ));
    }

    #[test]
    fn test_decode_boundaries() {
        // Length byte consumes everything: Y is empty.
        let (x, y) = decode_pair(&[2u8, 7, 8]).unwrap();
        assert_eq!(x, &[7, 8]);
        assert!(y.is_empty());

        let (x, y) = decode_pair(&[0u8]).unwrap();
        assert!(x.is_empty());
        assert!(y.is_empty());
    }

    #[test]
    fn test_left_pad() {
        assert_eq!(left_pad(&[1, 2], 4).unwrap(), vec![0, 0, 1, 2]);
        assert_eq!(left_pad(&[0, 0, 0, 0, 9], 4).unwrap(), vec![0, 0, 0, 9]);
        assert!(left_pad(&[1, 2, 3, 4, 5], 4).is_err());
        assert_eq!(trim_leading_zeros(&[0, 0, 3]), &[3]);
        assert!(trim_leading_zeros(&[0, 0]).is_empty());
    }
}
