//! PKCS#7 padding for the national symmetric path.
//!
//! The cipher itself runs without padding; this module adds and removes it.

use crate::error::{CryptoError, Result};
use subtle::{ConstantTimeEq, ConstantTimeGreater};

/// Block size of every block cipher used by this crate.
pub const BLOCK_SIZE: usize = 16;

/// Appends `n` bytes of value `n`, `n = 16 - len % 16`.
///
/// Block-aligned input still receives a full block of padding.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let n = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut out = Vec::with_capacity(data.len() + n);
    out.extend_from_slice(data);
    // n is in 1..=16
    out.resize(data.len() + n, n as u8);
    out
}

/// Validates and strips PKCS#7 padding.
///
/// Every malformed case (empty input, pad length 0 or above the block size,
/// pad length past the buffer, inconsistent pad bytes) produces the same
/// `PaddingError`. The whole final block is inspected so the work done does
/// not depend on which check fails.
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    let Some(&n) = data.last() else {
        return Err(CryptoError::PaddingError);
    };

    let window = &data[data.len().saturating_sub(BLOCK_SIZE)..];

    let mut valid = !n.ct_eq(&0);
    valid &= !n.ct_gt(&(BLOCK_SIZE as u8));
    // window is at most one block, so this also bounds n by data.len()
    valid &= !n.ct_gt(&(window.len() as u8));

    // Byte i (counted from the end, 1-based) belongs to the padding when i <= n.
    for (i, &b) in window.iter().rev().enumerate() {
        let position = (i + 1) as u8;
        let in_padding = !position.ct_gt(&n);
        let matches = b.ct_eq(&n);
        valid &= !in_padding | matches;
    }

    if bool::from(valid) {
        Ok(&data[..data.len() - usize::from(n)])
    } else {
        Err(CryptoError::PaddingError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_lengths() {
        assert_eq!(pad(b"").len(), 16);
        assert_eq!(pad(b"test"), [b"test".as_slice(), &[12u8; 12]].concat());
        assert_eq!(pad(&[0u8; 15]).len(), 16);
        // Aligned input grows by a whole block.
        let aligned = [7u8; 32];
        let padded = pad(&aligned);
        assert_eq!(padded.len(), 48);
        assert!(padded[32..].iter().all(|&b| b == 16));
    }

    #[test]
    fn test_unpad_roundtrip() {
        for len in 0..40 {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let padded = pad(&data);
            assert_eq!(unpad(&padded).unwrap(), &data[..]);
        }
    }

    #[test]
    fn test_unpad_rejects_zero_and_oversized() {
        let mut block = [1u8; 16];
        block[15] = 0;
        assert_eq!(unpad(&block), Err(CryptoError::PaddingError));

        block[15] = 17;
        assert_eq!(unpad(&block), Err(CryptoError::PaddingError));

        block[15] = 0xFF;
        assert_eq!(unpad(&block), Err(CryptoError::PaddingError));
    }

    #[test]
    fn test_unpad_rejects_short_and_empty() {
        assert_eq!(unpad(&[]), Err(CryptoError::PaddingError));
        // A pad length larger than the buffer must not underflow.
        assert_eq!(unpad(&[4u8, 4, 4]), Err(CryptoError::PaddingError));
    }

    #[test]
    fn test_unpad_rejects_inconsistent_bytes() {
        let mut padded = pad(b"hello");
        let len = padded.len();
        padded[len - 3] ^= 0x01;
        assert_eq!(unpad(&padded), Err(CryptoError::PaddingError));
    }

    #[test]
    fn test_full_padding_block() {
        let padded = [16u8; 16];
        assert_eq!(unpad(&padded).unwrap(), &[] as &[u8]);
    }
}
