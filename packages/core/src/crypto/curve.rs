//! Мост между байтовыми блобами и типами `elliptic_curve`.
//!
//! Both suites run on `elliptic_curve` 0.13 curves (`NistP256`, `Sm2`), so the
//! scalar and point conversions are written once, generically.

use crate::crypto::codec::{decode_public_key, encode_public_key, left_pad, trim_leading_zeros};
use crate::error::{CryptoError, Result};
use elliptic_curve::{
    generic_array::typenum::Unsigned,
    sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint},
    AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, PublicKey, SecretKey,
};
use rand::rngs::OsRng;
use rand_core::RngCore;
use zeroize::Zeroizing;

/// Upper bound on rejection-sampling rounds before the entropy source is
/// considered broken. For both curves a round fails with probability < 2^-32.
const MAX_SAMPLING_ROUNDS: usize = 64;

/// Width in bytes of a field element (and scalar) of `C`.
pub fn field_size<C: CurveArithmetic>() -> usize {
    <FieldBytesSize<C> as Unsigned>::USIZE
}

fn field_bytes<C: CurveArithmetic>(bytes: &[u8]) -> Result<FieldBytes<C>> {
    let padded = left_pad(bytes, field_size::<C>())?;
    Ok(FieldBytes::<C>::clone_from_slice(&padded))
}

/// Draws a uniformly random private scalar in `[1, n-1]`.
pub fn random_secret_key<C: CurveArithmetic>() -> Result<SecretKey<C>> {
    let mut buf = Zeroizing::new(vec![0u8; field_size::<C>()]);
    for _ in 0..MAX_SAMPLING_ROUNDS {
        OsRng.try_fill_bytes(buf.as_mut_slice())?;
        if let Ok(secret) = SecretKey::<C>::from_slice(&buf) {
            return Ok(secret);
        }
    }
    Err(CryptoError::RandomnessError(
        "no valid scalar produced by the entropy source".to_string(),
    ))
}

/// Parses a raw big-endian private scalar blob.
pub fn secret_key_from_blob<C: CurveArithmetic>(blob: &[u8]) -> Result<SecretKey<C>> {
    if blob.is_empty() {
        return Err(CryptoError::KeyFormatError("empty private key".to_string()));
    }
    let padded = Zeroizing::new(left_pad(blob, field_size::<C>())?);
    SecretKey::<C>::from_slice(&padded).map_err(|_| {
        CryptoError::CurveOperationError("private scalar is outside [1, n-1]".to_string())
    })
}

/// Serializes a private scalar as minimal big-endian bytes.
pub fn secret_key_to_blob<C: CurveArithmetic>(secret: &SecretKey<C>) -> Vec<u8> {
    let bytes = Zeroizing::new(secret.to_bytes());
    trim_leading_zeros(&bytes).to_vec()
}

/// Builds a public key from affine coordinates, checking the point is on the curve.
pub fn public_key_from_coordinates<C>(x: &[u8], y: &[u8]) -> Result<PublicKey<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let x = field_bytes::<C>(x)?;
    let y = field_bytes::<C>(y)?;
    let point = EncodedPoint::<C>::from_affine_coordinates(&x, &y, false);

    Option::from(PublicKey::<C>::from_encoded_point(&point)).ok_or_else(|| {
        CryptoError::CurveOperationError("point is not on the curve".to_string())
    })
}

/// Decodes a `[len(X)][X][Y]` blob into a validated public key.
pub fn public_key_from_blob<C>(blob: &[u8]) -> Result<PublicKey<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let (x, y) = decode_public_key(blob)?;
    public_key_from_coordinates::<C>(x, y)
}

/// Encodes a public key as `[len(X)][X][Y]` with minimal big-endian coordinates.
pub fn public_key_to_blob<C>(public: &PublicKey<C>) -> Result<Vec<u8>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let point = public.to_encoded_point(false);
    match (point.x(), point.y()) {
        (Some(x), Some(y)) => encode_public_key(trim_leading_zeros(x), trim_leading_zeros(y)),
        _ => Err(CryptoError::CurveOperationError(
            "public key is the identity point".to_string(),
        )),
    }
}

/// Generates a key pair and returns `(private blob, public blob)`.
pub fn generate_key_blobs<C>() -> Result<(Vec<u8>, Vec<u8>)>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = random_secret_key::<C>()?;
    let public = public_key_to_blob(&secret.public_key())?;
    Ok((secret_key_to_blob(&secret), public))
}
