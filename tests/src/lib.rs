//! Shared helpers for ecbridge integration tests
//!
//! The decompression helpers deliberately bypass the facade and go straight
//! to the curve crates, so compression round-trips are checked against an
//! independent decoder.

use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};

/// Decompress a 33-byte SEC1 point on secp256k1 into raw X || Y.
pub fn decompress_secp256k1(compressed: &[u8]) -> [u8; 64] {
    let encoded = k256::EncodedPoint::from_bytes(compressed).expect("malformed sec1 bytes");
    let affine = Option::<k256::AffinePoint>::from(k256::AffinePoint::from_encoded_point(&encoded))
        .expect("point not on secp256k1");
    let uncompressed = affine.to_encoded_point(false);
    let mut out = [0u8; 64];
    out.copy_from_slice(&uncompressed.as_bytes()[1..]);
    out
}

/// Decompress a 33-byte SEC1 point on P-256 into raw X || Y.
pub fn decompress_p256(compressed: &[u8]) -> [u8; 64] {
    let encoded = p256::EncodedPoint::from_bytes(compressed).expect("malformed sec1 bytes");
    let affine = Option::<p256::AffinePoint>::from(p256::AffinePoint::from_encoded_point(&encoded))
        .expect("point not on P-256");
    let uncompressed = affine.to_encoded_point(false);
    let mut out = [0u8; 64];
    out.copy_from_slice(&uncompressed.as_bytes()[1..]);
    out
}

/// Clamp arbitrary bytes into a scalar both curves accept: clear the top
/// bit so the value is below either group order, and force it nonzero.
pub fn clamp_scalar(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 0x7F;
    bytes[31] |= 0x01;
    bytes
}
