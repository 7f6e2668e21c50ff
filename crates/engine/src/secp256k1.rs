//! secp256k1 capability implementations over the `k256` crate

use ecbridge_api::{
    EngineError, EngineResult, MessageDigest, Parity, PrivateKey, PublicKey, SharedSecret,
    Signature,
};
use ecbridge_common::SecretBuffer;
use ecbridge_params::{FIELD_ELEMENT_SIZE, POINT_UNCOMPRESSED_SIZE, SIGNATURE_SIZE};

use k256::{
    ecdh::diffie_hellman,
    ecdsa::{signature::hazmat::PrehashSigner, Signature as EcdsaSignature, SigningKey},
    elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint},
    AffinePoint, EncodedPoint, FieldBytes, SecretKey,
};

fn decode_point(point: &PublicKey) -> EngineResult<AffinePoint> {
    let x = FieldBytes::from_slice(point.x_bytes());
    let y = FieldBytes::from_slice(point.y_bytes());
    let encoded = EncodedPoint::from_affine_coordinates(x, y, false);
    let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
        .ok_or(EngineError::NotOnCurve)?;
    if affine == AffinePoint::IDENTITY {
        return Err(EngineError::Identity);
    }
    Ok(affine)
}

fn decode_scalar(scalar: &PrivateKey) -> EngineResult<SecretKey> {
    SecretKey::from_slice(scalar.expose_secret()).map_err(|_| EngineError::ScalarOutOfRange)
}

pub(crate) fn compress(point: &PublicKey) -> EngineResult<(Parity, [u8; FIELD_ELEMENT_SIZE])> {
    let affine = decode_point(point)?;
    let encoded = affine.to_encoded_point(true);
    let bytes = encoded.as_bytes();
    if bytes.len() != FIELD_ELEMENT_SIZE + 1 {
        return Err(EngineError::Failure("unexpected compressed encoding"));
    }
    let parity = Parity::from_tag(bytes[0]).ok_or(EngineError::Failure("unexpected sec1 tag"))?;
    let mut x = [0u8; FIELD_ELEMENT_SIZE];
    x.copy_from_slice(&bytes[1..]);
    Ok((parity, x))
}

pub(crate) fn shared_secret(scalar: &PrivateKey, point: &PublicKey) -> EngineResult<SharedSecret> {
    let secret = decode_scalar(scalar)?;
    let affine = decode_point(point)?;
    let shared = diffie_hellman(secret.to_nonzero_scalar(), &affine);
    let mut out = SecretBuffer::zeroed();
    out.as_mut_slice()
        .copy_from_slice(shared.raw_secret_bytes().as_slice());
    Ok(SharedSecret::new(out))
}

pub(crate) fn sign_digest(scalar: &PrivateKey, digest: &MessageDigest) -> EngineResult<Signature> {
    let secret = decode_scalar(scalar)?;
    let signing_key = SigningKey::from(&secret);
    let signature: EcdsaSignature = signing_key
        .sign_prehash(digest.as_ref())
        .map_err(|_| EngineError::Failure("deterministic signing failed"))?;
    let mut out = [0u8; SIGNATURE_SIZE];
    out.copy_from_slice(signature.to_bytes().as_slice());
    Ok(Signature::new(out))
}

pub(crate) fn compute_public_key(scalar: &PrivateKey) -> EngineResult<PublicKey> {
    let secret = decode_scalar(scalar)?;
    let encoded = secret.public_key().to_encoded_point(false);
    let bytes = encoded.as_bytes();
    if bytes.len() != POINT_UNCOMPRESSED_SIZE + 1 {
        return Err(EngineError::Failure("unexpected uncompressed encoding"));
    }
    let mut out = [0u8; POINT_UNCOMPRESSED_SIZE];
    out.copy_from_slice(&bytes[1..]);
    Ok(PublicKey::new(out))
}

pub(crate) fn validate_public_key(point: &PublicKey) -> EngineResult<()> {
    decode_point(point).map(|_| ())
}
