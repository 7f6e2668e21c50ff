//! The five boundary operations
//!
//! Every operation has the same shape: resolve the curve selector, import
//! the caller's bytes through the length-checked wire types, call the engine
//! capability, map its status onto the error taxonomy, and encode the typed
//! output. Adapter failures short-circuit before the engine is reached, so
//! no secret byte is ever handed to the engine on a malformed request, and
//! failures never come with partial output.
//!
//! The plain functions run on the shipped [`SoftwareEngine`]; the `_with`
//! variants accept any [`EcEngine`] implementation.

use ecbridge_api::{
    CompressedPublicKey, EcEngine, Error, MessageDigest, PrivateKey, PublicKey, Result,
    SharedSecret, Signature,
};
use ecbridge_engine::SoftwareEngine;
use ecbridge_params::{registry, Curve};

fn curve_for(id: u32) -> Result<Curve> {
    registry::lookup(id)
        .map(|params| params.curve)
        .ok_or(Error::UnsupportedCurve { id })
}

/// Compress an uncompressed public key into parity byte plus X coordinate.
pub fn compress_public_key(public_key: &[u8], curve_id: u32) -> Result<CompressedPublicKey> {
    compress_public_key_with(&SoftwareEngine, public_key, curve_id)
}

pub fn compress_public_key_with<E: EcEngine>(
    engine: &E,
    public_key: &[u8],
    curve_id: u32,
) -> Result<CompressedPublicKey> {
    let curve = curve_for(curve_id)?;
    let point = PublicKey::from_bytes(public_key)?;
    let (parity, x) = engine
        .compress(&point, curve)
        .map_err(|e| e.into_error("compress_public_key"))?;
    Ok(CompressedPublicKey::from_parts(parity, &x))
}

/// Derive the ECDH shared secret `private_key * public_key`.
///
/// The output is the raw big-endian X coordinate of the product point; no
/// KDF is applied.
pub fn generate_shared_secret(
    private_key: &[u8],
    public_key: &[u8],
    curve_id: u32,
) -> Result<SharedSecret> {
    generate_shared_secret_with(&SoftwareEngine, private_key, public_key, curve_id)
}

pub fn generate_shared_secret_with<E: EcEngine>(
    engine: &E,
    private_key: &[u8],
    public_key: &[u8],
    curve_id: u32,
) -> Result<SharedSecret> {
    let curve = curve_for(curve_id)?;
    let point = PublicKey::from_bytes(public_key)?;
    let scalar = PrivateKey::from_bytes(private_key)?;
    engine
        .shared_secret(&scalar, &point, curve)
        .map_err(|e| e.into_error("generate_shared_secret"))
}

/// Sign a pre-computed message digest.
///
/// Nonce derivation is deterministic and lives entirely inside the engine;
/// identical inputs produce identical signatures.
pub fn sign_message_digest(
    private_key: &[u8],
    digest: &[u8],
    curve_id: u32,
) -> Result<Signature> {
    sign_message_digest_with(&SoftwareEngine, private_key, digest, curve_id)
}

pub fn sign_message_digest_with<E: EcEngine>(
    engine: &E,
    private_key: &[u8],
    digest: &[u8],
    curve_id: u32,
) -> Result<Signature> {
    let curve = curve_for(curve_id)?;
    let digest = MessageDigest::from_bytes(digest)?;
    let scalar = PrivateKey::from_bytes(private_key)?;
    engine
        .sign_digest(&scalar, &digest, curve)
        .map_err(|e| e.into_error("sign_message_digest"))
}

/// Derive the uncompressed public key for a private scalar.
pub fn compute_public_key(private_key: &[u8], curve_id: u32) -> Result<PublicKey> {
    compute_public_key_with(&SoftwareEngine, private_key, curve_id)
}

pub fn compute_public_key_with<E: EcEngine>(
    engine: &E,
    private_key: &[u8],
    curve_id: u32,
) -> Result<PublicKey> {
    let curve = curve_for(curve_id)?;
    let scalar = PrivateKey::from_bytes(private_key)?;
    engine
        .compute_public_key(&scalar, curve)
        .map_err(|e| e.into_error("compute_public_key"))
}

/// Check that a public key lies on the curve and is not the identity.
///
/// Success is `Ok(())`; failures carry the specific reason so callers can
/// make key-rejection decisions on it.
pub fn verify_public_key(public_key: &[u8], curve_id: u32) -> Result<()> {
    verify_public_key_with(&SoftwareEngine, public_key, curve_id)
}

pub fn verify_public_key_with<E: EcEngine>(
    engine: &E,
    public_key: &[u8],
    curve_id: u32,
) -> Result<()> {
    let curve = curve_for(curve_id)?;
    let point = PublicKey::from_bytes(public_key)?;
    engine
        .validate_public_key(&point, curve)
        .map_err(|e| e.into_error("verify_public_key"))
}
