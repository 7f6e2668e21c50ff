//! Software arithmetic engine for the ecbridge facade
//!
//! Implements the [`EcEngine`] capability by dispatching each call onto the
//! audited pure-Rust `p256` and `k256` arithmetic crates. Every call builds
//! its own curve objects; nothing is pooled or shared, so the engine is
//! freely usable from concurrent threads.

#![cfg_attr(not(feature = "std"), no_std)]

mod nistp256;
mod secp256k1;

use ecbridge_api::{
    EcEngine, EngineResult, MessageDigest, Parity, PrivateKey, PublicKey, SharedSecret, Signature,
};
use ecbridge_params::{Curve, FIELD_ELEMENT_SIZE};

/// Stateless engine over the RustCrypto curve implementations.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftwareEngine;

impl EcEngine for SoftwareEngine {
    fn compress(
        &self,
        point: &PublicKey,
        curve: Curve,
    ) -> EngineResult<(Parity, [u8; FIELD_ELEMENT_SIZE])> {
        match curve {
            Curve::P256 => nistp256::compress(point),
            Curve::Secp256k1 => secp256k1::compress(point),
        }
    }

    fn shared_secret(
        &self,
        scalar: &PrivateKey,
        point: &PublicKey,
        curve: Curve,
    ) -> EngineResult<SharedSecret> {
        match curve {
            Curve::P256 => nistp256::shared_secret(scalar, point),
            Curve::Secp256k1 => secp256k1::shared_secret(scalar, point),
        }
    }

    fn sign_digest(
        &self,
        scalar: &PrivateKey,
        digest: &MessageDigest,
        curve: Curve,
    ) -> EngineResult<Signature> {
        match curve {
            Curve::P256 => nistp256::sign_digest(scalar, digest),
            Curve::Secp256k1 => secp256k1::sign_digest(scalar, digest),
        }
    }

    fn compute_public_key(&self, scalar: &PrivateKey, curve: Curve) -> EngineResult<PublicKey> {
        match curve {
            Curve::P256 => nistp256::compute_public_key(scalar),
            Curve::Secp256k1 => secp256k1::compute_public_key(scalar),
        }
    }

    fn validate_public_key(&self, point: &PublicKey, curve: Curve) -> EngineResult<()> {
        match curve {
            Curve::P256 => nistp256::validate_public_key(point),
            Curve::Secp256k1 => secp256k1::validate_public_key(point),
        }
    }
}
