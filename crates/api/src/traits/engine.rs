//! Arithmetic engine capability
//!
//! The facade performs no field or point arithmetic. Everything below the
//! byte boundary is delegated to an implementation of this trait; any
//! audited constant-time short-Weierstrass implementation can sit behind it.

use ecbridge_params::{Curve, FIELD_ELEMENT_SIZE};

use crate::error::EngineResult;
use crate::types::{MessageDigest, Parity, PrivateKey, PublicKey, SharedSecret, Signature};

/// The five arithmetic capabilities the facade requires.
///
/// Implementations must be stateless across calls: every invocation builds
/// or borrows an exclusively-owned scratch context, so concurrent calls from
/// multiple threads are safe without locking. Scratch copies of secret
/// inputs must be zeroized before each call returns, on every exit path.
pub trait EcEngine {
    /// Compress `point`, reporting the Y parity and the big-endian X
    /// coordinate.
    fn compress(
        &self,
        point: &PublicKey,
        curve: Curve,
    ) -> EngineResult<(Parity, [u8; FIELD_ELEMENT_SIZE])>;

    /// ECDH: the X coordinate of `scalar * point`.
    fn shared_secret(
        &self,
        scalar: &PrivateKey,
        point: &PublicKey,
        curve: Curve,
    ) -> EngineResult<SharedSecret>;

    /// Sign a pre-computed digest with deterministic nonce derivation.
    /// Identical inputs must produce identical signatures.
    fn sign_digest(
        &self,
        scalar: &PrivateKey,
        digest: &MessageDigest,
        curve: Curve,
    ) -> EngineResult<Signature>;

    /// Derive `scalar * G` as an uncompressed point.
    fn compute_public_key(&self, scalar: &PrivateKey, curve: Curve) -> EngineResult<PublicKey>;

    /// Check that `point` satisfies the curve equation and is not the
    /// identity element.
    fn validate_public_key(&self, point: &PublicKey, curve: Curve) -> EngineResult<()>;
}
