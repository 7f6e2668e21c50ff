//! # ecbridge
//!
//! A facade over short-Weierstrass elliptic-curve engines for managed
//! callers: fixed-size buffer marshalling, curve-parameterized dispatch,
//! canonical big-endian wire encoding, and guaranteed zeroization of secret
//! material crossing the boundary. The arithmetic itself is delegated to an
//! engine behind the [`api::EcEngine`] capability trait; the shipped
//! [`engine::SoftwareEngine`] uses the pure-Rust `k256`/`p256` crates.
//!
//! ## Operations
//!
//! Five boundary operations, each a pure function of its inputs and the
//! fixed curve table:
//!
//! - [`compress_public_key`] — parity byte plus big-endian X
//! - [`generate_shared_secret`] — raw ECDH X coordinate
//! - [`sign_message_digest`] — deterministic ECDSA over a caller-supplied digest
//! - [`compute_public_key`] — scalar times the base point
//! - [`verify_public_key`] — on-curve, non-identity check with a typed reason
//!
//! ## Crate Structure
//!
//! This is a facade crate over several sub-crates:
//!
//! - `ecbridge-params`: curve selectors, sizes and the registry
//! - `ecbridge-api`: error taxonomy, wire types, engine capability trait
//! - `ecbridge-common`: secret-buffer primitives
//! - `ecbridge-engine`: the software arithmetic engine

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports
pub use ecbridge_api as api;
pub use ecbridge_common as common;
pub use ecbridge_engine as engine;
pub use ecbridge_params as params;

mod facade;

pub use facade::{
    compress_public_key, compress_public_key_with, compute_public_key, compute_public_key_with,
    generate_shared_secret, generate_shared_secret_with, sign_message_digest,
    sign_message_digest_with, verify_public_key, verify_public_key_with,
};

/// Common imports for ecbridge users
pub mod prelude {
    pub use crate::api::{
        CompressedPublicKey, EcEngine, Error, MessageDigest, Parity, PrivateKey, PublicKey,
        Result, SharedSecret, Signature,
    };
    pub use crate::engine::SoftwareEngine;
    pub use crate::facade::{
        compress_public_key, compute_public_key, generate_shared_secret, sign_message_digest,
        verify_public_key,
    };
    pub use crate::params::{Curve, CurveParams};
}
