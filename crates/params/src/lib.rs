//! Curve identifiers and parameter tables for the ecbridge facade
//!
//! All supported curves are 256-bit short-Weierstrass curves, so the wire
//! sizes coincide across the table. The selector codes are part of the
//! boundary contract with managed callers and must never be renumbered.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod registry;

pub use registry::{lookup, CurveParams, CURVES};

/// Size of a private scalar in bytes
pub const SCALAR_SIZE: usize = 32;

/// Size of a field element (curve coordinate) in bytes
pub const FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed public key in bytes (big-endian X || Y, no tag)
pub const POINT_UNCOMPRESSED_SIZE: usize = 2 * FIELD_ELEMENT_SIZE;

/// Size of a compressed public key in bytes (parity byte || big-endian X)
pub const POINT_COMPRESSED_SIZE: usize = FIELD_ELEMENT_SIZE + 1;

/// Size of a signature in bytes (big-endian R || S)
pub const SIGNATURE_SIZE: usize = 2 * SCALAR_SIZE;

/// Size of a message digest accepted for signing, in bytes
pub const MESSAGE_DIGEST_SIZE: usize = FIELD_ELEMENT_SIZE;

/// Size of an ECDH shared secret in bytes (big-endian X coordinate)
pub const SHARED_SECRET_SIZE: usize = FIELD_ELEMENT_SIZE;

/// Group order of NIST P-256, big-endian
pub const P256_ORDER: [u8; SCALAR_SIZE] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, 0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63,
    0x25, 0x51,
];

/// Group order of secp256k1, big-endian
pub const SECP256K1_ORDER: [u8; SCALAR_SIZE] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
    0x41, 0x41,
];

/// A supported curve, identified by its boundary selector code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Curve {
    /// NIST P-256 (secp256r1)
    P256 = 0,
    /// SECG secp256k1
    Secp256k1 = 1,
}

impl Curve {
    /// The selector code used by managed callers.
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Resolve a selector code to a curve.
    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(Curve::P256),
            1 => Some(Curve::Secp256k1),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Curve::P256 => "P-256",
            Curve::Secp256k1 => "secp256k1",
        }
    }

    /// The parameter entry for this curve.
    pub fn params(self) -> &'static CurveParams {
        match self {
            Curve::P256 => &registry::P256_PARAMS,
            Curve::Secp256k1 => &registry::SECP256K1_PARAMS,
        }
    }

    /// The big-endian group order of this curve.
    pub const fn order(self) -> &'static [u8; SCALAR_SIZE] {
        match self {
            Curve::P256 => &P256_ORDER,
            Curve::Secp256k1 => &SECP256K1_ORDER,
        }
    }
}
