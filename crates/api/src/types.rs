//! Fixed-size wire types crossing the managed-caller boundary
//!
//! Every type here is a fixed-length buffer sized from the curve constants.
//! The `from_bytes` constructors are the only way caller bytes enter the
//! facade: they fail closed with `LengthMismatch` when the supplied length
//! differs from the expected one, and never copy a single byte otherwise.
//! Secret-bearing types are backed by [`SecretBuffer`] and are zeroized when
//! dropped, on success and failure paths alike.

use core::fmt;

use ecbridge_common::SecretBuffer;
use ecbridge_params::{
    FIELD_ELEMENT_SIZE, MESSAGE_DIGEST_SIZE, POINT_COMPRESSED_SIZE, POINT_UNCOMPRESSED_SIZE,
    SCALAR_SIZE, SHARED_SECRET_SIZE, SIGNATURE_SIZE,
};

use crate::error::{Error, Result};

fn fmt_hex(f: &mut fmt::Formatter<'_>, name: &str, bytes: &[u8]) -> fmt::Result {
    write!(f, "{}(", name)?;
    for byte in bytes {
        write!(f, "{:02x}", byte)?;
    }
    write!(f, ")")
}

/// Y-coordinate parity of a compressed point
///
/// Encoded as the leading wire byte: 0x02 for even, 0x03 for odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// The SEC1 tag byte for this parity.
    pub const fn tag(self) -> u8 {
        match self {
            Parity::Even => 0x02,
            Parity::Odd => 0x03,
        }
    }

    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x02 => Some(Parity::Even),
            0x03 => Some(Parity::Odd),
            _ => None,
        }
    }
}

/// Private scalar for a 256-bit curve
///
/// Classified secret: the adapter-owned copy lives in a [`SecretBuffer`]
/// and is overwritten with zeros when the value is dropped. Range validity
/// ([1, order - 1]) is the engine's judgement, not a property of this type.
#[derive(Debug, Clone)]
pub struct PrivateKey(SecretBuffer<SCALAR_SIZE>);

impl PrivateKey {
    pub const SIZE: usize = SCALAR_SIZE;

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(Error::LengthMismatch {
                context: "PrivateKey::from_bytes",
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        let mut buffer = SecretBuffer::zeroed();
        buffer.as_mut_slice().copy_from_slice(bytes);
        Ok(Self(buffer))
    }

    /// Borrow the raw scalar bytes. Handle with care; do not copy out of
    /// this slice into unmanaged memory.
    pub fn expose_secret(&self) -> &[u8] {
        self.0.as_slice()
    }
}

/// Uncompressed public key: big-endian X || Y, no SEC1 tag byte
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey([u8; POINT_UNCOMPRESSED_SIZE]);

impl PublicKey {
    pub const SIZE: usize = POINT_UNCOMPRESSED_SIZE;

    pub fn new(bytes: [u8; POINT_UNCOMPRESSED_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(Error::LengthMismatch {
                context: "PublicKey::from_bytes",
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        let mut out = [0u8; POINT_UNCOMPRESSED_SIZE];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8; POINT_UNCOMPRESSED_SIZE] {
        &self.0
    }

    /// The big-endian X coordinate half.
    pub fn x_bytes(&self) -> &[u8] {
        &self.0[..FIELD_ELEMENT_SIZE]
    }

    /// The big-endian Y coordinate half.
    pub fn y_bytes(&self) -> &[u8] {
        &self.0[FIELD_ELEMENT_SIZE..]
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex(f, "PublicKey", &self.0)
    }
}

/// Compressed public key: parity byte (0x02/0x03) || big-endian X
#[derive(Clone, PartialEq, Eq)]
pub struct CompressedPublicKey([u8; POINT_COMPRESSED_SIZE]);

impl CompressedPublicKey {
    pub const SIZE: usize = POINT_COMPRESSED_SIZE;

    pub fn from_parts(parity: Parity, x: &[u8; FIELD_ELEMENT_SIZE]) -> Self {
        let mut out = [0u8; POINT_COMPRESSED_SIZE];
        out[0] = parity.tag();
        out[1..].copy_from_slice(x);
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; POINT_COMPRESSED_SIZE] {
        &self.0
    }

    pub fn parity(&self) -> Parity {
        match Parity::from_tag(self.0[0]) {
            Some(parity) => parity,
            // Unreachable: construction goes through from_parts.
            None => Parity::Even,
        }
    }

    /// The big-endian X coordinate, without the parity byte.
    pub fn x_bytes(&self) -> &[u8] {
        &self.0[1..]
    }
}

impl AsRef<[u8]> for CompressedPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex(f, "CompressedPublicKey", &self.0)
    }
}

/// ECDH shared secret: the big-endian X coordinate of the product point
///
/// Classified secret; equality is constant-time and the buffer is zeroized
/// on drop. No KDF is applied, the raw coordinate is what callers receive.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(SecretBuffer<SHARED_SECRET_SIZE>);

impl SharedSecret {
    pub const SIZE: usize = SHARED_SECRET_SIZE;

    pub fn new(buffer: SecretBuffer<SHARED_SECRET_SIZE>) -> Self {
        Self(buffer)
    }

    /// Borrow the raw secret bytes. Handle with care.
    pub fn expose_secret(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret([REDACTED])")
    }
}

/// Pre-computed message digest supplied by the caller
///
/// The facade never hashes; the digest must already match the curve's
/// scalar size.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MessageDigest([u8; MESSAGE_DIGEST_SIZE]);

impl MessageDigest {
    pub const SIZE: usize = MESSAGE_DIGEST_SIZE;

    pub fn new(bytes: [u8; MESSAGE_DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(Error::LengthMismatch {
                context: "MessageDigest::from_bytes",
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        let mut out = [0u8; MESSAGE_DIGEST_SIZE];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8; MESSAGE_DIGEST_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for MessageDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for MessageDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex(f, "MessageDigest", &self.0)
    }
}

/// Signature: big-endian R || S, fixed width, no DER framing
#[derive(Clone, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_SIZE]);

impl Signature {
    pub const SIZE: usize = SIGNATURE_SIZE;

    pub fn new(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(Error::LengthMismatch {
                context: "Signature::from_bytes",
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        let mut out = [0u8; SIGNATURE_SIZE];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }

    pub fn r_bytes(&self) -> &[u8] {
        &self.0[..SCALAR_SIZE]
    }

    pub fn s_bytes(&self) -> &[u8] {
        &self.0[SCALAR_SIZE..]
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex(f, "Signature", &self.0)
    }
}
