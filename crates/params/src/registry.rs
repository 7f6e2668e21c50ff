//! Static registry mapping curve selectors to their parameters
//!
//! The table is fixed at build time. There is no dynamic registration, and
//! concurrent reads are always safe.

use crate::{Curve, FIELD_ELEMENT_SIZE, POINT_UNCOMPRESSED_SIZE, SCALAR_SIZE};

/// Parameters of a supported curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    pub curve: Curve,
    /// Byte length of a private scalar
    pub scalar_size: usize,
    /// Byte length of a field element (one coordinate)
    pub field_size: usize,
    /// Byte length of an uncompressed point (X || Y)
    pub point_size: usize,
}

pub static P256_PARAMS: CurveParams = CurveParams {
    curve: Curve::P256,
    scalar_size: SCALAR_SIZE,
    field_size: FIELD_ELEMENT_SIZE,
    point_size: POINT_UNCOMPRESSED_SIZE,
};

pub static SECP256K1_PARAMS: CurveParams = CurveParams {
    curve: Curve::Secp256k1,
    scalar_size: SCALAR_SIZE,
    field_size: FIELD_ELEMENT_SIZE,
    point_size: POINT_UNCOMPRESSED_SIZE,
};

/// Every supported curve, in selector order.
pub static CURVES: [&CurveParams; 2] = [&P256_PARAMS, &SECP256K1_PARAMS];

/// Resolve a boundary selector code to its parameter entry.
///
/// Returns `None` for selectors outside the fixed set; the facade maps that
/// to `Error::UnsupportedCurve` before touching any input buffer.
pub fn lookup(id: u32) -> Option<&'static CurveParams> {
    Curve::from_id(id).map(Curve::params)
}
