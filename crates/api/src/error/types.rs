//! Error type definitions for boundary operations

use core::fmt;

/// Primary error type for boundary operations
///
/// Adapter-level failures (`LengthMismatch`, `UnsupportedCurve`) are raised
/// before any engine call; the remaining kinds classify engine rejections.
/// Callers receive the specific kind, never a bare boolean, so upstream
/// logic can distinguish a retryable request from an unusable key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An input buffer's length does not match the curve-derived size
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Curve selector outside the fixed registry
    UnsupportedCurve { id: u32 },

    /// Private scalar outside the valid range [1, order - 1]
    InvalidKey {
        context: &'static str,
        reason: &'static str,
    },

    /// Public key does not satisfy the curve equation
    PointNotOnCurve { context: &'static str },

    /// Public key is the identity element where a real point is required
    PointAtInfinity { context: &'static str },

    /// Opaque failure inside the arithmetic engine
    Engine {
        context: &'static str,
        detail: &'static str,
    },
}

/// Result type for boundary operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::UnsupportedCurve { id } => {
                write!(f, "unsupported curve selector {}", id)
            }
            Self::InvalidKey { context, reason } => {
                write!(f, "{}: invalid private key: {}", context, reason)
            }
            Self::PointNotOnCurve { context } => {
                write!(f, "{}: point is not on the curve", context)
            }
            Self::PointAtInfinity { context } => {
                write!(f, "{}: point is the identity element", context)
            }
            Self::Engine { context, detail } => {
                write!(f, "{}: engine failure: {}", context, detail)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Engine-specific failure status
///
/// This is the raw classification an [`crate::EcEngine`] implementation
/// reports; [`EngineError::into_error`] maps it onto the boundary taxonomy
/// together with the operation that observed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Scalar is zero or not below the group order
    ScalarOutOfRange,
    /// Coordinates do not satisfy the curve equation
    NotOnCurve,
    /// Point is the group identity
    Identity,
    /// Anything the engine cannot classify further
    Failure(&'static str),
}

/// Result type for engine capabilities
pub type EngineResult<T> = core::result::Result<T, EngineError>;

impl EngineError {
    /// Map an engine status onto the boundary taxonomy.
    pub fn into_error(self, context: &'static str) -> Error {
        match self {
            Self::ScalarOutOfRange => Error::InvalidKey {
                context,
                reason: "scalar is zero or exceeds the group order",
            },
            Self::NotOnCurve => Error::PointNotOnCurve { context },
            Self::Identity => Error::PointAtInfinity { context },
            Self::Failure(detail) => Error::Engine { context, detail },
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScalarOutOfRange => write!(f, "scalar out of range"),
            Self::NotOnCurve => write!(f, "point not on curve"),
            Self::Identity => write!(f, "point at infinity"),
            Self::Failure(detail) => write!(f, "engine failure: {}", detail),
        }
    }
}
