//! Common secret-memory primitives for the ecbridge workspace
//!
//! Boundary buffers carrying key material are owned by the call they flow
//! through and must be overwritten with zeros before their backing memory is
//! released, on every exit path. The types here make that discipline a
//! property of the type rather than of call-site care.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

pub use security::SecretBuffer;
