//! Secret data types with guaranteed zeroization

mod secret;

pub use secret::SecretBuffer;
