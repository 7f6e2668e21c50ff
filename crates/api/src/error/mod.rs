//! Error taxonomy for boundary operations

mod types;

pub use types::{EngineError, EngineResult, Error, Result};
