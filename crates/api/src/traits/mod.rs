//! Capability traits expected from external collaborators

mod engine;

pub use engine::EcEngine;
