//! Domain Services
//!
//! Stateless logic with no I/O.

pub mod transform;

pub use transform::{forward, reverse, Pipeline, TransformStage};
