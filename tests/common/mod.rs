//! Common test utilities for mudsync CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus a binary runner
//! - Fixtures: reusable script content

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
