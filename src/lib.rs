//! mudsync - hackmud script build and distribution
//!
//! Scripts are written as ordinary JavaScript under `<local>/js`, rewritten
//! into hackmud's dialect and fanned out to one `scripts` directory per
//! user, in a local build tree and in the game's user directory. `import`
//! runs the rewrite backwards.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod watcher;

// Re-exports for convenience
pub use application::{TaskEvent, TaskName, TaskOutcome, TaskRunner};
pub use config::Config;
pub use domain::services::{forward, reverse};
pub use error::{MudError, MudResult};
