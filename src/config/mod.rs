//! Configuration module for mudsync
//!
//! Configuration hierarchy:
//! 1. Environment variables (`MUD_*`, highest priority)
//! 2. Project manifest (`mudsync.toml`)
//! 3. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    load_or_default, resolve, ConfigWarning, DEFAULT_MANIFEST, ENV_DO_TRANSFORM,
    ENV_PATH_HACKMUD, ENV_PATH_LOCAL, ENV_USERS,
};
pub use types::{Config, PathsConfig, ScriptsConfig};
