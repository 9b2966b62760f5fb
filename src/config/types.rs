//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Project paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Local source root (scripts live under `<local>/js`)
    #[serde(default = "default_local_root")]
    pub local: PathBuf,

    /// Remote deployment root (the hackmud user directory)
    #[serde(default, alias = "remote")]
    pub hackmud: PathBuf,

    /// Local build tree mirroring the remote layout
    #[serde(default = "default_build_root")]
    pub build: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            local: default_local_root(),
            hackmud: PathBuf::new(),
            build: default_build_root(),
        }
    }
}

fn default_local_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_build_root() -> PathBuf {
    PathBuf::from("build")
}

/// Script discovery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptsConfig {
    /// File extension of script files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    "js".to_string()
}

/// Resolved project configuration.
///
/// Created once per run and passed explicitly to every component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Identities (hackmud users) scripts are distributed to, in order
    #[serde(default, rename = "users")]
    pub identities: Vec<String>,

    /// Whether `forward` rewrites markers and function names
    #[serde(default = "default_true", rename = "do_transform")]
    pub transform_enabled: bool,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub scripts: ScriptsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            identities: Vec::new(),
            transform_enabled: true,
            paths: PathsConfig::default(),
            scripts: ScriptsConfig::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn local_root(&self) -> &Path {
        &self.paths.local
    }

    pub fn remote_root(&self) -> &Path {
        &self.paths.hackmud
    }

    pub fn build_root(&self) -> &Path {
        &self.paths.build
    }

    /// Directory holding shared scripts and per-identity source directories
    pub fn scripts_root(&self) -> PathBuf {
        self.paths.local.join("js")
    }
}
