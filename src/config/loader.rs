//! Configuration loading and environment overrides

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MudError, MudResult};
use crate::infrastructure::fs::expand_home;

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::Config;

pub const ENV_PATH_LOCAL: &str = "MUD_PATH_LOCAL";
pub const ENV_PATH_HACKMUD: &str = "MUD_PATH_HACKMUD";
pub const ENV_USERS: &str = "MUD_USERS";
pub const ENV_DO_TRANSFORM: &str = "MUD_DO_TRANSFORM";

/// Default manifest file name, looked up in the working directory
pub const DEFAULT_MANIFEST: &str = "mudsync.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MudResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MudError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the manifest (or defaults when it does not exist), then apply
/// environment overrides and expand `~` in every configured path.
///
/// A manifest that exists but cannot be parsed is an error.
pub fn load_or_default(manifest: &Path) -> MudResult<Config> {
    let persisted = if manifest.exists() {
        let (config, warnings) = load_with_warnings(manifest)?;
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        config
    } else {
        tracing::debug!(manifest = %manifest.display(), "manifest not found, using defaults");
        Config::default()
    };

    Ok(expand_paths(with_env_overrides(persisted)))
}

/// Apply environment variable overrides from the current process.
pub fn with_env_overrides(config: Config) -> Config {
    let env: HashMap<String, String> = std::env::vars()
        .filter(|(key, _)| key.starts_with("MUD_"))
        .collect();
    resolve(config, &env)
}

/// Merge persisted values with environment overrides. Environment wins.
///
/// Only presence is checked: an empty or whitespace-only variable counts as
/// absent. No paths are validated here.
pub fn resolve(persisted: Config, env: &HashMap<String, String>) -> Config {
    let mut config = persisted;
    let present = |key: &str| {
        env.get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    if let Some(local) = present(ENV_PATH_LOCAL) {
        config.paths.local = PathBuf::from(local);
    }

    if let Some(remote) = present(ENV_PATH_HACKMUD) {
        config.paths.hackmud = PathBuf::from(remote);
    }

    if let Some(users) = present(ENV_USERS) {
        config.identities = users.split_whitespace().map(str::to_string).collect();
    }

    if let Some(flag) = present(ENV_DO_TRANSFORM) {
        config.transform_enabled = parse_truthy(&flag);
    }

    config.identities = dedup_identities(config.identities);
    config
}

fn parse_truthy(value: &str) -> bool {
    let validator = EnvVarValidator::new(
        ENV_DO_TRANSFORM,
        &["1", "0", "true", "false", "yes", "no", "on", "off"],
    );
    validator.parse(
        value,
        |s| match s.to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        },
        true,
    )
}

fn dedup_identities(identities: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(identities.len());
    for identity in identities {
        if identity.is_empty() {
            continue;
        }
        if seen.contains(&identity) {
            tracing::warn!(identity = %identity, "duplicate identity ignored");
            continue;
        }
        seen.push(identity);
    }
    seen
}

fn expand_paths(mut config: Config) -> Config {
    config.paths.local = expand_home(&config.paths.local);
    config.paths.hackmud = expand_home(&config.paths.hackmud);
    config.paths.build = expand_home(&config.paths.build);
    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "users",
        "do_transform",
        "paths",
        "local",
        "hackmud",
        "build",
        "scripts",
        "extension",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
