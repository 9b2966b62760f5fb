//! Deciding which changes should trigger a run
//!
//! Output trees may live below the watched root, and atomic writes leave
//! short-lived temp files next to their targets. Neither may trigger a run,
//! otherwise every build would schedule the next one.

use std::path::{Path, PathBuf};

use super::Change;

#[derive(Debug, Clone)]
pub struct ChangeFilter {
    extension: String,
    excluded: Vec<PathBuf>,
}

impl ChangeFilter {
    /// Accept only files ending in `.{extension}`
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            excluded: Vec::new(),
        }
    }

    /// Ignore everything at or below `dir`. Empty paths are skipped.
    pub fn exclude(mut self, dir: &Path) -> Self {
        if !dir.as_os_str().is_empty() {
            self.excluded.push(resolve(dir));
        }
        self
    }

    /// True when at least one path of the change is a source script
    pub fn accepts(&self, change: &Change) -> bool {
        change.paths.iter().any(|path| self.accepts_path(path))
    }

    pub fn accepts_path(&self, path: &Path) -> bool {
        if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
            return false;
        }
        let path = resolve(path);
        !self.excluded.iter().any(|dir| path.starts_with(dir))
    }
}

/// Absolute form of `path` with symlinks resolved as far as the path exists.
///
/// Event paths may be reported canonicalized (FSEvents) while configured
/// roots are relative, and removed files or not-yet-built roots cannot be
/// canonicalized themselves.
fn resolve(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut existing = absolute.as_path();
    let mut rest = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            return rest
                .iter()
                .rev()
                .fold(canonical, |acc: PathBuf, part| acc.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_os_string());
                existing = parent;
            }
            _ => return absolute,
        }
    }
}
