//! Script discovery
//!
//! Reads every script directly inside a directory and tags it with a scope.
//! A directory that does not exist holds no scripts.

use std::path::Path;

use crate::domain::entities::ScriptFile;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ScriptScope;

use super::outcome::Failure;

#[derive(Debug, Default)]
pub struct Discovered {
    pub files: Vec<ScriptFile>,
    pub failures: Vec<Failure>,
}

impl Discovered {
    pub fn extend(&mut self, other: Discovered) {
        self.files.extend(other.files);
        self.failures.extend(other.failures);
    }
}

pub fn discover<FS: FileSystem + ?Sized>(
    fs: &FS,
    dir: &Path,
    scope: ScriptScope,
    extension: &str,
) -> Discovered {
    let mut discovered = Discovered::default();

    let paths = match fs.list_files(dir, extension) {
        Ok(paths) => paths,
        Err(e) if e.is_not_found() => {
            tracing::debug!(dir = %dir.display(), "no script directory");
            return discovered;
        }
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "failed to list scripts");
            discovered.failures.push(Failure::new(dir, e));
            return discovered;
        }
    };

    for path in paths {
        match fs.read(&path) {
            Ok(content) => discovered
                .files
                .push(ScriptFile::new(path, scope.clone(), content)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read script");
                discovered.failures.push(Failure::new(path, e));
            }
        }
    }

    discovered
}
