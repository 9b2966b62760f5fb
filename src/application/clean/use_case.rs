//! Clean Use Case
//!
//! Orchestrates directory removal. A target that does not exist is already
//! clean.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::application::outcome::Failure;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::SCRIPTS_LEAF;

use super::result::CleanResult;

pub struct CleanUseCase<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> CleanUseCase<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Remove `root` and everything below it
    pub fn remove_tree(&self, root: &Path) -> CleanResult {
        let mut result = CleanResult::new();
        if let Some(outcome) = self.remove(root.to_path_buf()) {
            match outcome {
                Ok(path) => result.add_removed(path),
                Err(failure) => result.add_failure(failure),
            }
        }
        result
    }

    /// Remove every directory named `scripts` at any depth below `root`.
    ///
    /// Sibling content such as per-identity data directories is left alone.
    pub fn remove_script_dirs(&self, root: &Path) -> CleanResult {
        let mut result = CleanResult::new();

        let dirs = match self.fs.find_dirs_named(root, SCRIPTS_LEAF) {
            Ok(dirs) => dirs,
            Err(e) if e.is_not_found() => {
                tracing::debug!(root = %root.display(), "nothing to clean");
                return result;
            }
            Err(e) => {
                result.add_failure(Failure::new(root, e));
                return result;
            }
        };

        let outcomes: Vec<_> = dirs
            .into_par_iter()
            .filter_map(|dir| self.remove(dir))
            .collect();

        for outcome in outcomes {
            match outcome {
                Ok(path) => result.add_removed(path),
                Err(failure) => result.add_failure(failure),
            }
        }
        result
    }

    /// `None` when there was nothing to remove
    fn remove(&self, path: PathBuf) -> Option<Result<PathBuf, Failure>> {
        match self.fs.remove_dir_all(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed");
                Some(Ok(path))
            }
            Err(e) if e.is_not_found() => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "remove failed");
                Some(Err(Failure::new(path, e)))
            }
        }
    }
}
