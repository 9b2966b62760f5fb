//! In-memory file system for tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared between
//! a runner and the assertions. Paths registered with `fail_writes_under`
//! reject writes, to exercise partial-failure aggregation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Clone, Default)]
pub struct MockFs {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    failing: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
        self
    }

    /// Reject every write below `prefix`
    pub fn fail_writes_under(self, prefix: impl Into<PathBuf>) -> Self {
        self.failing.lock().unwrap().push(prefix.into());
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    /// All stored paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

impl FileSystem for MockFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.get(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let failing = self.failing.lock().unwrap();
        if failing.iter().any(|prefix| path.starts_with(prefix)) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        drop(failing);

        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn list_files(&self, dir: &Path, extension: &str) -> FsResult<Vec<PathBuf>> {
        let files = self.files.lock().unwrap();
        if !files.keys().any(|p| p.starts_with(dir) && p != dir) {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }
        Ok(files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter(|p| p.extension().is_some_and(|ext| ext == extension))
            .cloned()
            .collect())
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        let mut files = self.files.lock().unwrap();
        let before = files.len();
        files.retain(|p, _| !p.starts_with(path));
        if files.len() == before {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        Ok(())
    }

    fn find_dirs_named(&self, root: &Path, name: &str) -> FsResult<Vec<PathBuf>> {
        let files = self.files.lock().unwrap();
        let mut found: Vec<PathBuf> = Vec::new();
        for path in files.keys().filter(|p| p.starts_with(root)) {
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            // Directory components only, shallowest match wins
            let mut current = root.to_path_buf();
            let components: Vec<_> = relative.components().collect();
            for component in &components[..components.len().saturating_sub(1)] {
                current.push(component);
                if component.as_os_str() == name {
                    if !found.contains(&current) {
                        found.push(current.clone());
                    }
                    break;
                }
            }
        }
        found.sort();
        Ok(found)
    }
}
