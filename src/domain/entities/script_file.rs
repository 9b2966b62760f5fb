//! ScriptFile entity - one discovered source script
//!
//! Script files are read fresh on every pass and never persisted.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ScriptScope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFile {
    path: PathBuf,
    scope: ScriptScope,
    content: String,
}

impl ScriptFile {
    pub fn new(path: impl Into<PathBuf>, scope: ScriptScope, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            scope,
            content: content.into(),
        }
    }

    /// Source path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scope(&self) -> &ScriptScope {
        &self.scope
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// File name used at every destination
    pub fn file_name(&self) -> &Path {
        self.path
            .file_name()
            .map(Path::new)
            .unwrap_or(self.path.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_file_accessors() {
        let file = ScriptFile::new("src/js/alice/only.js", ScriptScope::owned("alice"), "x");

        assert_eq!(file.path(), Path::new("src/js/alice/only.js"));
        assert_eq!(file.file_name(), Path::new("only.js"));
        assert_eq!(file.scope().identity(), Some("alice"));
        assert_eq!(file.content(), "x");
    }
}
