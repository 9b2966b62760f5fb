//! Destination layouts
//!
//! A layout maps an identity to the directory its scripts land in:
//! `<root>/<identity>[/<leaf>]`. Local and remote builds use the same shape
//! with different roots; import writes back into per-identity source
//! directories without a leaf segment.

use std::path::{Path, PathBuf};

use super::scope::ScriptScope;

/// Leaf directory hackmud reads scripts from
pub const SCRIPTS_LEAF: &str = "scripts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationLayout {
    root: PathBuf,
    leaf: Option<&'static str>,
}

impl DestinationLayout {
    pub fn new(root: impl Into<PathBuf>, leaf: Option<&'static str>) -> Self {
        Self {
            root: root.into(),
            leaf,
        }
    }

    /// `<build_root>/<identity>/scripts`
    pub fn local(build_root: impl Into<PathBuf>) -> Self {
        Self::new(build_root, Some(SCRIPTS_LEAF))
    }

    /// `<remote_root>/<identity>/scripts`
    pub fn remote(remote_root: impl Into<PathBuf>) -> Self {
        Self::new(remote_root, Some(SCRIPTS_LEAF))
    }

    /// `<scripts_root>/<identity>`
    pub fn identity_sources(scripts_root: impl Into<PathBuf>) -> Self {
        Self::new(scripts_root, None)
    }

    pub fn identity_dir(&self, identity: &str) -> PathBuf {
        let dir = self.root.join(identity);
        match self.leaf {
            Some(leaf) => dir.join(leaf),
            None => dir,
        }
    }

    /// Every path a file named `file_name` with `scope` must be written to.
    pub fn destinations(
        &self,
        scope: &ScriptScope,
        file_name: &Path,
        identities: &[String],
    ) -> DestinationSet {
        let paths = match scope {
            ScriptScope::Shared => identities
                .iter()
                .map(|id| self.identity_dir(id).join(file_name))
                .collect(),
            ScriptScope::IdentityOwned(id) => vec![self.identity_dir(id).join(file_name)],
        };
        DestinationSet { paths }
    }
}

/// Output paths for a single script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DestinationSet {
    paths: Vec<PathBuf>,
}

impl DestinationSet {
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl IntoIterator for DestinationSet {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

/// Where scripts are read from: shared scripts directly in `<root>`,
/// identity-owned scripts in `<root>/<identity>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    root: PathBuf,
}

impl SourceLayout {
    pub fn new(scripts_root: impl Into<PathBuf>) -> Self {
        Self {
            root: scripts_root.into(),
        }
    }

    pub fn shared_dir(&self) -> &Path {
        &self.root
    }

    pub fn identity_dir(&self, identity: &str) -> PathBuf {
        self.root.join(identity)
    }
}
