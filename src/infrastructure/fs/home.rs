//! Home directory resolution with test isolation support.
//!
//! `MUDSYNC_TEST_HOME` overrides `dirs::home_dir()` so integration tests can
//! point `~` at a temp directory on every platform.

use std::path::{Path, PathBuf};

/// Environment variable for test isolation of the home directory.
pub const MUDSYNC_TEST_HOME_VAR: &str = "MUDSYNC_TEST_HOME";

/// Get the home directory used for `~` expansion.
pub fn mudsync_home_dir() -> Option<PathBuf> {
    std::env::var(MUDSYNC_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Expand a leading `~` or `~/` to the home directory.
///
/// Any other path, or a home directory that cannot be resolved, leaves the
/// path unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };

    if raw == "~" {
        return mudsync_home_dir().unwrap_or_else(|| path.to_path_buf());
    }

    match raw.strip_prefix("~/") {
        Some(rest) => mudsync_home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        None => path.to_path_buf(),
    }
}
