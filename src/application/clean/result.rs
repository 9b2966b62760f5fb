//! Clean result types

use std::path::PathBuf;

use crate::application::outcome::{Failure, TaskOutcome};

/// Result of a clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Directories removed
    pub removed: Vec<PathBuf>,
    /// Directories that could not be removed
    pub failures: Vec<Failure>,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_removed(&mut self, path: PathBuf) {
        self.removed.push(path);
    }

    pub fn add_failure(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl From<CleanResult> for TaskOutcome {
    fn from(result: CleanResult) -> Self {
        TaskOutcome {
            written: Vec::new(),
            removed: result.removed,
            failures: result.failures,
        }
    }
}
