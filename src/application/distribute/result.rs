//! Distribute result

use std::path::PathBuf;

use crate::application::outcome::{Failure, TaskOutcome};

/// Result of a distribute operation
#[derive(Debug, Clone, Default)]
pub struct DistributeResult {
    /// Files written, in no particular order
    pub written: Vec<PathBuf>,
    /// Sources that could not be read and destinations that could not be written
    pub failures: Vec<Failure>,
    /// Number of source scripts rendered
    pub scripts: usize,
}

impl DistributeResult {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl From<DistributeResult> for TaskOutcome {
    fn from(result: DistributeResult) -> Self {
        TaskOutcome {
            written: result.written,
            removed: Vec::new(),
            failures: result.failures,
        }
    }
}
