//! Aggregated results
//!
//! Every operation reports what it wrote, what it removed and which paths
//! failed. Composite tasks merge their children's outcomes.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A single path that could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub path: PathBuf,
    pub message: String,
}

impl Failure {
    pub fn new(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Union of everything a task and its sub-tasks did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskOutcome {
    pub written: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl TaskOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self {
            failures: vec![Failure::new(path, message)],
            ..Self::default()
        }
    }

    pub fn merge(mut self, other: TaskOutcome) -> Self {
        self.written.extend(other.written);
        self.removed.extend(other.removed);
        self.failures.extend(other.failures);
        self
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn has_failure_for(&self, path: &Path) -> bool {
        self.failures.iter().any(|f| f.path == path)
    }
}
