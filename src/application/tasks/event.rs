//! Task events for progress reporting and NDJSON output

use serde::Serialize;

/// Something a running task wants the user to know about
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TaskEvent {
    TaskStarted {
        task: String,
    },
    TaskFinished {
        task: String,
        written: usize,
        removed: usize,
        failed: usize,
        elapsed_ms: u64,
    },
    /// A single path failed; emitted by the leaf that hit it
    PathFailed {
        task: String,
        path: String,
        message: String,
    },
    WatchStarted {
        task: String,
        path: String,
    },
    FileChanged {
        path: String,
        kind: String,
    },
    Shutdown {
        task: String,
    },
}

impl TaskEvent {
    /// One NDJSON line
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{\"event\":\"error\"}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_finished_to_json() {
        let event = TaskEvent::TaskFinished {
            task: "build:local".to_string(),
            written: 4,
            removed: 0,
            failed: 1,
            elapsed_ms: 12,
        };
        let json = event.to_json();
        assert!(json.contains("\"event\":\"task_finished\""));
        assert!(json.contains("\"task\":\"build:local\""));
        assert!(json.contains("\"written\":4"));
        assert!(json.contains("\"failed\":1"));
    }

    #[test]
    fn shutdown_to_json() {
        let json = TaskEvent::Shutdown {
            task: "watch".to_string(),
        }
        .to_json();
        assert_eq!(json, "{\"event\":\"shutdown\",\"task\":\"watch\"}");
    }
}
