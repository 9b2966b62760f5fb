//! Output Rendering
//!
//! Text output is one timestamped line per task event plus a closing
//! summary. JSON output is NDJSON: one object per event and a final
//! `complete` object.

use crate::application::{TaskEvent, TaskName, TaskOutcome};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    write: &'static str,
    trash: &'static str,
    eye: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            write: "→",
            trash: "🗑",
            eye: "👀",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            write: "->",
            trash: "[DEL]",
            eye: "[WATCH]",
        }
    }
}

/// Receives events while tasks run and the final outcome once done
pub trait Reporter: Send + Sync {
    fn event(&self, event: &TaskEvent);
    fn summary(&self, task: TaskName, outcome: &TaskOutcome);
}

pub struct TextReporter {
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextReporter {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextReporter {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    /// One line for `event`, or `None` when it is not shown at this verbosity
    pub fn render_event(&self, event: &TaskEvent, timestamp: &str) -> Option<String> {
        let icons = self.icons();
        let line = match event {
            TaskEvent::TaskStarted { task } => {
                if self.verbose == 0 {
                    return None;
                }
                format!("Starting '{task}'...")
            }
            TaskEvent::TaskFinished {
                task,
                written,
                removed,
                failed,
                elapsed_ms,
            } => {
                let icon = if *failed == 0 { icons.check } else { icons.cross };
                let mut counts = Vec::new();
                if *written > 0 {
                    counts.push(format!("{written} written"));
                }
                if *removed > 0 {
                    counts.push(format!("{removed} removed"));
                }
                if *failed > 0 {
                    counts.push(format!("{failed} failed"));
                }
                if counts.is_empty() {
                    format!("{icon} Finished '{task}' after {elapsed_ms} ms")
                } else {
                    format!(
                        "{icon} Finished '{task}' after {elapsed_ms} ms ({})",
                        counts.join(", ")
                    )
                }
            }
            TaskEvent::PathFailed { path, message, .. } => {
                format!("{} {path}: {message}", icons.cross)
            }
            TaskEvent::WatchStarted { path, .. } => {
                format!("{} Watching {path} (Ctrl+C to stop)", icons.eye)
            }
            TaskEvent::FileChanged { path, kind } => format!("{kind} {path}"),
            TaskEvent::Shutdown { task } => format!("Stopped '{task}'"),
        };
        Some(format!("[{timestamp}] {line}"))
    }

    pub fn render_summary(&self, task: TaskName, outcome: &TaskOutcome) -> String {
        let icons = self.icons();
        let mut out = String::new();

        if outcome.is_success() {
            out.push_str(&format!("{} {task} complete\n", icons.check));
        } else {
            out.push_str(&format!("{} {task} failed\n", icons.cross));
        }
        out.push_str(&format!(
            "  {} written, {} removed, {} failed\n",
            outcome.written.len(),
            outcome.removed.len(),
            outcome.failures.len()
        ));

        if self.verbose > 0 && !outcome.written.is_empty() {
            let mut written = outcome.written.clone();
            written.sort();
            out.push_str(&format!("\n  Written ({}):\n", written.len()));
            for path in &written {
                out.push_str(&format!("    {} {}\n", icons.write, path.display()));
            }
        }

        if !outcome.removed.is_empty() {
            out.push_str(&format!("\n  Removed ({}):\n", outcome.removed.len()));
            for path in &outcome.removed {
                out.push_str(&format!("    {} {}\n", icons.trash, path.display()));
            }
        }

        if !outcome.failures.is_empty() {
            out.push_str(&format!("\n  Failed ({}):\n", outcome.failures.len()));
            for failure in &outcome.failures {
                out.push_str(&format!("    {} {}\n", icons.cross, failure));
            }
        }

        out
    }
}

impl Reporter for TextReporter {
    fn event(&self, event: &TaskEvent) {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        if let Some(line) = self.render_event(event, &timestamp) {
            match event {
                TaskEvent::PathFailed { .. } => eprintln!("{line}"),
                _ => println!("{line}"),
            }
        }
    }

    fn summary(&self, task: TaskName, outcome: &TaskOutcome) {
        print!("{}", self.render_summary(task, outcome));
    }
}

pub struct JsonReporter;

impl JsonReporter {
    pub fn render_summary(task: TaskName, outcome: &TaskOutcome) -> String {
        let json = serde_json::json!({
            "event": "complete",
            "task": task.as_str(),
            "success": outcome.is_success(),
            "written": outcome.written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            "removed": outcome.removed.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            "failures": outcome.failures,
        });
        serde_json::to_string(&json).unwrap_or_default()
    }
}

impl Reporter for JsonReporter {
    fn event(&self, event: &TaskEvent) {
        println!("{}", event.to_json());
    }

    fn summary(&self, task: TaskName, outcome: &TaskOutcome) {
        println!("{}", Self::render_summary(task, outcome));
    }
}

/// Create a reporter based on format
pub fn create_reporter(format: OutputFormat, unicode: bool, verbose: u8) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(TextReporter { unicode, verbose }),
        OutputFormat::Json => Box::new(JsonReporter),
    }
}
