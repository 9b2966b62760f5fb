//! Run command handler
//!
//! Resolves configuration, runs one task and reports its outcome.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use mudsync::application::{EventSink, TaskEvent, TaskName};
use mudsync::config;
use mudsync::presentation::{create_reporter, create_task_runner, OutputFormat, Reporter};

/// Run `task`. Returns whether it finished without failures.
pub fn cmd_run(task: &str, manifest: &Path, json: bool, ascii: bool, verbose: u8) -> Result<bool> {
    let task: TaskName = task.parse()?;
    let config = config::load_or_default(manifest)?;
    tracing::debug!(?config, "resolved configuration");

    let running = Arc::new(AtomicBool::new(true));
    if task.watches() {
        let flag = Arc::clone(&running);
        ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))
            .context("failed to install Ctrl+C handler")?;
    }

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let reporter: Arc<dyn Reporter> = Arc::from(create_reporter(format, !ascii, verbose));

    let sink_reporter = Arc::clone(&reporter);
    let sink: EventSink = Arc::new(move |event: &TaskEvent| sink_reporter.event(event));

    let runner = create_task_runner(config)
        .with_events(sink)
        .with_running_flag(running);

    let outcome = runner.run(task);
    reporter.summary(task, &outcome);

    Ok(outcome.is_success())
}
