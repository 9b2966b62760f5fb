//! Task Runner
//!
//! Walks the static graph. `Parallel` children run on scoped threads,
//! `Series` children run one after another, leaves call into the distribute
//! and clean use cases. Per-path failures are aggregated into the outcome,
//! never raised.

use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crate::application::clean::CleanUseCase;
use crate::application::discover::{discover, Discovered};
use crate::application::distribute::DistributeUseCase;
use crate::application::outcome::TaskOutcome;
use crate::config::Config;
use crate::domain::ports::FileSystem;
use crate::domain::services::Pipeline;
use crate::domain::value_objects::{DestinationLayout, ScriptScope, SourceLayout};
use crate::error::MudError;
use crate::watcher::{self, ChangeFilter};

use super::event::TaskEvent;
use super::graph::{Action, Selection, Target, Task, TaskName};

/// Receives every event emitted while tasks run, from any thread
pub type EventSink = Arc<dyn Fn(&TaskEvent) + Send + Sync>;

pub struct TaskRunner<FS: FileSystem + 'static> {
    config: Arc<Config>,
    fs: Arc<FS>,
    events: EventSink,
    running: Arc<AtomicBool>,
}

impl<FS: FileSystem + 'static> Clone for TaskRunner<FS> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            fs: Arc::clone(&self.fs),
            events: Arc::clone(&self.events),
            running: Arc::clone(&self.running),
        }
    }
}

impl<FS: FileSystem + 'static> TaskRunner<FS> {
    pub fn new(config: Config, fs: FS) -> Self {
        Self {
            config: Arc::new(config),
            fs: Arc::new(fs),
            events: Arc::new(|_: &TaskEvent| {}),
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn with_events(mut self, events: EventSink) -> Self {
        self.events = events;
        self
    }

    /// Flag watched by `watch` actions; clearing it ends them
    pub fn with_running_flag(mut self, running: Arc<AtomicBool>) -> Self {
        self.running = running;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run `name` and everything below it
    pub fn run(&self, name: TaskName) -> TaskOutcome {
        let started = Instant::now();
        self.emit(TaskEvent::TaskStarted {
            task: name.to_string(),
        });

        let outcome = match name.definition() {
            Task::Parallel(children) => self.run_parallel(&children),
            Task::Series(children) => self.run_series(&children),
            Task::Action(action) => self.run_action(name, action),
        };

        self.emit(TaskEvent::TaskFinished {
            task: name.to_string(),
            written: outcome.written.len(),
            removed: outcome.removed.len(),
            failed: outcome.failures.len(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        });
        outcome
    }

    fn run_parallel(&self, children: &[TaskName]) -> TaskOutcome {
        thread::scope(|scope| {
            let handles: Vec<_> = children
                .iter()
                .map(|&child| (child, scope.spawn(move || self.run(child))))
                .collect();

            handles
                .into_iter()
                .fold(TaskOutcome::new(), |acc, (child, handle)| {
                    let outcome = handle.join().unwrap_or_else(|_| {
                        TaskOutcome::failed(child.as_str(), "task panicked")
                    });
                    acc.merge(outcome)
                })
        })
    }

    fn run_series(&self, children: &[TaskName]) -> TaskOutcome {
        children
            .iter()
            .fold(TaskOutcome::new(), |acc, &child| acc.merge(self.run(child)))
    }

    fn run_action(&self, name: TaskName, action: Action) -> TaskOutcome {
        let outcome = match action {
            Action::Distribute { target, selection } => self.distribute(target, selection),
            Action::Clean(target) => self.clean(target),
            Action::Watch { on_change } => self.watch(name, on_change),
            Action::Import => self.import(),
        };

        for failure in &outcome.failures {
            self.emit(TaskEvent::PathFailed {
                task: name.to_string(),
                path: failure.path.display().to_string(),
                message: failure.message.clone(),
            });
        }
        outcome
    }

    fn distribute(&self, target: Target, selection: Selection) -> TaskOutcome {
        let config = &self.config;
        if let Err(outcome) = require_root(config.local_root(), Root::Local) {
            return outcome;
        }
        let layout = match target {
            Target::Local => {
                if let Err(outcome) = require_root(config.build_root(), Root::Build) {
                    return outcome;
                }
                DestinationLayout::local(config.build_root())
            }
            Target::Remote => {
                if let Err(outcome) = require_root(config.remote_root(), Root::Remote) {
                    return outcome;
                }
                DestinationLayout::remote(config.remote_root())
            }
        };

        let sources = SourceLayout::new(config.scripts_root());
        let extension = config.scripts.extension.as_str();
        let mut discovered = Discovered::default();
        match selection {
            Selection::Shared => discovered.extend(discover(
                &*self.fs,
                sources.shared_dir(),
                ScriptScope::Shared,
                extension,
            )),
            Selection::Users => {
                for identity in &config.identities {
                    discovered.extend(discover(
                        &*self.fs,
                        &sources.identity_dir(identity),
                        ScriptScope::owned(identity.as_str()),
                        extension,
                    ));
                }
            }
        }

        let pipeline = Pipeline::forward(config.transform_enabled);
        let result = DistributeUseCase::new(&*self.fs, &pipeline).execute(
            &discovered.files,
            &layout,
            &config.identities,
        );

        TaskOutcome {
            failures: discovered.failures,
            ..TaskOutcome::default()
        }
        .merge(result.into())
    }

    fn clean(&self, target: Target) -> TaskOutcome {
        let clean = CleanUseCase::new(&*self.fs);
        let result = match target {
            Target::Local => {
                let root = self.config.build_root();
                if let Err(outcome) = require_root(root, Root::Build) {
                    return outcome;
                }
                clean.remove_tree(root)
            }
            Target::Remote => {
                let root = self.config.remote_root();
                if let Err(outcome) = require_root(root, Root::Remote) {
                    return outcome;
                }
                clean.remove_script_dirs(root)
            }
        };
        result.into()
    }

    fn import(&self) -> TaskOutcome {
        let config = &self.config;
        if let Err(outcome) = require_root(config.remote_root(), Root::Remote) {
            return outcome;
        }
        if let Err(outcome) = require_root(config.local_root(), Root::Local) {
            return outcome;
        }

        let remote = DestinationLayout::remote(config.remote_root());
        let extension = config.scripts.extension.as_str();
        let mut discovered = Discovered::default();
        for identity in &config.identities {
            discovered.extend(discover(
                &*self.fs,
                &remote.identity_dir(identity),
                ScriptScope::owned(identity.as_str()),
                extension,
            ));
        }

        let pipeline = Pipeline::reverse();
        let result = DistributeUseCase::new(&*self.fs, &pipeline).execute(
            &discovered.files,
            &DestinationLayout::identity_sources(config.scripts_root()),
            &config.identities,
        );

        TaskOutcome {
            failures: discovered.failures,
            ..TaskOutcome::default()
        }
        .merge(result.into())
    }

    /// Blocks until the running flag is cleared. Each change to a source
    /// script starts an independent run of `on_change` on its own thread;
    /// runs may overlap. Writes into the output trees never count as changes.
    fn watch(&self, name: TaskName, on_change: TaskName) -> TaskOutcome {
        let config = &self.config;
        if let Err(outcome) = require_root(config.local_root(), Root::Local) {
            return outcome;
        }
        let root = config.scripts_root();
        let filter = ChangeFilter::new(config.scripts.extension.as_str())
            .exclude(config.build_root())
            .exclude(config.remote_root());

        self.emit(TaskEvent::WatchStarted {
            task: name.to_string(),
            path: root.display().to_string(),
        });

        let result = watcher::watch(&root, &filter, &self.running, |change| {
            self.emit(TaskEvent::FileChanged {
                path: change
                    .primary_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
                kind: change.kind.to_string(),
            });
            let runner = self.clone();
            thread::spawn(move || {
                let outcome = runner.run(on_change);
                if !outcome.is_success() {
                    tracing::warn!(
                        task = %on_change,
                        failed = outcome.failures.len(),
                        "triggered run had failures"
                    );
                }
            });
        });

        self.emit(TaskEvent::Shutdown {
            task: name.to_string(),
        });

        match result {
            Ok(()) => TaskOutcome::new(),
            Err(e) => {
                tracing::error!(error = %e, "watch failed");
                TaskOutcome::failed(root, e)
            }
        }
    }

    fn emit(&self, event: TaskEvent) {
        (self.events)(&event);
    }
}

#[derive(Debug, Clone, Copy)]
enum Root {
    Local,
    Remote,
    Build,
}

impl Root {
    fn name(self) -> &'static str {
        match self {
            Root::Local => "local",
            Root::Remote => "remote",
            Root::Build => "build",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            Root::Local => "set [paths] local in the manifest or MUD_PATH_LOCAL",
            Root::Remote => "set [paths] hackmud in the manifest or MUD_PATH_HACKMUD",
            Root::Build => "set [paths] build in the manifest",
        }
    }
}

fn require_root(path: &Path, root: Root) -> Result<(), TaskOutcome> {
    if !path.as_os_str().is_empty() {
        return Ok(());
    }
    let err = MudError::RootNotConfigured {
        root: root.name(),
        hint: root.hint(),
    };
    tracing::warn!(error = %err, "skipping action");
    Err(TaskOutcome::failed(format!("<{} root>", root.name()), err))
}
