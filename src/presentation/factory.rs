//! Use Case Factory
//!
//! Wires the task runner to the real file system.

use crate::application::TaskRunner;
use crate::config::Config;
use crate::infrastructure::LocalFs;

/// Task runner writing to disk
pub type ConcreteTaskRunner = TaskRunner<LocalFs>;

pub fn create_task_runner(config: Config) -> ConcreteTaskRunner {
    TaskRunner::new(config, LocalFs::new())
}
