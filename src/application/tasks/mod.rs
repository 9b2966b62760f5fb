//! Task Orchestrator
//!
//! Named operations (build, clean, rebuild, watch, import) composed from
//! distribute and clean actions.

mod event;
mod graph;
mod runner;


pub use event::TaskEvent;
pub use graph::{Action, Selection, Target, Task, TaskName};
pub use runner::{EventSink, TaskRunner};
