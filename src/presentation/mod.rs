//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/NDJSON)
//!
//! ## Structure
//!
//! - `factory` - Creates the task runner with proper dependencies
//! - `output` - Event and outcome rendering

pub mod factory;
pub mod output;

pub use factory::{create_task_runner, ConcreteTaskRunner};
pub use output::{create_reporter, JsonReporter, OutputFormat, Reporter, TextReporter};
