//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DistributeUseCase` - Render scripts once and fan them out to identity directories
//! - `CleanUseCase` - Remove generated trees
//! - `TaskRunner` - Run named tasks from the static task graph

pub mod clean;
pub mod discover;
pub mod distribute;
pub mod outcome;
pub mod tasks;

pub use clean::{CleanResult, CleanUseCase};
pub use discover::{discover, Discovered};
pub use distribute::{DistributeResult, DistributeUseCase};
pub use outcome::{Failure, TaskOutcome};
pub use tasks::{EventSink, TaskEvent, TaskName, TaskRunner};
