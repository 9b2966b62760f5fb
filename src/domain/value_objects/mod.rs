//! Value Objects
//!
//! Immutable types that describe where scripts come from and where they go.

mod layout;
mod scope;

pub use layout::{DestinationLayout, DestinationSet, SourceLayout, SCRIPTS_LEAF};
pub use scope::ScriptScope;
