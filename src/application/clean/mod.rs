//! Clean Use Case
//!
//! Removes generated output: the whole local build tree, or every
//! `scripts` directory below the remote root.

mod result;
mod use_case;

pub use result::CleanResult;
pub use use_case::CleanUseCase;
