//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;
#[cfg(test)]
mod mock;

pub use home::{expand_home, mudsync_home_dir, MUDSYNC_TEST_HOME_VAR};
pub use local::LocalFs;
#[cfg(test)]
pub use mock::MockFs;
