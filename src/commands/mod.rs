//! Command handlers

mod list;
mod run;

pub use list::cmd_list;
pub use run::cmd_run;
