//! Domain Entities

mod script_file;

pub use script_file::ScriptFile;
