/// Filesystem adapters for file I/O operations
mod file_writer;
mod jboss_module_system;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use jboss_module_system::JBossModuleSystem;
