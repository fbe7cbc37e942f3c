//! Infrastructure layer - File system, configuration, and external processes

pub mod config;
pub mod git;
pub mod journal;
pub mod runner;

pub use config::Settings;
pub use git::GitClient;
pub use journal::ActivityLog;
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
