//! leech - Repository activity keeper
//!
//! A command-line daemon that appends a timestamped entry to a log file and
//! commits/pushes the change to a remote git repository every N minutes,
//! bootstrapping the repository and its remote on the first run.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LeechError;
