//! Error types for leech

use thiserror::Error;

/// Main error type for the leech application
#[derive(Debug, Error)]
pub enum LeechError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Commit rejected by git: {stderr}")]
    CommitRejected { stderr: String },
}

impl LeechError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LeechError::Spawn { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type using LeechError
pub type Result<T> = std::result::Result<T, LeechError>;
