//! Git operations issued through an external `git` binary

use crate::error::{LeechError, Result};
use crate::infrastructure::runner::{CommandOutput, CommandRunner};
use tracing::info;

/// Fixed name under which the remote URL is registered.
/// Changing this would orphan the remote configured by earlier runs.
pub const REMOTE_ALIAS: &str = "origin";

/// Branch the activity commits are pushed to
pub const BRANCH: &str = "master";

/// Client for the handful of git operations leech needs
pub struct GitClient<R: CommandRunner> {
    runner: R,
    remote_url: String,
}

impl<R: CommandRunner> GitClient<R> {
    pub fn new(runner: R, remote_url: String) -> Self {
        GitClient { runner, remote_url }
    }

    /// Stage all working-directory changes. A non-zero exit is reported as
    /// `Ok(false)` so the caller can decide whether to bootstrap.
    pub fn stage_all(&self) -> Result<bool> {
        let output = self.runner.run("git", &["add", "-A"])?;
        Ok(output.success())
    }

    /// Initialize a repository in the current directory and register the
    /// remote alias, then stage again.
    pub fn bootstrap(&self) -> Result<bool> {
        self.runner.run("git", &["init"])?;
        info!("git init");

        self.runner
            .run("git", &["remote", "add", REMOTE_ALIAS, &self.remote_url])?;
        info!(remote = REMOTE_ALIAS, url = %self.remote_url, "git remote add");

        self.stage_all()
    }

    /// Commit the staged changes. A non-zero exit is fatal and carries the
    /// tool's error-stream text.
    pub fn commit(&self, message: &str) -> Result<()> {
        let output = self.runner.run("git", &["commit", "-m", message])?;

        if !output.success() {
            return Err(LeechError::CommitRejected {
                stderr: commit_diagnostic(&output),
            });
        }

        info!(message, "git commit");
        Ok(())
    }

    /// Push the commit to the remote alias. Returns whether the push
    /// succeeded; failure is the caller's to log, never fatal.
    pub fn push(&self) -> Result<CommandOutput> {
        self.runner.run("git", &["push", REMOTE_ALIAS, BRANCH])
    }
}

/// Prefer stderr for the diagnostic; git occasionally reports "nothing to
/// commit" on stdout instead.
fn commit_diagnostic(output: &CommandOutput) -> String {
    if output.stderr.trim().is_empty() {
        output.stdout.trim().to_string()
    } else {
        output.stderr.trim().to_string()
    }
}
