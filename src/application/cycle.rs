//! The leech cycle: append an activity entry, publish it, sleep, repeat

use crate::domain::ActivityEntry;
use crate::error::Result;
use crate::infrastructure::{ActivityLog, CommandRunner, GitClient};
use std::time::Duration;
use tracing::{info, warn};

/// What happened during one non-fatal cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// The activity entry reached the log file
    pub appended: bool,
    /// Staging failed and a fresh repository was initialized
    pub bootstrapped: bool,
    /// The push was accepted by the remote
    pub pushed: bool,
}

/// Drives the append -> publish -> sleep loop until the process is killed or
/// a commit is rejected.
pub struct CycleDriver<R: CommandRunner> {
    git: GitClient<R>,
    log: ActivityLog,
    period: Duration,
}

impl<R: CommandRunner> CycleDriver<R> {
    pub fn new(git: GitClient<R>, log: ActivityLog, period: Duration) -> Self {
        CycleDriver { git, log, period }
    }

    /// Run forever. Only a fatal publish failure makes this return.
    pub fn run(&self) -> Result<()> {
        loop {
            let report = self.run_cycle()?;
            info!(
                appended = report.appended,
                bootstrapped = report.bootstrapped,
                pushed = report.pushed,
                "cycle finished"
            );
            std::thread::sleep(self.period);
        }
    }

    /// One cycle. `Ok` carries the per-cycle report; `Err` is fatal and the
    /// caller must stop looping.
    pub fn run_cycle(&self) -> Result<CycleReport> {
        let mut report = CycleReport::default();

        // Append happens unconditionally before publish; an I/O failure here
        // still leaves a commit attempt worth making.
        let entry = ActivityEntry::now();
        match self.log.append(&entry) {
            Ok(()) => report.appended = true,
            Err(e) => warn!(error = %e, path = %self.log.path().display(), "activity entry lost"),
        }

        if !self.git.stage_all()? {
            // Staging fails when no repository exists yet, the expected state
            // on the very first cycle.
            info!("staging failed, initializing a fresh repository");
            report.bootstrapped = true;
            if !self.git.bootstrap()? {
                warn!("staging still failing after bootstrap");
            }
        }

        // Commit timestamp is sampled here, not reused from the log entry.
        self.git.commit(&ActivityEntry::now().commit_message())?;

        let push = self.git.push()?;
        if push.success() {
            report.pushed = true;
        } else {
            warn!(stderr = %push.stderr.trim(), "push failed, will retry next cycle");
        }

        Ok(report)
    }
}
