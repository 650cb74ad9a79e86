use std::{str::FromStr, sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::{task::JoinHandle, time::sleep};

use super::CollaboratorError;

/// Delay before a started track counts as a play.
pub const DEFAULT_DWELL: Duration = Duration::from_millis(3000);

/// Increments the play counter of the authenticated listener.
#[async_trait]
pub trait UsageReporter: Send + Sync {
    async fn report_play(&self) -> Result<(), CollaboratorError>;
}

/// Reporter that counts nothing, for offline use.
pub struct NoopReporter;

#[async_trait]
impl UsageReporter for NoopReporter {
    async fn report_play(&self) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// What happens to reports still waiting when the next track starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportPolicy {
    /// Every started track is reported once its dwell elapses, even if another
    /// track started meanwhile.
    #[default]
    KeepPending,
    /// A new track start aborts reports that have not fired yet.
    CancelOnTrackChange,
}

impl FromStr for ReportPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep-pending" => Ok(ReportPolicy::KeepPending),
            "cancel-on-track-change" => Ok(ReportPolicy::CancelOnTrackChange),
            other => Err(format!(
                "unknown report policy '{}', expected keep-pending or cancel-on-track-change",
                other
            )),
        }
    }
}

/// Owns the delayed usage reports of one controller.
///
/// Reports run as tokio tasks and are aborted when the scheduler is dropped,
/// so none of them can fire after the controller is gone.
pub struct ReportScheduler {
    reporter: Arc<dyn UsageReporter>,
    dwell: Duration,
    policy: ReportPolicy,
    pending: Vec<JoinHandle<()>>,
}

impl ReportScheduler {
    pub fn new(reporter: Arc<dyn UsageReporter>, dwell: Duration, policy: ReportPolicy) -> Self {
        Self {
            reporter,
            dwell,
            policy,
            pending: Vec::new(),
        }
    }

    /// Spawns one report firing after the dwell threshold.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self) {
        self.pending.retain(|handle| !handle.is_finished());
        if self.policy == ReportPolicy::CancelOnTrackChange {
            self.cancel_pending();
        }

        let reporter = Arc::clone(&self.reporter);
        let dwell = self.dwell;
        let handle = tokio::spawn(async move {
            sleep(dwell).await;
            match reporter.report_play().await {
                Ok(()) => log::debug!("play reported after {:?}", dwell),
                Err(e) => log::warn!("failed to report play: {}", e),
            }
        });
        self.pending.push(handle);
    }

    pub fn pending(&self) -> usize {
        self.pending
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    pub fn cancel_pending(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for ReportScheduler {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
