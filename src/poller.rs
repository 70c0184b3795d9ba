//! Foreground update polling.
//!
//! [`ForegroundPoller`] watches host activity transitions and a repeating
//! timer, issuing update checks while the application is active. The
//! timer fires at a quarter of the configured monitor interval so the
//! elapsed-time gate is sampled with finer granularity than its own
//! threshold.
//!
//! # Design
//!
//! The poller runs as a background tokio task scoped to a UI surface.
//! Dropping the returned [`PollerHandle`] cancels and aborts the loop, so
//! the timer resource is released on every exit path, early unmount
//! included.

use crate::activity::ActivityState;
use crate::client::UpdateClient;
use crate::config::MonitorConfig;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// UI-lifecycle-bound poller issuing periodic and edge-triggered checks.
pub struct ForegroundPoller {
    client: UpdateClient,
    activity: watch::Receiver<ActivityState>,
    config: MonitorConfig,
    cancel: CancellationToken,
}

impl ForegroundPoller {
    /// Create a poller over `activity` transitions.
    ///
    /// Call [`spawn`](Self::spawn) to start it.
    pub fn new(
        client: UpdateClient,
        activity: watch::Receiver<ActivityState>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            client,
            activity,
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Use an externally owned cancellation token instead of an internal one.
    pub fn with_cancel_token(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Spawn the polling loop. Dropping the returned handle stops it.
    pub fn spawn(self) -> PollerHandle {
        let cancel = self.cancel.clone();
        let task = tokio::spawn(self.run());
        PollerHandle { cancel, task }
    }

    /// Run the polling loop until cancelled or the activity channel closes.
    pub async fn run(mut self) {
        let mut last_check = self.config.last_check;
        let mut was_active = self.activity.borrow().is_active();

        // First tick lands a full period out, matching a plain repeating
        // timer rather than tokio's fire-immediately default.
        let period = self.config.tick_period();
        let mut ticks = tokio::time::interval_at(Instant::now() + period, period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            interval = ?self.config.monitor_interval,
            development_build = self.config.development_build,
            "foreground update poller started"
        );

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    debug!("foreground update poller cancelled");
                    break;
                }
                changed = self.activity.changed() => {
                    if changed.is_err() {
                        debug!("activity channel closed, stopping poller");
                        break;
                    }
                    let state = *self.activity.borrow_and_update();
                    let activating = state.is_active() && !was_active;
                    was_active = state.is_active();
                    if activating {
                        // Edge into the foreground always checks, dev
                        // builds included.
                        debug!("app became active, checking for update");
                        self.client.check_for_update().await;
                        last_check = Some(Instant::now());
                    }
                }
                _ = ticks.tick() => {
                    if self.gate_open(last_check) {
                        self.client.check_for_update().await;
                        last_check = Some(Instant::now());
                    }
                }
            }
        }
    }

    /// Tick-path gate: active, stale, and not a development build.
    fn gate_open(&self, last_check: Option<Instant>) -> bool {
        if self.config.development_build {
            return false;
        }
        if !self.activity.borrow().is_active() {
            return false;
        }
        match last_check {
            None => true,
            Some(at) => at.elapsed() > self.config.monitor_interval,
        }
    }
}

/// Handle to a running poller. Dropping it stops the loop.
pub struct PollerHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the loop and wait for it to finish.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        let _ = (&mut self.task).await;
    }

    /// Returns `true` once the polling task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.task.abort();
    }
}
