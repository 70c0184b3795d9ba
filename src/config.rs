//! Configuration for the foreground update monitor.

use crate::error::{OtaError, Result};
use std::time::Duration;
use tokio::time::Instant;

/// The elapsed-time gate is sampled at this fraction of the monitor interval.
const TICK_DIVISOR: u32 = 4;

/// Foreground monitoring configuration.
///
/// `monitor_interval` is the minimum spacing between tick-triggered update
/// checks. The poller samples its gate conditions at a quarter of that, so
/// an overdue check is picked up within a quarter interval rather than
/// being delayed by a full extra one.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Minimum spacing between tick-triggered checks.
    pub monitor_interval: Duration,
    /// When the last update check ran, if known. Absent means infinitely
    /// stale: the first qualifying tick checks immediately.
    pub last_check: Option<Instant>,
    /// Development builds suppress tick-triggered checks so reload prompts
    /// do not interrupt local workflows. Activity-transition checks still
    /// run.
    pub development_build: bool,
}

impl MonitorConfig {
    /// Create a config with the given minimum check spacing.
    ///
    /// # Errors
    ///
    /// Returns [`OtaError::Config`] when the interval is zero or too small
    /// to derive a nonzero tick period.
    pub fn new(monitor_interval: Duration) -> Result<Self> {
        if monitor_interval.is_zero() {
            return Err(OtaError::Config(
                "monitor interval must be positive".to_owned(),
            ));
        }
        if (monitor_interval / TICK_DIVISOR).is_zero() {
            return Err(OtaError::Config(
                "monitor interval too small to derive a tick period".to_owned(),
            ));
        }
        Ok(Self {
            monitor_interval,
            last_check: None,
            development_build: false,
        })
    }

    /// Seed the elapsed-time gate with a known last check time.
    pub fn with_last_check(mut self, at: Instant) -> Self {
        self.last_check = Some(at);
        self
    }

    /// Mark this a development build.
    pub fn with_development_build(mut self, development_build: bool) -> Self {
        self.development_build = development_build;
        self
    }

    /// Timer period for gate sampling, a quarter of the monitor interval.
    ///
    /// Always strictly smaller than `monitor_interval`, so the gate is
    /// sampled with finer granularity than its own threshold.
    pub fn tick_period(&self) -> Duration {
        self.monitor_interval / TICK_DIVISOR
    }
}
