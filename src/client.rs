//! Failure-swallowing wrappers around the host update operations.
//!
//! An update check must never crash or block the foreground UI, so every
//! host error is logged and dropped. Development builds additionally route
//! the error text to a blocking alert, the only diagnostic channel the
//! host exposes in that mode.

use crate::error::OtaError;
use crate::events::UpdateEvent;
use crate::host::{AlertSink, UpdateManager};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, warn};

/// Wrapper exposing check/fetch against the update-distribution service.
///
/// Cheap to clone; clones share the in-flight guard, so overlapping
/// invocations from different trigger paths coalesce instead of stacking
/// concurrent host calls.
#[derive(Clone)]
pub struct UpdateClient {
    manager: Arc<dyn UpdateManager>,
    alerts: Option<Arc<dyn AlertSink>>,
    events: Option<mpsc::UnboundedSender<UpdateEvent>>,
    development_build: bool,
    in_flight: Arc<Mutex<()>>,
}

impl UpdateClient {
    /// Create a client over the host update manager.
    pub fn new(manager: Arc<dyn UpdateManager>, development_build: bool) -> Self {
        Self {
            manager,
            alerts: None,
            events: None,
            development_build,
            in_flight: Arc::new(Mutex::new(())),
        }
    }

    /// Route development-mode failures to a blocking alert.
    pub fn with_alert_sink(mut self, alerts: Arc<dyn AlertSink>) -> Self {
        self.alerts = Some(alerts);
        self
    }

    /// Emit lifecycle events for the host UI.
    pub fn with_event_sender(mut self, events: mpsc::UnboundedSender<UpdateEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Check whether a newer build is available.
    ///
    /// Returns the host's no-update reason, or `None` when an update is
    /// available, the host gave no reason, the call failed, or another
    /// operation is already in flight. Never propagates an error.
    pub async fn check_for_update(&self) -> Option<String> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!("update check already in flight, coalescing");
            return None;
        };

        self.emit(UpdateEvent::CheckStarted);
        match self.manager.check_for_update().await {
            Ok(check) => {
                debug!(
                    available = check.is_available,
                    reason = ?check.reason,
                    "update check completed"
                );
                self.emit(UpdateEvent::CheckCompleted {
                    reason: check.reason.clone(),
                });
                check.reason
            }
            Err(e) => {
                self.swallow(&e);
                self.emit(UpdateEvent::CheckFailed {
                    message: e.to_string(),
                });
                None
            }
        }
    }

    /// Fetch the available update payload.
    ///
    /// Same failure-swallowing policy as [`check_for_update`](Self::check_for_update).
    pub async fn download_update(&self) {
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!("update operation already in flight, coalescing");
            return;
        };

        match self.manager.fetch_update().await {
            Ok(()) => self.emit(UpdateEvent::DownloadCompleted),
            Err(e) => {
                self.swallow(&e);
                self.emit(UpdateEvent::DownloadFailed {
                    message: e.to_string(),
                });
            }
        }
    }

    fn swallow(&self, error: &OtaError) {
        warn!("update operation failed: {error}");
        if self.development_build {
            if let Some(alerts) = &self.alerts {
                alerts.blocking_alert(&error.to_string());
            }
        }
    }

    fn emit(&self, event: UpdateEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }
}
