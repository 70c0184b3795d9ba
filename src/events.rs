//! Update lifecycle events for UI and observability.
//!
//! Intentionally lightweight so the client can emit without blocking a
//! check in progress. Delivery is best-effort: a closed receiver is
//! ignored.

/// Events describing what the update client is doing "right now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateEvent {
    /// A check against the update service has started.
    CheckStarted,
    /// Check finished. `reason` is the host's no-update explanation,
    /// absent when an update is available or the host gave none.
    CheckCompleted { reason: Option<String> },
    /// Check failed. The failure was swallowed; polling continues.
    CheckFailed { message: String },
    /// Update payload fetched and staged by the host.
    DownloadCompleted,
    /// Fetch failed. The failure was swallowed.
    DownloadFailed { message: String },
}
