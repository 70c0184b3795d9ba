//! Host application activity states.
//!
//! The embedding shell reports foreground/background transitions through a
//! `watch` channel. The poller reacts only to [`ActivityState::Active`].

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Application activity as reported by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityState {
    /// App is foregrounded and receiving input.
    Active,
    /// App is fully backgrounded.
    Background,
    /// App is visible but not receiving input (transitioning, obscured by
    /// a system overlay, or in the multitasking switcher).
    Inactive,
}

impl ActivityState {
    /// Returns `true` for the foreground [`Active`](Self::Active) state.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for ActivityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Background => write!(f, "background"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// Create an activity channel seeded with `initial`.
///
/// The sender side belongs to the host bridge; the receiver feeds a
/// [`ForegroundPoller`](crate::poller::ForegroundPoller).
pub fn activity_channel(
    initial: ActivityState,
) -> (watch::Sender<ActivityState>, watch::Receiver<ActivityState>) {
    watch::channel(initial)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn only_active_is_active() {
        assert!(ActivityState::Active.is_active());
        assert!(!ActivityState::Background.is_active());
        assert!(!ActivityState::Inactive.is_active());
    }

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(ActivityState::Active.to_string(), "active");
        assert_eq!(ActivityState::Background.to_string(), "background");
        assert_eq!(ActivityState::Inactive.to_string(), "inactive");
    }

    #[test]
    fn deserializes_host_bridge_payloads() {
        // The host shell delivers transitions as lowercase JSON strings.
        let state: ActivityState = serde_json::from_str(r#""active""#).unwrap();
        assert_eq!(state, ActivityState::Active);
        let state: ActivityState = serde_json::from_str(r#""background""#).unwrap();
        assert_eq!(state, ActivityState::Background);
        let state: ActivityState = serde_json::from_str(r#""inactive""#).unwrap();
        assert_eq!(state, ActivityState::Inactive);
    }

    #[tokio::test]
    async fn channel_delivers_transitions() {
        let (tx, mut rx) = activity_channel(ActivityState::Background);
        assert_eq!(*rx.borrow(), ActivityState::Background);

        tx.send(ActivityState::Active).unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), ActivityState::Active);
    }
}
