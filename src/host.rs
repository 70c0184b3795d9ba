//! Host capability seams for update management and task scheduling.
//!
//! Everything with real side effects lives behind these traits. The
//! embedding shell wires production implementations; tests substitute
//! doubles. This crate never talks to the network or the OS scheduler
//! directly.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Result of one check against the update-distribution service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateCheck {
    /// Whether a newer build is available to fetch.
    pub is_available: bool,
    /// Host-supplied explanation when no update applies.
    pub reason: Option<String>,
}

/// Host update-management operations.
///
/// The distribution service decides whether a new build exists and owns
/// packaging, signing, and rollout targeting. These calls are opaque
/// async operations from this crate's point of view.
#[async_trait]
pub trait UpdateManager: Send + Sync {
    /// Ask the distribution service whether a newer build exists.
    async fn check_for_update(&self) -> Result<UpdateCheck>;

    /// Download the available update payload.
    async fn fetch_update(&self) -> Result<()>;

    /// Restart the application into the fetched build.
    async fn reload(&self) -> Result<()>;
}

/// Boxed async task body handed to the host scheduler.
pub type TaskBody = Box<dyn Fn() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Registration options for an OS-scheduled background task.
///
/// `minimum_interval` is a requested lower bound, not a guarantee; the OS
/// may coalesce, delay, or skip runs entirely under its power policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRegistration {
    /// Stable task identifier. Re-registering the same name is idempotent.
    pub task_name: String,
    /// Requested minimum spacing between runs.
    pub minimum_interval: Duration,
}

/// OS background task scheduling surface.
#[async_trait]
pub trait TaskScheduler: Send + Sync {
    /// Associate `body` with `name`. Defining a name twice replaces the body.
    async fn define_task(&self, name: &str, body: TaskBody) -> Result<()>;

    /// Request periodic execution of a previously defined task.
    async fn register_task(&self, registration: &TaskRegistration) -> Result<()>;
}

/// Development-mode error surface.
///
/// The host shell presents the message as a blocking dialog. Production
/// wiring omits the sink entirely.
pub trait AlertSink: Send + Sync {
    /// Present `message` to the developer, blocking until dismissed.
    fn blocking_alert(&self, message: &str);
}
