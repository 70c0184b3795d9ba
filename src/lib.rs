//! Otawatch: over-the-air update monitoring glue.
//!
//! Keeps a host-embedded application current by periodically checking for
//! and applying an OTA update, both while the app is in the foreground
//! (activity-gated polling) and while it is backgrounded (an OS-scheduled
//! refresh task). All real update work is delegated to host capabilities;
//! this crate owns only the triggering logic around them.
//!
//! # Architecture
//!
//! Three independent entry points share the host capability traits:
//! - **Update client**: failure-swallowing wrappers around the host
//!   check/fetch calls, with development-mode alert surfacing
//! - **Foreground poller**: a cancellable background task driven by app
//!   activity transitions and a repeating timer
//! - **Background refresh**: one-shot registration of a named
//!   check/fetch/reload task with the OS scheduler

pub mod activity;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod poller;
pub mod registrar;

pub use activity::{ActivityState, activity_channel};
pub use client::UpdateClient;
pub use config::MonitorConfig;
pub use error::{OtaError, Result};
pub use events::UpdateEvent;
pub use host::{AlertSink, TaskRegistration, TaskScheduler, UpdateCheck, UpdateManager};
pub use poller::{ForegroundPoller, PollerHandle};
pub use registrar::{BACKGROUND_TASK_NAME, MINIMUM_INTERVAL, register_background_refresh};
