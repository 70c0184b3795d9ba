//! Background refresh task registration.
//!
//! Run once at process start: defines a named task that checks for an
//! update, fetches it when available, and reloads the application, then
//! asks the OS scheduler to run it at a best-effort minimum interval
//! while the app is not foregrounded. Re-running the routine is safe;
//! the host keys both steps on the task name.

use crate::host::{TaskBody, TaskRegistration, TaskScheduler, UpdateManager};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Stable identifier for the background refresh task.
pub const BACKGROUND_TASK_NAME: &str = "otawatch-refresh";

/// Requested lower bound on background run spacing. The OS may coalesce,
/// delay, or skip invocations entirely under its power policy.
pub const MINIMUM_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Default registration options for the refresh task.
pub fn default_registration() -> TaskRegistration {
    TaskRegistration {
        task_name: BACKGROUND_TASK_NAME.to_owned(),
        minimum_interval: MINIMUM_INTERVAL,
    }
}

/// Build the refresh task body: check, fetch when available, reload.
///
/// The steps run sequentially; the first failing step aborts the rest of
/// that invocation, with no retry. The body always resolves, so the
/// scheduler never observes an error.
pub fn refresh_task_body(manager: Arc<dyn UpdateManager>) -> TaskBody {
    Box::new(move || {
        let manager = Arc::clone(&manager);
        Box::pin(async move {
            let check = match manager.check_for_update().await {
                Ok(check) => check,
                Err(e) => {
                    warn!("background update check failed: {e}");
                    return;
                }
            };

            if !check.is_available {
                debug!(reason = ?check.reason, "no update available");
                return;
            }

            if let Err(e) = manager.fetch_update().await {
                warn!("background update fetch failed: {e}");
                return;
            }

            info!("update fetched, reloading application");
            if let Err(e) = manager.reload().await {
                warn!("reload into fetched update failed: {e}");
            }
        })
    })
}

/// Define and register the background refresh task.
///
/// Definition and registration failures are logged and dropped. Background
/// refresh is best-effort maintenance; a host that refuses the
/// registration leaves the app exactly where it was.
pub async fn register_background_refresh(
    scheduler: &dyn TaskScheduler,
    manager: Arc<dyn UpdateManager>,
) {
    let body = refresh_task_body(manager);
    if let Err(e) = scheduler.define_task(BACKGROUND_TASK_NAME, body).await {
        warn!("cannot define background refresh task: {e}");
        return;
    }

    let registration = default_registration();
    match scheduler.register_task(&registration).await {
        Ok(()) => info!(
            task = BACKGROUND_TASK_NAME,
            interval = ?registration.minimum_interval,
            "background refresh registered"
        ),
        Err(e) => warn!("cannot register background refresh task: {e}"),
    }
}
