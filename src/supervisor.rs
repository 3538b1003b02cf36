//! Supervising retry loop for the monitoring units.

use crate::monitor::MonitorError;
use std::thread;
use std::time::Duration;

/// Runs `body` indefinitely, restarting it after `cooldown` when it fails.
///
/// A successful body run loops immediately (the interaction counter's body
/// is one sampling window); a failed run is logged and retried after the
/// cooldown from a clean state, discarding whatever the unit was tracking.
pub fn supervise<F>(unit: &str, cooldown: Duration, mut body: F) -> !
where
    F: FnMut() -> Result<(), MonitorError>,
{
    tracing::info!(unit, "Monitoring unit started");

    loop {
        if let Err(e) = body() {
            tracing::error!(
                unit,
                error = %e,
                cooldown_secs = cooldown.as_secs(),
                "Monitoring unit failed; restarting after cooldown"
            );
            thread::sleep(cooldown);
        }
    }
}
