//! No-op collaborator implementations.
//!
//! Used on platforms without a hook backend, and as the default wiring for
//! the binary. The input source delivers no events; the window resolver
//! reports every window as undetectable.

use super::{InputSource, ListenerGuard, WindowObservation, WindowResolver};
use crate::monitor::interactions::WindowCounters;
use crate::monitor::MonitorError;
use std::sync::Arc;

/// Input source that never delivers an event.
pub struct NoopInputSource;

struct NoopListener;

impl ListenerGuard for NoopListener {}

impl InputSource for NoopInputSource {
    fn listen(
        &self,
        _counters: Arc<WindowCounters>,
    ) -> Result<Box<dyn ListenerGuard>, MonitorError> {
        Ok(Box::new(NoopListener))
    }
}

/// Window resolver that reports every window as undetectable.
pub struct NoopWindowResolver;

impl WindowResolver for NoopWindowResolver {
    fn active_window(&self) -> WindowObservation {
        WindowObservation::undetectable()
    }
}
