//! Interfaces to the platform collaborators the core consumes.
//!
//! The agent never talks to OS hooks directly. It observes the foreground
//! window through [`WindowResolver`] and receives raw key/click events
//! through [`InputSource`]. Platform backends implement these traits; tests
//! substitute fakes.

pub mod noop;

pub use noop::{NoopInputSource, NoopWindowResolver};

use crate::monitor::interactions::WindowCounters;
use crate::monitor::MonitorError;
use std::sync::Arc;

/// One observation of the foreground window.
///
/// `(None, None)` is the "undetectable window" identity, returned when the
/// owning process cannot be inspected (access denied, process vanished).
/// It participates in transition detection like any other identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowObservation {
    /// Executable name of the foreground process, if resolvable.
    pub program: Option<String>,

    /// Title of the foreground window, if resolvable.
    pub title: Option<String>,
}

impl WindowObservation {
    pub fn new(program: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            program: Some(program.into()),
            title: Some(title.into()),
        }
    }

    /// The observation reported when the window owner cannot be inspected.
    pub fn undetectable() -> Self {
        Self {
            program: None,
            title: None,
        }
    }
}

/// Resolves the currently focused window.
///
/// Implementations must report [`WindowObservation::undetectable`] rather
/// than failing when the owning process cannot be inspected.
pub trait WindowResolver: Send + Sync {
    fn active_window(&self) -> WindowObservation;
}

/// Raw keyboard/mouse event source.
///
/// `listen` attaches the platform listeners and starts delivering press
/// events into `counters` asynchronously. Delivery stops when the returned
/// guard is dropped; events already in flight at that boundary may still
/// land, which is accepted slop, not a correctness issue.
pub trait InputSource: Send + Sync {
    fn listen(&self, counters: Arc<WindowCounters>) -> Result<Box<dyn ListenerGuard>, MonitorError>;
}

/// Handle that keeps listeners attached for as long as it lives.
pub trait ListenerGuard: Send {}

/// Returns the input source wired into the binary.
///
/// Real hook backends plug in here; without one, the agent runs with a
/// no-op source and records empty sampling windows.
pub fn default_input_source() -> Arc<dyn InputSource> {
    Arc::new(NoopInputSource)
}

/// Returns the window resolver wired into the binary.
pub fn default_window_resolver() -> Arc<dyn WindowResolver> {
    Arc::new(NoopWindowResolver)
}
