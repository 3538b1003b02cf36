//! Core monitoring logic.
//!
//! This module contains the interaction counter, the activity segmenter
//! state machine, and the categorization policies they apply.

pub mod categorizer;
pub mod interactions;
pub mod keys;
pub mod segmenter;

pub use categorizer::{categorize, ActivityCategory};
pub use interactions::{
    run_sampling_window, InteractionCounter, InteractionCounts, SampleWindow, WindowCounters,
};
pub use keys::{KeyCategory, KeyPress, NamedKey};
pub use segmenter::{
    run_activity_monitor, ClosedSegment, SegmentClose, Segmenter, SegmenterConfig,
};

/// Errors raised inside a monitoring unit's loop body.
///
/// These are caught by the supervising loop, which logs them and restarts
/// the unit after a fixed cooldown.
#[derive(Debug)]
pub enum MonitorError {
    /// An input listener could not be attached to its raw event source.
    ListenerAttach(String),
}

impl std::fmt::Display for MonitorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonitorError::ListenerAttach(e) => write!(f, "failed to attach input listener: {e}"),
        }
    }
}

impl std::error::Error for MonitorError {}
