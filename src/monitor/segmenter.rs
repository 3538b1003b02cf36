//! Activity segmentation and focus-session detection.
//!
//! The segmenter is a two-state machine driven by foreground-window polls:
//! no open segment (only immediately after start), or exactly one open
//! segment. A poll that observes a different program closes the open
//! segment, categorizes it, and opens a new one; the closed segment is the
//! one emitted. Title-only changes never close a segment.

use super::categorizer::{categorize, ActivityCategory};
use super::MonitorError;
use crate::database::RecordSink;
use crate::sources::{WindowObservation, WindowResolver};
use chrono::{DateTime, Utc};
use std::thread;
use std::time::Duration;

/// A segment that has been closed by a program transition.
#[derive(Debug, Clone)]
pub struct ClosedSegment {
    /// Program in focus for the segment. `None` for undetectable windows.
    pub program: Option<String>,

    /// Window title captured when the segment opened.
    pub title: Option<String>,

    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,

    /// Fractional seconds between start and end.
    pub duration_secs: f64,

    pub category: ActivityCategory,
}

/// A closed segment plus whether it qualified as a focus session.
#[derive(Debug, Clone)]
pub struct SegmentClose {
    pub segment: ClosedSegment,

    /// True when the segment's duration met the focus threshold. The
    /// threshold is inclusive and category-agnostic.
    pub is_focus_session: bool,
}

#[derive(Debug)]
struct OpenSegment {
    program: Option<String>,
    title: Option<String>,
    start: DateTime<Utc>,
}

/// Tracks the currently open activity segment and closes it on program
/// transitions.
#[derive(Debug)]
pub struct Segmenter {
    open: Option<OpenSegment>,
    focus_threshold_secs: f64,
}

impl Segmenter {
    pub fn new(focus_threshold: Duration) -> Self {
        Self {
            open: None,
            focus_threshold_secs: focus_threshold.as_secs_f64(),
        }
    }

    /// Feeds one poll observation into the state machine.
    ///
    /// Returns the closed segment when `observation` carries a different
    /// program than the open segment. The very first observation only opens
    /// a segment and never emits. Program equality includes the undetectable
    /// `None` identity, so transitions to and from unreadable windows close
    /// segments like any other change.
    pub fn observe(
        &mut self,
        observation: WindowObservation,
        now: DateTime<Utc>,
    ) -> Option<SegmentClose> {
        let closed = match self.open.take() {
            // First observation after start: open a segment, emit nothing.
            None => {
                self.open = Some(OpenSegment {
                    program: observation.program,
                    title: observation.title,
                    start: now,
                });
                return None;
            }
            // Same program: the segment stays open as-is.
            Some(open) if open.program == observation.program => {
                self.open = Some(open);
                return None;
            }
            Some(open) => open,
        };

        self.open = Some(OpenSegment {
            program: observation.program,
            title: observation.title,
            start: now,
        });

        let duration_secs = (now - closed.start)
            .num_milliseconds()
            .max(0) as f64
            / 1000.0;
        let category = categorize(closed.program.as_deref(), closed.title.as_deref());

        Some(SegmentClose {
            is_focus_session: duration_secs >= self.focus_threshold_secs,
            segment: ClosedSegment {
                program: closed.program,
                title: closed.title,
                start: closed.start,
                end: now,
                duration_secs,
                category,
            },
        })
    }

    pub fn has_open_segment(&self) -> bool {
        self.open.is_some()
    }
}

/// Configuration for the activity monitoring loop.
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// How often to poll the foreground window.
    pub poll_interval: Duration,

    /// Minimum closed-segment duration for a focus session.
    pub focus_threshold: Duration,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            focus_threshold: Duration::from_secs(10 * 60),
        }
    }
}

/// Persists a closed segment: always one usage record, plus one
/// focus-session record when the segment qualified.
pub(crate) fn record_close(close: &SegmentClose, sink: &dyn RecordSink, machine_id: &str) {
    let segment = &close.segment;

    sink.record_usage(
        machine_id,
        segment.program.as_deref(),
        segment.title.as_deref(),
        segment.start,
        segment.end,
        segment.duration_secs,
        segment.category.label(),
    );
    tracing::info!(
        program = segment.program.as_deref().unwrap_or("<undetectable>"),
        category = segment.category.label(),
        duration_secs = segment.duration_secs,
        "Activity segment closed"
    );

    if close.is_focus_session {
        sink.record_focus_session(
            machine_id,
            segment.program.as_deref(),
            segment.start,
            segment.end,
            segment.duration_secs,
        );
        tracing::info!(
            program = segment.program.as_deref().unwrap_or("<undetectable>"),
            duration_mins = segment.duration_secs / 60.0,
            "Focus session recorded"
        );
    }
}

/// Runs the activity monitoring loop indefinitely.
///
/// This is the loop body the activity supervisor runs; a supervisor restart
/// constructs a fresh segmenter, discarding any open segment.
pub fn run_activity_monitor(
    resolver: &dyn WindowResolver,
    sink: &dyn RecordSink,
    machine_id: &str,
    config: &SegmenterConfig,
) -> Result<(), MonitorError> {
    tracing::info!(
        poll_interval_secs = config.poll_interval.as_secs(),
        focus_threshold_secs = config.focus_threshold.as_secs(),
        "Activity monitor started"
    );

    let mut segmenter = Segmenter::new(config.focus_threshold);

    loop {
        let observation = resolver.active_window();
        if let Some(close) = segmenter.observe(observation, Utc::now()) {
            record_close(&close, sink, machine_id);
        }

        thread::sleep(config.poll_interval);
    }
}
