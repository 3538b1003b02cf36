//! Interaction counting over fixed sampling windows.
//!
//! Listeners push key presses and clicks into a shared accumulator while the
//! counter sleeps out the window; at the end of the window the counters are
//! snapshotted and one record per non-zero category is persisted. No state
//! survives from one window to the next.

use super::keys::{KeyCategory, KeyPress};
use super::MonitorError;
use crate::database::RecordSink;
use crate::sources::InputSource;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Per-window interaction counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionCounts {
    keys: [u64; KeyCategory::ALL.len()],
    clicks: u64,
}

impl InteractionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one key press in its category.
    pub fn record_key(&mut self, key: KeyPress) {
        self.keys[KeyCategory::of(key).index()] += 1;
    }

    /// Records a click transition. Only the press counts; releases are
    /// ignored so a click is never counted twice.
    pub fn record_click(&mut self, pressed: bool) {
        if pressed {
            self.clicks += 1;
        }
    }

    /// Count for a single key category.
    pub fn key_count(&self, category: KeyCategory) -> u64 {
        self.keys[category.index()]
    }

    /// Total clicks recorded in the window.
    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// Key categories with a non-zero count, in stable emission order.
    pub fn non_zero_keys(&self) -> Vec<(KeyCategory, u64)> {
        KeyCategory::ALL
            .iter()
            .filter_map(|&category| {
                let count = self.key_count(category);
                (count > 0).then_some((category, count))
            })
            .collect()
    }
}

/// Thread-safe accumulator shared between the input listeners and the
/// sampling loop for the lifetime of one window.
#[derive(Debug, Default)]
pub struct WindowCounters {
    inner: Mutex<InteractionCounts>,
}

impl WindowCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_key(&self, key: KeyPress) {
        if let Ok(mut counts) = self.inner.lock() {
            counts.record_key(key);
        }
    }

    pub fn record_click(&self, pressed: bool) {
        if let Ok(mut counts) = self.inner.lock() {
            counts.record_click(pressed);
        }
    }

    /// Copies out the current counts.
    pub fn snapshot(&self) -> InteractionCounts {
        self.inner
            .lock()
            .map(|counts| counts.clone())
            .unwrap_or_default()
    }
}

/// One closed sampling window: its time range and everything counted in it.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    pub started: DateTime<Utc>,
    pub ended: DateTime<Utc>,
    pub counts: InteractionCounts,
}

/// Accumulates categorized key and click counts over bounded time windows.
pub struct InteractionCounter {
    source: Arc<dyn InputSource>,
}

impl InteractionCounter {
    pub fn new(source: Arc<dyn InputSource>) -> Self {
        Self { source }
    }

    /// Runs one sampling window.
    ///
    /// Attaches the listeners, sleeps for `window`, detaches, and returns
    /// the window's timestamps and counters. A fresh accumulator is created
    /// per call, so nothing leaks across windows.
    pub fn sample(&self, window: Duration) -> Result<SampleWindow, MonitorError> {
        let counters = Arc::new(WindowCounters::new());
        let started = Utc::now();

        let guard = self.source.listen(Arc::clone(&counters))?;
        thread::sleep(window);
        drop(guard);

        let ended = Utc::now();
        Ok(SampleWindow {
            started,
            ended,
            counts: counters.snapshot(),
        })
    }
}

/// Runs one sampling window and persists its non-zero counts.
///
/// This is the loop body the interactions supervisor re-runs indefinitely:
/// one record per non-zero key category (`keys_<category>`) plus one click
/// record (`click_count`) when any clicks were seen.
pub fn run_sampling_window(
    counter: &InteractionCounter,
    sink: &dyn RecordSink,
    machine_id: &str,
    window: Duration,
) -> Result<(), MonitorError> {
    let sample = counter.sample(window)?;

    let key_counts = sample.counts.non_zero_keys();
    for &(category, count) in &key_counts {
        sink.record_interaction(
            machine_id,
            &format!("keys_{}", category.label()),
            sample.started,
            sample.ended,
            count,
        );
    }

    let clicks = sample.counts.clicks();
    if clicks > 0 {
        sink.record_interaction(machine_id, "click_count", sample.started, sample.ended, clicks);
    }

    tracing::info!(
        categories = key_counts.len(),
        clicks,
        "Sampling window closed"
    );

    Ok(())
}
