//! deskmon — background user-activity monitoring agent.
//!
//! Two independent monitoring units run on their own threads and flush to a
//! shared SQLite sink, keyed by machine identifier:
//!
//! - the **interaction counter** accumulates categorized key-press and click
//!   counts over fixed sampling windows ([`monitor::interactions`]);
//! - the **activity segmenter** polls the foreground window, closes segments
//!   on program transitions, categorizes them, and promotes long segments to
//!   focus sessions ([`monitor::segmenter`]).
//!
//! Platform specifics (input hooks, foreground-window lookup) sit behind the
//! traits in [`sources`]; persistence sits behind [`database::RecordSink`].

pub mod config;
pub mod database;
pub mod machine;
pub mod monitor;
pub mod sources;
pub mod supervisor;
