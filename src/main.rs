//! deskmon binary: wires the collaborators and runs both monitoring units.

use deskmon::config::Config;
use deskmon::database::{Database, RecordSink};
use deskmon::machine;
use deskmon::monitor::{
    run_activity_monitor, run_sampling_window, InteractionCounter, SegmenterConfig,
};
use deskmon::sources;
use deskmon::supervisor::supervise;
use std::sync::Arc;
use std::thread;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("deskmon=info")),
        )
        .init();

    let config = Config::load()?;
    let machine_id = machine::machine_id();
    tracing::info!(machine = %machine_id, "Starting background monitoring agent");

    // No useful monitoring can happen without a sink, so failure here is
    // fatal rather than supervised.
    let sink: Arc<dyn RecordSink> = Arc::new(Database::open(&config.database_file())?);

    let cooldown = config.retry_cooldown();

    // Unit 1: key/click interaction counting in fixed sampling windows.
    let interactions = {
        let sink = Arc::clone(&sink);
        let machine_id = machine_id.clone();
        let window = config.sample_window();
        thread::Builder::new()
            .name("interactions".into())
            .spawn(move || {
                let counter = InteractionCounter::new(sources::default_input_source());
                supervise("interactions", cooldown, || {
                    run_sampling_window(&counter, sink.as_ref(), &machine_id, window)
                })
            })?
    };

    // Unit 2: foreground-window segmentation and focus sessions.
    let activity = {
        let sink = Arc::clone(&sink);
        let segmenter_config = SegmenterConfig {
            poll_interval: config.poll_interval(),
            focus_threshold: config.focus_threshold(),
        };
        thread::Builder::new().name("activity".into()).spawn(move || {
            let resolver = sources::default_window_resolver();
            supervise("activity", cooldown, || {
                run_activity_monitor(
                    resolver.as_ref(),
                    sink.as_ref(),
                    &machine_id,
                    &segmenter_config,
                )
            })
        })?
    };

    // The units run until the process is terminated.
    let _ = interactions.join();
    let _ = activity.join();
    Ok(())
}
