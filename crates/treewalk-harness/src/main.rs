//! treewalk - perfect-binary-tree walk benchmark
//!
//! Builds a depth-27 perfect binary tree once, then runs twenty timed
//! counting passes over it, printing one elapsed-seconds line per pass to
//! stdout. Takes no arguments. Diagnostics (build time, run summary) go to
//! stderr through `tracing`, gated by RUST_LOG.
//!
//! The default workload allocates 2^27 - 1 (about 134 million) nodes up
//! front and keeps them live for the whole run; on a machine without a few
//! gigabytes of free heap the allocation is fatal and unrecoverable.

use std::io;

use treewalk_harness::{HarnessConfig, SampleWriter, TrialRunner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut runner = TrialRunner::new(HarnessConfig::default())?;

    let stdout = io::stdout();
    let mut sink = SampleWriter::new(stdout.lock());
    runner.run(&mut sink)?;

    let stats = runner.stats();
    tracing::info!(
        trials = stats.trials_run,
        build_secs = stats.build_time.as_secs_f64(),
        total_walk_secs = stats.total_walk_time.as_secs_f64(),
        min_walk_secs = stats.min_walk_time.as_secs_f64(),
        max_walk_secs = stats.max_walk_time.as_secs_f64(),
        "walk complete"
    );

    Ok(())
}
