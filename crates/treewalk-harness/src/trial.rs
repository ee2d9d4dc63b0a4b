//! Trial loop - build once, walk many times
//!
//! The tree is constructed a single time when the runner is created; only
//! the counting pass sits between the two timestamps of a trial.

use std::io::{self, Write};

use tracing::{debug, info};

use treewalk_core::{ArenaTree, CountMode, Depth, Tree, TreeResult};

use crate::clock::{Stopwatch, WalkTime};
use crate::config::{HarnessConfig, TreeRepr};
use crate::report::SampleWriter;

/// Outcome of one timed counting pass
#[derive(Clone, Copy, Debug)]
pub struct TrialRecord {
    /// Zero-based trial index
    pub trial: u32,
    /// Nodes visited by the pass
    pub nodes: u64,
    /// Wall-clock time of the pass
    pub elapsed: WalkTime,
}

/// Running tallies across a harness run
#[derive(Clone, Copy, Debug, Default)]
pub struct HarnessStats {
    pub trials_run: u64,
    pub build_time: WalkTime,
    pub total_walk_time: WalkTime,
    pub last_walk_time: WalkTime,
    pub min_walk_time: WalkTime,
    pub max_walk_time: WalkTime,
}

impl HarnessStats {
    fn record_walk(&mut self, elapsed: WalkTime) {
        if self.trials_run == 0 {
            self.min_walk_time = elapsed;
            self.max_walk_time = elapsed;
        } else {
            self.min_walk_time = self.min_walk_time.min(elapsed);
            self.max_walk_time = self.max_walk_time.max(elapsed);
        }
        self.trials_run += 1;
        self.last_walk_time = elapsed;
        self.total_walk_time = self.total_walk_time.saturating_add(elapsed);
    }
}

/// The tree under measurement, in whichever representation was configured
enum BenchTree {
    Boxed(Tree),
    Arena(ArenaTree),
}

impl BenchTree {
    fn build(depth: Depth, repr: TreeRepr) -> TreeResult<BenchTree> {
        Ok(match repr {
            TreeRepr::Boxed => BenchTree::Boxed(Tree::build(depth)),
            TreeRepr::Arena => BenchTree::Arena(ArenaTree::build(depth)?),
        })
    }

    fn count(&self, mode: CountMode) -> u64 {
        match self {
            BenchTree::Boxed(t) => t.count_with(mode),
            BenchTree::Arena(t) => t.count_with(mode),
        }
    }
}

/// Owns the tree and drives the timed counting passes
pub struct TrialRunner {
    config: HarnessConfig,
    tree: BenchTree,
    stats: HarnessStats,
}

impl TrialRunner {
    /// Build the tree once, timed. Counting passes never rebuild it.
    pub fn new(config: HarnessConfig) -> TreeResult<TrialRunner> {
        let sw = Stopwatch::start();
        let tree = BenchTree::build(config.depth, config.repr)?;
        let build_time = sw.elapsed();

        if config.time_build {
            info!(
                depth = config.depth.get(),
                nodes = config.depth.expected_nodes(),
                build_secs = build_time.as_secs_f64(),
                "tree built"
            );
        }

        Ok(TrialRunner {
            config,
            tree,
            stats: HarnessStats {
                build_time,
                ..Default::default()
            },
        })
    }

    /// Run the configured number of trials, emitting one sample per trial
    pub fn run<W: Write>(&mut self, sink: &mut SampleWriter<W>) -> io::Result<Vec<TrialRecord>> {
        let mut records = Vec::with_capacity(self.config.trials as usize);

        for trial in 0..self.config.trials {
            let sw = Stopwatch::start();
            let nodes = self.tree.count(self.config.mode);
            let elapsed = sw.elapsed();

            sink.write_sample(elapsed)?;
            debug!(trial, nodes, walk_secs = elapsed.as_secs_f64(), "trial complete");

            self.stats.record_walk(elapsed);
            records.push(TrialRecord {
                trial,
                nodes,
                elapsed,
            });
        }

        Ok(records)
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn stats(&self) -> &HarnessStats {
        &self.stats
    }
}
