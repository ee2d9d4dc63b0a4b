//! treewalk Harness - timing loop over the tree walk
//!
//! This crate implements the measurement side of the benchmark:
//! - Monotonic stopwatch and elapsed-time primitive
//! - Harness configuration (depth, trial count, traversal, representation)
//! - Trial loop: build the tree once, time each counting pass
//! - Sample reporting, one elapsed-seconds line per trial

pub mod clock;
pub mod config;
pub mod report;
pub mod trial;

pub use clock::*;
pub use config::*;
pub use report::*;
pub use trial::*;
