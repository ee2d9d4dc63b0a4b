//! Sample output
//!
//! The product surface of the benchmark is exactly one line per trial on
//! stdout: elapsed seconds with nine fractional digits, full nanosecond
//! resolution. Everything else (build time, running stats) goes through
//! `tracing` on stderr.

use std::io::{self, Write};

use crate::clock::WalkTime;

/// Writes one elapsed-seconds sample per line
pub struct SampleWriter<W: Write> {
    out: W,
}

impl<W: Write> SampleWriter<W> {
    pub fn new(out: W) -> Self {
        SampleWriter { out }
    }

    pub fn write_sample(&mut self, elapsed: WalkTime) -> io::Result<()> {
        writeln!(self.out, "{:.9}", elapsed.as_secs_f64())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
