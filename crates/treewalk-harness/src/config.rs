//! Harness configuration

use treewalk_core::{CountMode, Depth};

/// Tree representation under measurement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeRepr {
    /// Individually boxed nodes linked by owning pointers
    Boxed,
    /// One contiguous node table linked by indices
    Arena,
}

impl Default for TreeRepr {
    fn default() -> Self {
        TreeRepr::Boxed
    }
}

/// Harness configuration
#[derive(Clone, Copy, Debug)]
pub struct HarnessConfig {
    /// Levels in the tree every counting pass walks
    pub depth: Depth,
    /// Number of timed counting passes
    pub trials: u32,
    /// Traversal used by the counting passes
    pub mode: CountMode,
    /// Representation the tree is built in
    pub repr: TreeRepr,
    /// Log the one-off construction time of the tree
    pub time_build: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        // The reference workload: one depth-27 tree, twenty timed walks
        HarnessConfig {
            depth: Depth::of(27),
            trials: 20,
            mode: CountMode::Recursive,
            repr: TreeRepr::Boxed,
            time_build: true,
        }
    }
}

impl HarnessConfig {
    /// Shallow, fast configuration for tests and smoke runs
    pub fn smoke() -> Self {
        HarnessConfig {
            depth: Depth::of(10),
            trials: 3,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_workload() {
        let config = HarnessConfig::default();
        assert_eq!(config.depth, Depth::of(27));
        assert_eq!(config.trials, 20);
        assert_eq!(config.mode, CountMode::Recursive);
        assert_eq!(config.repr, TreeRepr::Boxed);
    }

    #[test]
    fn test_smoke_stays_shallow() {
        let config = HarnessConfig::smoke();
        assert!(config.depth < Depth::of(15));
        assert!(config.trials < 10);
    }
}
