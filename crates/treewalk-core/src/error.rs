//! Error types for the tree benchmark

use thiserror::Error;

/// Core treewalk errors
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Depth out of range: {depth} exceeds maximum {max}")]
    DepthOutOfRange { depth: u32, max: u32 },

    #[error("Arena slot limit exceeded: {nodes} nodes, limit {limit}")]
    SlotLimitExceeded { nodes: u64, limit: u64 },
}

/// Result type for treewalk operations
pub type TreeResult<T> = Result<T, TreeError>;
