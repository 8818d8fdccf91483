//! Error types for the collection planner.

use thiserror::Error;

/// Errors produced by the planning engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input data: empty groups, shapes with too few points,
    /// annotation lists that don't match their shapes.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The batch does not fit on the plate: the combined specimen and blank
    /// count exceeds the well sequence length.
    #[error("plate capacity exceeded: {required} wells required, {available} available")]
    Capacity {
        /// Wells required (specimens + blanks).
        required: usize,
        /// Wells available in the traversal sequence.
        available: usize,
    },

    /// Invalid configuration value (negative epsilon, zero quadrant size,
    /// more blanks than positions to place them in).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal invariant violation. Indicates a bug, not bad input.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for the planning engine.
pub type Result<T> = std::result::Result<T, Error>;
