//! Error types for engine operations.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = core::result::Result<T, VerletError>;

/// Errors reported by point creation, indexing, linking and stepping.
///
/// All failures are detected before any state is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerletError {
    /// The point store is full.
    #[error("point capacity exceeded (capacity: {capacity})")]
    CapacityExceeded { capacity: usize },

    /// A point id is not below the current point count.
    #[error("point index {index} out of bounds (count: {count})")]
    InvalidIndex { index: usize, count: usize },

    /// A link was requested between a point and itself.
    #[error("cannot link point {index} to itself")]
    SelfLink { index: usize },

    /// A containment box has `min > max` on at least one axis, or a non-finite bound.
    #[error("box bounds are inverted or not finite")]
    InvalidBounds,
}
