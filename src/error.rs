use thiserror::Error;

/// Result type for queue operations.
pub type Result<T> = core::result::Result<T, QueueError>;

/// Errors reported by queue operations.
///
/// A failing operation never leaves a partially modified queue behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Backing storage could not be obtained.
    #[error("failed to allocate {size} bytes")]
    Allocation { size: usize },
    /// The operation is not defined for the queue in its current state,
    /// e.g. removing from an empty queue or inserting into an absent one.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}
