use core::fmt;

/// Errors reported by the queue operations.
///
/// Every failing operation leaves the queue exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue holds no element to remove.
    Empty,
    /// Storage for a node, a copied value or the queue itself could not be obtained.
    OutOfMemory,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => f.write_str("queue is empty"),
            QueueError::OutOfMemory => f.write_str("out of memory"),
        }
    }
}

impl core::error::Error for QueueError {}
