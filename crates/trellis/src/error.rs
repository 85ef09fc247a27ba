//! Error types for item adapters.

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors reported by item adapters.
///
/// Adapters only fail on precondition violations; lookups that miss return
/// `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// An item index was outside `0..count`.
    #[error("Item index {index} out of range for adapter with {count} items")]
    IndexOutOfRange { index: usize, count: usize },
}

impl AdapterError {
    /// Create an index-out-of-range error.
    pub fn index_out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange { index, count }
    }
}
