use thiserror::Error;

/// Failures reported by [`DynamicArrayList`](crate::DynamicArrayList).
///
/// A failed call never modifies the list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("invalid initial capacity: {capacity}")]
    InvalidArgument { capacity: i64 },
    #[error("index {index} out of range for list of size {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
