use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `peek_top` or `extract_top` on a heap with no live elements.
    #[error("can not take an element from an empty heap")]
    Empty,
    /// A value the sentinel does not strictly dominate. Covers the sentinel
    /// itself and values the predicate can not compare (`NaN`).
    #[error("value is not strictly bounded by the heap sentinel")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, HeapError>;
