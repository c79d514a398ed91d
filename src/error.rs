use thiserror::Error;

/// Errors reported by checked cursor operations
///
/// Unchecked mutations (`advance`, `advance_by`, ...) treat out-of-range use as a
/// precondition violation instead; only reads and the `try_*` family report here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LazicombError {
    /// Dereferenced a cursor sitting on its end position
    #[error("Cannot read value at end (position {position})")]
    CannotReadValueAtEnd { position: usize },

    #[error("Already at end")]
    AlreadyAtEnd,

    #[error("Already at begin")]
    AlreadyAtBegin,

    /// An offset would move the cursor outside `[begin, end]`
    #[error("Offset {offset} out of range: only {available} positions available in that direction")]
    OffsetOutOfRange { offset: isize, available: isize },
}
