use thiserror::Error;

/// Error raised when a range cannot be built from the given offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRangeError {
    /// The end offset lies before the start offset
    #[error("invalid range: end {end} is before start {start}")]
    EndBeforeStart { start: usize, end: usize },

    /// `start + length` does not fit in an offset
    #[error("invalid range: start {start} with length {length} overflows")]
    LengthOverflow { start: usize, length: usize },
}
