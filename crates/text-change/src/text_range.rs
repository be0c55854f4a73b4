use derive_more::Display;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InvalidRangeError;

/// A half-open interval `[start, end)` of character offsets in one snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[display(fmt = "[{}, {})", start, end)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Range<usize>", into = "Range<usize>")
)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// The "no range" sentinel, `[0, 0)`
    pub const EMPTY: TextRange = TextRange { start: 0, end: 0 };

    /// Create a range from a start and end (exclusive)
    pub fn new(start: usize, end: usize) -> Result<Self, InvalidRangeError> {
        if end < start {
            return Err(InvalidRangeError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a range covering `length` characters from `start`
    pub fn from_start_length(start: usize, length: usize) -> Result<Self, InvalidRangeError> {
        let end = start
            .checked_add(length)
            .ok_or(InvalidRangeError::LengthOverflow { start, length })?;
        Ok(Self { start, end })
    }

    /// The empty sentinel range
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// Get the start of the range (inclusive)
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end of the range (exclusive)
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the number of characters covered
    pub fn length(&self) -> usize {
        self.end - self.start
    }

    /// Check if this range is empty
    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Check if this range contains the given offset
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check if two ranges share at least one offset
    pub fn intersects(&self, other: &TextRange) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    /// The smallest range covering both `self` and `other`.
    ///
    /// Any gap between the two is included in the result.
    pub fn cover(&self, other: &TextRange) -> TextRange {
        TextRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Convert to a standard Range
    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    fn from(range: TextRange) -> Self {
        range.to_range()
    }
}

impl TryFrom<Range<usize>> for TextRange {
    type Error = InvalidRangeError;

    fn try_from(range: Range<usize>) -> Result<Self, Self::Error> {
        TextRange::new(range.start, range.end)
    }
}
