// Change tracking for incremental reparsing
// This crate describes the dirty region between two text snapshots and
// coalesces bursts of edits into a single pending change.

mod error;
mod text_change;
mod text_provider;
mod text_range;

pub use error::InvalidRangeError;
pub use text_change::TextChange;
pub use text_provider::{Snapshot, TextProvider};
pub use text_range::TextRange;
