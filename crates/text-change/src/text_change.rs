use derive_more::Display;
use log::{debug, trace};
use std::fmt;
use std::sync::Arc;

use crate::error::InvalidRangeError;
use crate::text_provider::Snapshot;
use crate::text_range::TextRange;

/// The pending dirty region between two text snapshots.
///
/// `old_range` indexes into `old_text` and `new_range` into `new_text`. The two
/// ranges describe the same edit and may differ in length. Successive edits are
/// folded together with [`TextChange::combine`] until the consumer re-scans and
/// resets the accumulator.
#[derive(Clone, Default, Display)]
#[display(fmt = "v{} old={} new={}", version, old_range, new_range)]
pub struct TextChange {
    /// Snapshot generation of the most recent edit folded in
    pub version: u64,

    /// Changed range in the previous snapshot
    pub old_range: TextRange,

    /// Changed range in the current snapshot
    pub new_range: TextRange,

    /// Previous text snapshot
    pub old_text: Option<Snapshot>,

    /// Current text snapshot
    pub new_text: Option<Snapshot>,
}

impl TextChange {
    /// Create an empty change with no snapshots attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a change for a single edit at `start` that replaced `old_length`
    /// characters with `new_length` characters
    pub fn from_edit(
        start: usize,
        old_length: usize,
        new_length: usize,
    ) -> Result<Self, InvalidRangeError> {
        Ok(Self {
            old_range: TextRange::from_start_length(start, old_length)?,
            new_range: TextRange::from_start_length(start, new_length)?,
            ..Self::default()
        })
    }

    /// Create a change for a single edit and attach the snapshots it refers to.
    ///
    /// The offsets are not checked against the snapshots.
    pub fn with_snapshots(
        start: usize,
        old_length: usize,
        new_length: usize,
        old_text: Snapshot,
        new_text: Snapshot,
    ) -> Result<Self, InvalidRangeError> {
        let mut change = Self::from_edit(start, old_length, new_length)?;
        change.attach_snapshots(old_text, new_text);
        Ok(change)
    }

    /// Fold an existing change into a fresh accumulator bound to new snapshots
    pub fn from_change(change: &TextChange, old_text: Snapshot, new_text: Snapshot) -> Self {
        let mut accumulator = Self::new();
        accumulator.combine(change);
        accumulator.attach_snapshots(old_text, new_text);
        accumulator
    }

    /// Set the snapshot generation
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Attach the snapshots the ranges index into, replacing any already set
    pub fn attach_snapshots(&mut self, old_text: Snapshot, new_text: Snapshot) {
        debug!(
            "Attaching snapshots to {} (old: {} chars, new: {} chars)",
            self,
            old_text.len(),
            new_text.len()
        );
        self.old_text = Some(old_text);
        self.new_text = Some(new_text);
    }

    /// Reset both ranges to the empty sentinel and drop the snapshot handles.
    /// The version is kept.
    pub fn clear(&mut self) {
        trace!("Clearing {}", self);
        self.old_range = TextRange::EMPTY;
        self.new_range = TextRange::EMPTY;
        self.old_text = None;
        self.new_text = None;
    }

    /// True if no changes are pending
    pub fn is_empty(&self) -> bool {
        self.old_range.is_empty() && self.new_range.is_empty()
    }

    /// Fold `other` into this accumulator.
    ///
    /// An empty `other` is ignored. An empty accumulator takes `other`'s ranges
    /// as they are. Otherwise each range becomes the bounding interval of the
    /// two, so disjoint edits yield one span that also covers the text between
    /// them. The version becomes the larger of the two; snapshot handles are
    /// left alone.
    pub fn combine(&mut self, other: &TextChange) {
        if other.is_empty() {
            trace!("Ignoring empty change {}", other);
            return;
        }

        if self.is_empty() {
            trace!("Adopting {} into empty accumulator", other);
            self.old_range = other.old_range;
            self.new_range = other.new_range;
        } else {
            self.old_range = self.old_range.cover(&other.old_range);
            self.new_range = self.new_range.cover(&other.new_range);
            trace!("Combined {} into {}", other, self);
        }

        self.version = self.version.max(other.version);
    }

    /// Like [`TextChange::combine`], but returns the result and leaves both
    /// operands untouched. Snapshot handles come from `self`.
    pub fn union(&self, other: &TextChange) -> TextChange {
        let mut combined = self.clone();
        combined.combine(other);
        combined
    }

    /// Hand the pending change to the consumer and start a new accumulation
    /// cycle at the same version
    pub fn take(&mut self) -> TextChange {
        let fresh = Self::new().with_version(self.version);
        let pending = std::mem::replace(self, fresh);
        trace!("Took pending change {}", pending);
        pending
    }

    /// How far offsets after the dirty region moved between the two snapshots.
    ///
    /// Returns `None` if the shift does not fit in an `isize`.
    pub fn length_delta(&self) -> Option<isize> {
        let old_length = isize::try_from(self.old_range.length()).ok()?;
        let new_length = isize::try_from(self.new_range.length()).ok()?;
        new_length.checked_sub(old_length)
    }

    /// Resolve `old_range` against the old snapshot.
    ///
    /// Returns `None` if no snapshot is attached or the range lies outside it.
    pub fn old_slice(&self) -> Option<String> {
        self.old_text.as_ref()?.text(self.old_range)
    }

    /// Resolve `new_range` against the new snapshot.
    ///
    /// Returns `None` if no snapshot is attached or the range lies outside it.
    pub fn new_slice(&self) -> Option<String> {
        self.new_text.as_ref()?.text(self.new_range)
    }
}

// Snapshots compare by identity, never by content
impl PartialEq for TextChange {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.old_range == other.old_range
            && self.new_range == other.new_range
            && same_snapshot(&self.old_text, &other.old_text)
            && same_snapshot(&self.new_text, &other.new_text)
    }
}

impl Eq for TextChange {}

impl fmt::Debug for TextChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextChange")
            .field("version", &self.version)
            .field("old_range", &self.old_range)
            .field("new_range", &self.new_range)
            .field("old_text_len", &self.old_text.as_ref().map(|text| text.len()))
            .field("new_text_len", &self.new_text.as_ref().map(|text| text.len()))
            .finish()
    }
}

fn same_snapshot(a: &Option<Snapshot>, b: &Option<Snapshot>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>(),
        (None, None) => true,
        _ => false,
    }
}
