use ropey::Rope;
use std::sync::Arc;

use crate::text_range::TextRange;

/// Read-only access to one immutable snapshot of document text.
///
/// Offsets count characters, not bytes. Access outside `[0, len())`
/// returns `None`.
///
/// `str` cannot sit behind a [`Snapshot`] (`Arc<str>` does not coerce to a
/// trait object); owned snapshots use `String` or `Rope`.
pub trait TextProvider {
    /// Total number of characters in the snapshot
    fn len(&self) -> usize;

    /// Check if the snapshot has no characters
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the character at the given offset
    fn char_at(&self, index: usize) -> Option<char>;

    /// Get the text covered by `range`
    fn text(&self, range: TextRange) -> Option<String>;
}

/// A shared handle to a snapshot.
///
/// A `TextChange` only holds these; cloning a change clones the handle, never
/// the text behind it.
pub type Snapshot = Arc<dyn TextProvider + Send + Sync>;

impl TextProvider for Rope {
    fn len(&self) -> usize {
        self.len_chars()
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.get_char(index)
    }

    fn text(&self, range: TextRange) -> Option<String> {
        self.get_slice(range.to_range()).map(|slice| slice.to_string())
    }
}

impl TextProvider for str {
    fn len(&self) -> usize {
        self.chars().count()
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.chars().nth(index)
    }

    fn text(&self, range: TextRange) -> Option<String> {
        let start = byte_offset(self, range.start())?;
        let end = byte_offset(self, range.end())?;
        Some(self[start..end].to_string())
    }
}

impl TextProvider for String {
    fn len(&self) -> usize {
        TextProvider::len(self.as_str())
    }

    fn char_at(&self, index: usize) -> Option<char> {
        TextProvider::char_at(self.as_str(), index)
    }

    fn text(&self, range: TextRange) -> Option<String> {
        TextProvider::text(self.as_str(), range)
    }
}

/// Map a character offset to a byte offset. One past the last character maps to `text.len()`
fn byte_offset(text: &str, char_offset: usize) -> Option<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .nth(char_offset)
}
