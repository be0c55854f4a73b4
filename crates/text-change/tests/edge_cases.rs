use ropey::Rope;
use std::sync::Arc;
use text_change::{Snapshot, TextChange, TextProvider, TextRange};

#[test]
fn test_insertion_at_origin_is_not_overwritten() {
    // Typing at the very start of the document
    let mut accumulator = TextChange::from_edit(0, 0, 3).unwrap();
    assert!(!accumulator.is_empty());
    assert_eq!(accumulator.old_range, TextRange::EMPTY);

    // A later edit further down must extend the dirty region, not replace it
    accumulator.combine(&TextChange::from_edit(10, 2, 2).unwrap());

    assert_eq!(accumulator.old_range, TextRange::new(0, 12).unwrap());
    assert_eq!(accumulator.new_range, TextRange::new(0, 12).unwrap());
}

#[test]
fn test_zero_length_edit_is_ignored() {
    let mut accumulator = TextChange::from_edit(5, 1, 1).unwrap();

    accumulator.combine(&TextChange::from_edit(100, 0, 0).unwrap());

    assert_eq!(accumulator.old_range, TextRange::new(5, 6).unwrap());
}

#[test]
fn test_slices_out_of_bounds() {
    let old: Snapshot = Arc::new(Rope::from_str("short"));
    let new: Snapshot = Arc::new(Rope::from_str("shorter"));

    // Attaching does not check offsets against the snapshots
    let change = TextChange::with_snapshots(4, 10, 3, old, new).unwrap();

    assert_eq!(change.old_slice(), None);
    assert_eq!(change.new_slice().as_deref(), Some("ter"));
}

#[test]
fn test_slices_without_snapshots() {
    let change = TextChange::from_edit(0, 1, 1).unwrap();

    assert_eq!(change.old_slice(), None);
    assert_eq!(change.new_slice(), None);
}

#[test]
fn test_unicode_offsets_are_characters() {
    let text = "Line 2 🚀\nLine 3 😊\n";
    let rope = Rope::from_str(text);
    let string = text.to_string();
    let range = TextRange::new(7, 8).unwrap();

    assert_eq!(TextProvider::len(&rope), 18);
    assert_eq!(TextProvider::len(&string), 18);
    assert_eq!(TextProvider::text(&rope, range).as_deref(), Some("🚀"));
    assert_eq!(TextProvider::text(&string, range).as_deref(), Some("🚀"));
    assert_eq!(TextProvider::char_at(text, 16), Some('😊'));
    assert_eq!(TextProvider::char_at(text, 18), None);
}

#[test]
fn test_provider_bounds() {
    let text = "abc";
    let rope = Rope::from_str(text);

    // The full range and an empty range at the end are valid
    let full = TextRange::new(0, 3).unwrap();
    let at_end = TextRange::new(3, 3).unwrap();
    let past_end = TextRange::new(2, 4).unwrap();

    assert_eq!(TextProvider::text(text, full).as_deref(), Some("abc"));
    assert_eq!(TextProvider::text(text, at_end).as_deref(), Some(""));
    assert_eq!(TextProvider::text(text, past_end), None);
    assert_eq!(TextProvider::text(&rope, past_end), None);
    assert!(TextProvider::is_empty(""));
    assert!(!TextProvider::is_empty(&rope));
}

#[test]
fn test_string_snapshots() {
    let old: Snapshot = Arc::new(String::from("fn main() {}"));
    let new: Snapshot = Arc::new(String::from("fn main() { run(); }"));

    let change = TextChange::with_snapshots(11, 0, 8, old, new).unwrap();

    assert_eq!(change.new_slice().as_deref(), Some(" run(); "));
}
