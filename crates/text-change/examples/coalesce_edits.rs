use anyhow::Result;
use text_change::TextChange;

fn main() -> Result<()> {
    // RUST_LOG=trace shows every coalescing step
    env_logger::init();

    // A burst of edits arriving before the parser gets to run
    let edits = [
        // (start, removed, inserted, version)
        (40, 0, 1, 1),
        (41, 0, 1, 2),
        (12, 3, 0, 3),
        (60, 2, 5, 4),
    ];

    let mut pending = TextChange::new();
    for (start, removed, inserted, version) in edits {
        let edit = TextChange::from_edit(start, removed, inserted)?.with_version(version);
        pending.combine(&edit);
        println!("after {:<24} pending {}", edit.to_string(), pending);
    }

    // An edit that removes and inserts nothing changes nothing
    pending.combine(&TextChange::from_edit(5, 0, 0)?.with_version(99));
    println!("after empty edit          pending {}", pending);

    // The consumer takes the pending change and the accumulator starts over
    let dirty = pending.take();
    println!("\nRe-scan needed:");
    println!("  old range: {} ({} chars)", dirty.old_range, dirty.old_range.length());
    println!("  new range: {} ({} chars)", dirty.new_range, dirty.new_range.length());
    if let Some(delta) = dirty.length_delta() {
        println!("  shift after region: {:+}", delta);
    }
    println!("  accumulator empty again: {}", pending.is_empty());

    Ok(())
}
