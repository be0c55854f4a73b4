use anyhow::{Context, Result};
use ropey::Rope;
use std::sync::Arc;
use text_change::{Snapshot, TextChange};

fn main() -> Result<()> {
    env_logger::init();

    let old_text = Rope::from_str("fn main() {\n    println!(\"Hello, world!\");\n}\n");
    let mut new_text = old_text.clone();

    // Replace "world" with "Rust"
    let start = new_text.to_string().find("world").context("missing word")?;
    let start = new_text.byte_to_char(start);
    new_text.remove(start..start + 5);
    new_text.insert(start, "Rust");

    let old: Snapshot = Arc::new(old_text);
    let new: Snapshot = Arc::new(new_text);
    let change = TextChange::with_snapshots(start, 5, 4, old, new)?.with_version(1);

    println!("Change: {}", change);
    println!("{:#?}", change);
    println!(
        "Old text in range: {:?}",
        change.old_slice().context("old range outside snapshot")?
    );
    println!(
        "New text in range: {:?}",
        change.new_slice().context("new range outside snapshot")?
    );

    Ok(())
}
