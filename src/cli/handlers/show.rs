//! The `show` command handler.

use anyhow::Result;

use super::resolve_note;
use crate::cli::ShowArgs;
use crate::store::NoteStore;

pub fn handle_show(args: &ShowArgs, store: &NoteStore) -> Result<()> {
    let note = resolve_note(store, &args.note)?;

    println!("Title:    {}", note.title());
    println!("ID:       {}", note.id());
    if !note.tags().is_empty() {
        let tags = note
            .tags()
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        println!("Tags:     {}", tags);
    }
    println!("Created:  {}", note.created().format("%Y-%m-%d"));
    println!("Modified: {}", note.modified().format("%Y-%m-%d"));
    println!();
    println!("{}", note.content());

    Ok(())
}
