//! The `ls` command handler.

use anyhow::{Result, anyhow};

use super::truncate_str;
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::{Note, Tag};
use crate::store::NoteStore;

pub fn handle_list(args: &ListArgs, store: &NoteStore) -> Result<()> {
    let filter_tags: Vec<Tag> = args
        .tags
        .iter()
        .map(|t| Tag::new(t).map_err(|e| anyhow!("invalid tag '{}': {}", t, e)))
        .collect::<Result<Vec<_>>>()?;

    let notes: Vec<&Note> = store
        .notes()
        .iter()
        .filter(|n| filter_tags.iter().all(|t| n.has_tag(t)))
        .collect();

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
            } else {
                println!(
                    "{:<10}  {:<40}  {:<30}  {:>10}",
                    "ID", "Title", "Tags", "Modified"
                );
                println!(
                    "{:<10}  {:<40}  {:<30}  {:>10}",
                    "----------",
                    "----------------------------------------",
                    "------------------------------",
                    "----------"
                );

                for note in &notes {
                    let tags = note
                        .tags()
                        .iter()
                        .map(|t| t.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!(
                        "{:<10}  {:<40}  {:<30}  {:>10}",
                        note.id().prefix(),
                        truncate_str(note.title(), 40),
                        truncate_str(&tags, 30),
                        note.modified().format("%Y-%m-%d")
                    );
                }

                println!();
                println!("{} note(s)", notes.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes
                .iter()
                .map(|n| NoteListing {
                    id: n.id().to_string(),
                    title: n.title().to_string(),
                    tags: n.tags().iter().map(|t| t.to_string()).collect(),
                    modified: n.modified().to_rfc3339(),
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
