//! The `search` command handler.

use anyhow::Result;

use super::truncate_str;
use crate::cli::SearchArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::store::NoteStore;

pub fn handle_search(args: &SearchArgs, store: &NoteStore) -> Result<()> {
    let matches = store.search(&args.query);

    match args.format {
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("No notes found.");
            } else {
                println!("{:<10}  {:<30}  {:<50}", "ID", "Title", "Excerpt");
                println!(
                    "{:<10}  {:<30}  {:<50}",
                    "----------",
                    "------------------------------",
                    "--------------------------------------------------"
                );

                for note in &matches {
                    println!(
                        "{:<10}  {:<30}  {:<50}",
                        note.id().prefix(),
                        truncate_str(note.title(), 30),
                        note.excerpt(50).unwrap_or_default()
                    );
                }

                println!();
                println!("{} match(es)", matches.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = matches
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
