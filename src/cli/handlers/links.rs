//! The `backlinks` and `related` command handlers.

use anyhow::Result;

use super::{resolve_note, truncate_str};
use crate::cli::output::{BacklinkListing, Output, OutputFormat, RelatedListing};
use crate::cli::{BacklinksArgs, RelatedArgs};
use crate::store::{NoteStore, backlink_line};

pub fn handle_backlinks(args: &BacklinksArgs, store: &NoteStore) -> Result<()> {
    let note = resolve_note(store, &args.note)?;
    let links = store.backlinks(note);

    match args.format {
        OutputFormat::Human => {
            if links.is_empty() {
                println!("No backlinks found.");
            } else {
                println!("{:<10}  {:<30}  {:<50}", "ID", "Title", "Context");
                println!(
                    "{:<10}  {:<30}  {:<50}",
                    "----------",
                    "------------------------------",
                    "--------------------------------------------------"
                );

                for link in &links {
                    let context = backlink_line(link, note.title()).unwrap_or_default();
                    println!(
                        "{:<10}  {:<30}  {:<50}",
                        link.id().prefix(),
                        truncate_str(link.title(), 30),
                        truncate_str(context.trim(), 50)
                    );
                }

                println!();
                println!("{} backlink(s)", links.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<BacklinkListing> = links
                .iter()
                .map(|link| BacklinkListing {
                    id: link.id().to_string(),
                    title: link.title().to_string(),
                    context: backlink_line(link, note.title()).map(|line| line.trim().to_string()),
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

pub fn handle_related(args: &RelatedArgs, store: &NoteStore) -> Result<()> {
    let note = resolve_note(store, &args.note)?;
    let related = store.related(note);

    match args.format {
        OutputFormat::Human => {
            if related.is_empty() {
                println!("No related notes found.");
            } else {
                println!("{:<10}  {:<30}  {:<30}", "ID", "Title", "Shared Tags");
                println!(
                    "{:<10}  {:<30}  {:<30}",
                    "----------",
                    "------------------------------",
                    "------------------------------"
                );

                for other in &related {
                    let shared = note
                        .tags()
                        .iter()
                        .filter(|t| other.has_tag(t))
                        .map(|t| t.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!(
                        "{:<10}  {:<30}  {:<30}",
                        other.id().prefix(),
                        truncate_str(other.title(), 30),
                        truncate_str(&shared, 30)
                    );
                }

                println!();
                println!("{} related note(s)", related.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<RelatedListing> = related
                .iter()
                .map(|other| RelatedListing {
                    id: other.id().to_string(),
                    title: other.title().to_string(),
                    shared_tags: note
                        .tags()
                        .iter()
                        .filter(|t| other.has_tag(t))
                        .map(|t| t.to_string())
                        .collect(),
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
