//! The `tags` command handler.

use anyhow::Result;

use crate::cli::TagsArgs;
use crate::cli::output::{Output, OutputFormat, TagListing};
use crate::store::NoteStore;

pub fn handle_tags(args: &TagsArgs, store: &NoteStore) -> Result<()> {
    let counts = store.tag_counts();

    match args.format {
        OutputFormat::Human => {
            if counts.is_empty() {
                println!("No tags found.");
            } else {
                for (tag, count) in &counts {
                    if args.counts {
                        println!("{:<30}  {:>5}", tag.as_str(), count);
                    } else {
                        println!("{}", tag);
                    }
                }

                println!();
                println!("{} tag(s)", counts.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = counts
                .iter()
                .map(|(tag, count)| TagListing {
                    name: tag.to_string(),
                    count: args.counts.then_some(*count),
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
