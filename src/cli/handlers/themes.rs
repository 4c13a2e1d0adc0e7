//! The `themes` command handler.

use anyhow::Result;

use crate::cli::ThemesArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, ThemeListing};
use crate::render::themes;

pub fn handle_themes(args: &ThemesArgs, config: &Config) -> Result<()> {
    let current = config.theme();

    match args.format {
        OutputFormat::Human => {
            for theme in themes() {
                let marker = if theme.id == current { "*" } else { " " };
                println!(
                    "{} {:<20}  {:<20}  {}",
                    marker, theme.id, theme.name, theme.description
                );
            }
        }
        OutputFormat::Json => {
            let listings: Vec<ThemeListing> = themes()
                .iter()
                .map(|theme| ThemeListing {
                    id: theme.id.to_string(),
                    name: theme.name.to_string(),
                    description: theme.description.to_string(),
                    current: theme.id == current,
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
