//! quill - markdown notes with wikilink connections
//!
//! A note collection is loaded once per invocation (from a YAML snapshot or
//! the embedded samples) and queried read-only: listing, search, backlinks,
//! related notes, and HTML rendering.

pub mod cli;
pub mod domain;
pub mod render;
pub mod store;
pub mod workspace;

use anyhow::Result;
use clap::Parser;

use cli::config::Config;
use cli::handlers;
use cli::{Cli, Command};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    // Completions need no note collection.
    if let Command::Completions(args) = &cli.command {
        return handlers::handle_completions(args);
    }

    let store = handlers::load_store(cli.notes.as_ref(), &config)?;

    match &cli.command {
        Command::List(args) => handlers::handle_list(args, &store),
        Command::Show(args) => handlers::handle_show(args, &store),
        Command::Render(args) => handlers::handle_render(args, &store, &config),
        Command::Backlinks(args) => handlers::handle_backlinks(args, &store),
        Command::Related(args) => handlers::handle_related(args, &store),
        Command::Search(args) => handlers::handle_search(args, &store),
        Command::Tags(args) => handlers::handle_tags(args, &store),
        Command::Themes(args) => handlers::handle_themes(args, &config),
        Command::Completions(_) => unreachable!("handled above"),
    }
}
