//! Command handlers.

mod completions;
mod links;
mod list;
mod render;
mod search;
mod show;
mod tags;
mod themes;

pub use completions::handle_completions;
pub use links::{handle_backlinks, handle_related};
pub use list::handle_list;
pub use render::handle_render;
pub use search::handle_search;
pub use show::handle_show;
pub use tags::handle_tags;
pub use themes::handle_themes;

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::cli::config::Config;
use crate::domain::Note;
use crate::store::{NoteStore, ResolveResult, read_snapshot};

/// Loads the session's note collection.
///
/// A snapshot path from the CLI or config wins; otherwise the built-in
/// sample collection is used.
pub fn load_store(cli_notes: Option<&PathBuf>, config: &Config) -> Result<NoteStore> {
    match config.snapshot_path(cli_notes) {
        Some(path) => Ok(NoteStore::from_notes(read_snapshot(&path)?)),
        None => Ok(NoteStore::sample()),
    }
}

/// Resolves a selector to a single note or fails with a useful message.
pub(crate) fn resolve_note<'a>(store: &'a NoteStore, selector: &str) -> Result<&'a Note> {
    match store.resolve(selector) {
        ResolveResult::Unique(note) => Ok(note),
        ResolveResult::Ambiguous(candidates) => {
            eprintln!("'{}' matches multiple notes:", selector);
            for note in &candidates {
                eprintln!("  {}  {}", note.id().prefix(), note.title());
            }
            bail!("ambiguous note selector '{}'", selector);
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", selector),
    }
}

/// Truncates a string to at most `max` characters, with an ellipsis when
/// cut short.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
