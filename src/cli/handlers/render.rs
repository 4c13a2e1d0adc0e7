//! The `render` command handler.

use anyhow::{Context, Result};

use super::resolve_note;
use crate::cli::RenderArgs;
use crate::cli::config::Config;
use crate::render::{MarkdownRenderer, PageOptions, render_note_page};
use crate::store::NoteStore;

pub fn handle_render(args: &RenderArgs, store: &NoteStore, config: &Config) -> Result<()> {
    let note = resolve_note(store, &args.note)?;

    let html = if args.standalone {
        let theme = args.theme.clone().unwrap_or_else(|| config.theme());
        let options = PageOptions {
            template_path: args.template.as_deref(),
            theme: Some(&theme),
        };
        render_note_page(note, &options)?
    } else {
        MarkdownRenderer::new().render(note.content())
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}
