//! Markdown rendering for note previews and standalone HTML pages.
//!
//! The pipeline is an ordered chain of pattern substitutions, each pass
//! operating on the output of the previous one. The ordering (and its
//! cross-pass interactions, e.g. tag chips inside already-rendered code
//! fences) is part of the rendering contract and must not be reordered.

mod pipeline;
pub mod template;
mod theme;

pub use pipeline::{MarkdownRenderer, render_markdown};
pub use template::{DEFAULT_PAGE_TEMPLATE, PageOptions, render_note_page};
pub use theme::{DEFAULT_THEME, Theme, ThemeError, theme_css, themes};
