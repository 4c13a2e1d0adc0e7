//! Standalone HTML page rendering for notes.

use std::path::Path;

use anyhow::{Context, Result};
use minijinja::{Environment, context};

use crate::domain::Note;
use crate::render::pipeline::MarkdownRenderer;
use crate::render::theme::{DEFAULT_THEME, theme_css};

/// Default HTML template for a single note page.
pub const DEFAULT_PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title }}</title>
    <style>{{ theme_css }}</style>
</head>
<body>
    <article>
        <header>
            <h1>{{ title }}</h1>
            {% if tags %}
            <div class="tags">
                {% for tag in tags %}<span class="tag">#{{ tag }}</span>{% endfor %}
            </div>
            {% endif %}
            <div class="metadata">
                Last updated <time datetime="{{ modified_iso }}">{{ modified }}</time>
            </div>
        </header>
        <main>{{ content }}</main>
    </article>
</body>
</html>"##;

/// Options for rendering a note to a standalone page.
#[derive(Default)]
pub struct PageOptions<'a> {
    /// Path to a custom template file.
    pub template_path: Option<&'a Path>,
    /// Theme identifier; falls back to the default theme.
    pub theme: Option<&'a str>,
}

/// Renders a note to a complete HTML document.
///
/// The note content goes through the markdown pipeline and is injected into
/// the page template together with the title, tags, modified date, and the
/// CSS for the selected theme.
///
/// # Errors
///
/// Fails when a custom template cannot be read or parsed, or when the theme
/// identifier is unknown.
pub fn render_note_page(note: &Note, options: &PageOptions) -> Result<String> {
    let css = theme_css(options.theme.unwrap_or(DEFAULT_THEME))?;

    let template_source = match options.template_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read template: {}", path.display()))?,
        None => DEFAULT_PAGE_TEMPLATE.to_string(),
    };

    let content = MarkdownRenderer::new().render(note.content());

    let mut env = Environment::new();
    env.add_template("page", &template_source)
        .context("failed to parse page template")?;
    let template = env.get_template("page")?;

    let tags: Vec<&str> = note.tags().iter().map(|t| t.as_str()).collect();

    let html = template
        .render(context! {
            title => note.title(),
            tags => tags,
            modified => note.modified().format("%B %e, %Y").to_string(),
            modified_iso => note.modified().to_rfc3339(),
            theme_css => css,
            content => content,
        })
        .context("failed to render page template")?;

    Ok(html)
}
