//! Visual theme catalog and CSS for standalone page exports.
//!
//! The core consumes only a theme identifier string; picking and persisting
//! the preference belongs to the settings layer (the config file).

use thiserror::Error;

/// The theme applied when none is configured.
pub const DEFAULT_THEME: &str = "aurora";

/// A selectable visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Stable identifier used in config and on the command line.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description shown in theme listings.
    pub description: &'static str,
}

const THEMES: &[Theme] = &[
    Theme {
        id: "noir",
        name: "Noir (Dark)",
        description: "Deep black with subtle grays",
    },
    Theme {
        id: "aurora",
        name: "Aurora",
        description: "Deep purple sophistication",
    },
    Theme {
        id: "glacier-blue",
        name: "Glacier Blue",
        description: "Cool blue tones",
    },
    Theme {
        id: "monokai-midnight",
        name: "Monokai Midnight",
        description: "Rich purple and green",
    },
    Theme {
        id: "forest-green",
        name: "Forest Green",
        description: "Natural green palette",
    },
];

/// Returns the full theme catalog, in presentation order.
pub fn themes() -> &'static [Theme] {
    THEMES
}

/// Error returned when a theme identifier is not in the catalog.
#[derive(Debug, Error)]
#[error("unknown theme '{name}' (available: {available})")]
pub struct ThemeError {
    name: String,
    available: String,
}

/// Returns the CSS for a theme by identifier.
///
/// # Errors
///
/// Returns [`ThemeError`] when the identifier is not in the catalog; the
/// message lists the available identifiers.
pub fn theme_css(id: &str) -> Result<String, ThemeError> {
    let palette = match id {
        "noir" => PALETTE_NOIR,
        "aurora" => PALETTE_AURORA,
        "glacier-blue" => PALETTE_GLACIER_BLUE,
        "monokai-midnight" => PALETTE_MONOKAI_MIDNIGHT,
        "forest-green" => PALETTE_FOREST_GREEN,
        _ => {
            return Err(ThemeError {
                name: id.to_string(),
                available: THEMES.iter().map(|t| t.id).collect::<Vec<_>>().join(", "),
            });
        }
    };

    Ok(format!("{}{}", CSS_LAYOUT, palette))
}

/// Layout rules shared by every theme; palettes only set colors.
const CSS_LAYOUT: &str = r#"
body {
    font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.8;
    max-width: 800px;
    margin: 0 auto;
    padding: 2rem;
}
h1, h2, h3 { margin-top: 1.5em; margin-bottom: 0.5em; line-height: 1.3; }
li { margin-left: 1.5rem; }
pre { padding: 1rem; overflow-x: auto; border-radius: 6px; }
code { font-family: 'SF Mono', Monaco, 'Cascadia Code', monospace; font-size: 0.9em; }
:not(pre) > code { padding: 0.1rem 0.3rem; border-radius: 3px; }
.wikilink { display: inline-block; padding: 0.1rem 0.5rem; border-radius: 8px; cursor: pointer; }
.tag { display: inline-block; padding: 0.05rem 0.5rem; border-radius: 999px; font-size: 0.85em; }
.tags { margin-bottom: 1rem; }
.metadata { font-size: 0.9em; margin-bottom: 1rem; }
"#;

const PALETTE_NOIR: &str = r#"
body { background: #0a0a0a; color: #e5e5e5; }
h1, h2, h3 { color: #fafafa; }
pre, :not(pre) > code { background: #171717; color: #d4d4d4; }
.wikilink { background: #262626; color: #a3a3a3; border: 1px solid #404040; }
.tag { background: #262626; color: #a3a3a3; }
.metadata { color: #737373; }
"#;

const PALETTE_AURORA: &str = r#"
body { background: #13111c; color: #e9e4f5; }
h1, h2, h3 { color: #f4f0ff; }
pre, :not(pre) > code { background: #1e1a2e; color: #cfc4ef; }
.wikilink { background: #251d3d; color: #b79ded; border: 1px solid #3c2f63; }
.tag { background: #2a2340; color: #b79ded; }
.metadata { color: #8a7fa8; }
"#;

const PALETTE_GLACIER_BLUE: &str = r#"
body { background: #0c1420; color: #dbe7f3; }
h1, h2, h3 { color: #f0f6fc; }
pre, :not(pre) > code { background: #15202e; color: #b9cde0; }
.wikilink { background: #16263d; color: #7cb3f5; border: 1px solid #274a73; }
.tag { background: #1c2a3a; color: #7cb3f5; }
.metadata { color: #6d829a; }
"#;

const PALETTE_MONOKAI_MIDNIGHT: &str = r#"
body { background: #16131f; color: #e8e6ef; }
h1, h2, h3 { color: #f8f8f2; }
pre, :not(pre) > code { background: #201c2b; color: #a6e22e; }
.wikilink { background: #2b2142; color: #ae81ff; border: 1px solid #443466; }
.tag { background: #27212f; color: #a6e22e; }
.metadata { color: #75715e; }
"#;

const PALETTE_FOREST_GREEN: &str = r#"
body { background: #0d1511; color: #dfeae2; }
h1, h2, h3 { color: #f2f8f4; }
pre, :not(pre) > code { background: #15201a; color: #b7d4c0; }
.wikilink { background: #18301f; color: #6fce93; border: 1px solid #27563a; }
.tag { background: #1b2a21; color: #6fce93; }
.metadata { color: #6f8a79; }
"#;
