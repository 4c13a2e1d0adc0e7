//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// quill - markdown notes with wikilink connections
#[derive(Parser, Debug)]
#[command(name = "quill", version, about, long_about = None)]
pub struct Cli {
    /// Notes snapshot file (YAML; overrides config, built-in samples if unset)
    #[arg(short = 'n', long, global = true)]
    pub notes: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes, optionally filtered by tags
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note's metadata and raw markdown
    Show(ShowArgs),

    /// Render a note to HTML
    Render(RenderArgs),

    /// Show notes that wikilink to a given note
    Backlinks(BacklinksArgs),

    /// Show notes sharing a tag with a given note
    Related(RelatedArgs),

    /// Search across titles, content, and tags
    Search(SearchArgs),

    /// List all tags
    Tags(TagsArgs),

    /// List available themes
    Themes(ThemesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Filter by tag, exact match (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note title or ID prefix
    pub note: String,
}

/// Arguments for the `render` command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Note title or ID prefix
    pub note: String,

    /// Emit a complete HTML page instead of a fragment
    #[arg(short, long)]
    pub standalone: bool,

    /// Theme for standalone pages (see `quill themes`)
    #[arg(long)]
    pub theme: Option<String>,

    /// Custom page template file
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Output path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `backlinks` command
#[derive(Parser, Debug)]
pub struct BacklinksArgs {
    /// Note title or ID prefix
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `related` command
#[derive(Parser, Debug)]
pub struct RelatedArgs {
    /// Note title or ID prefix
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query (case-insensitive substring)
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Show note counts for each tag
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `themes` command
#[derive(Parser, Debug)]
pub struct ThemesArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
