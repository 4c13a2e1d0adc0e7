//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub modified: String,
}

/// A backlink with the line that links to the target.
#[derive(Debug, Serialize)]
pub struct BacklinkListing {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// A related note with the tags it shares with the current one.
#[derive(Debug, Serialize)]
pub struct RelatedListing {
    pub id: String,
    pub title: String,
    pub shared_tags: Vec<String>,
}

/// A tag with optional count.
#[derive(Debug, Serialize)]
pub struct TagListing {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// A theme catalog entry.
#[derive(Debug, Serialize)]
pub struct ThemeListing {
    pub id: String,
    pub name: String,
    pub description: String,
    pub current: bool,
}
