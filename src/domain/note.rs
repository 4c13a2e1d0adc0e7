//! Note struct representing an in-memory markdown note.

use crate::domain::{NoteId, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyTitle,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyTitle => write!(f, "invalid note: title cannot be empty"),
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// An immutable markdown note.
///
/// Notes are value records held in an in-memory collection for the lifetime
/// of a session. The `title` doubles as the wikilink target token: another
/// note whose content contains `[[Title]]` is a backlink to this note.
///
/// # Required Fields
/// - `id`: Unique ULID identifier
/// - `title`: Human-readable title (non-empty); assumed unique across the
///   collection, never enforced
/// - `created`: When the note was created (informational only)
/// - `modified`: When the note was last modified (displayed, never computed on)
///
/// # Optional Fields
/// - `content`: Raw markdown source, newline-delimited lines
/// - `tags`: Ordered labels; equality is case-sensitive exact match
///
/// # Examples
///
/// ```
/// use quill::domain::{Note, NoteId};
/// use chrono::Utc;
///
/// let id = NoteId::new();
/// let now = Utc::now();
/// let note = Note::new(id, "Zettelkasten Method", now, now).unwrap();
/// assert_eq!(note.title(), "Zettelkasten Method");
/// ```
#[derive(Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    tags: Vec<Tag>,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl Note {
    /// Creates a new Note with required fields only.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title is empty or whitespace-only.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> Result<Self, ParseNoteError> {
        Self::builder(id, title, created, modified).build()
    }

    /// Creates a builder for constructing a Note with content and tags.
    pub fn builder(
        id: NoteId,
        title: impl Into<String>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> NoteBuilder {
        NoteBuilder::new(id, title, created, modified)
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw markdown content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the note's tags.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the note was last modified.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Returns true if the note carries the given tag (exact match).
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Returns a short plain-text preview of the content.
    ///
    /// The excerpt is the first non-empty line that is not a heading,
    /// truncated to at most `max_chars` characters with a trailing ellipsis
    /// when cut short. Returns None when the content has no such line.
    pub fn excerpt(&self, max_chars: usize) -> Option<String> {
        let line = self
            .content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with('#'))?;

        if line.chars().count() <= max_chars {
            Some(line.to_string())
        } else {
            let cut: String = line.chars().take(max_chars).collect();
            Some(format!("{}...", cut))
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.prefix())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("tags", &self.tags)
            .field("created", &self.created)
            .field("modified", &self.modified)
            .finish()
    }
}

/// Builder for constructing a Note with optional fields.
pub struct NoteBuilder {
    id: NoteId,
    title: String,
    content: String,
    tags: Vec<Tag>,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl NoteBuilder {
    fn new(
        id: NoteId,
        title: impl Into<String>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            tags: Vec::new(),
            created,
            modified,
        }
    }

    /// Sets the note's markdown content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the note's tags.
    ///
    /// Exact duplicates are removed (first occurrence kept); case variants
    /// of the same word are distinct tags and are all retained.
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = deduplicate_tags(tags);
        self
    }

    /// Builds the Note.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title is empty or whitespace-only.
    pub fn build(self) -> Result<Note, ParseNoteError> {
        let trimmed = self.title.trim();

        if trimmed.is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyTitle,
            });
        }

        Ok(Note {
            id: self.id,
            title: trimmed.to_string(),
            content: self.content,
            tags: self.tags,
            created: self.created,
            modified: self.modified,
        })
    }
}

/// Removes duplicate tags (by exact equality).
fn deduplicate_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen = Vec::new();
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("title", &self.title)?;

        if !self.content.is_empty() {
            map.serialize_entry("content", &self.content)?;
        }
        if !self.tags.is_empty() {
            map.serialize_entry("tags", &self.tags)?;
        }

        map.serialize_entry("created", &self.created)?;
        map.serialize_entry("modified", &self.modified)?;

        map.end()
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct NoteHelper {
            id: NoteId,
            title: String,
            #[serde(default)]
            content: String,
            #[serde(default)]
            tags: Vec<Tag>,
            created: DateTime<Utc>,
            modified: DateTime<Utc>,
        }

        let helper = NoteHelper::deserialize(deserializer)?;

        Note::builder(helper.id, helper.title, helper.created, helper.modified)
            .content(helper.content)
            .tags(helper.tags)
            .build()
            .map_err(serde::de::Error::custom)
    }
}
