//! In-memory note collection and relationship queries.
//!
//! The collection is a closed, static snapshot for the lifetime of a
//! session: notes are supplied once by an external source (or the embedded
//! samples) and never created, mutated, or deleted here. Backlinks and
//! related notes are recomputed on demand; nothing is cached, so nothing is
//! ever invalidated.

mod resolve;
mod snapshot;

pub use resolve::{RELATED_LIMIT, backlink_line, backlinks, related};
pub use snapshot::{SAMPLE_SNAPSHOT, SnapshotError, load_snapshot, read_snapshot, sample_notes};

use crate::domain::{Note, NoteId, Tag};

/// Result of resolving a user-supplied note selector.
#[derive(Debug)]
pub enum ResolveResult<'a> {
    /// Exactly one note matched.
    Unique(&'a Note),
    /// More than one note matched; all candidates, in collection order.
    Ambiguous(Vec<&'a Note>),
    /// Nothing matched.
    NotFound,
}

/// The session's note collection.
///
/// Wraps the snapshot and answers the relationship and lookup queries the
/// front end needs. Queries are linear scans; at personal-collection scale
/// no index is warranted.
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Creates a store over the given snapshot.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Creates a store over the embedded sample collection.
    pub fn sample() -> Self {
        Self::from_notes(sample_notes())
    }

    /// Returns the notes in collection order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true when the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Looks up a note by identifier.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Returns every note whose content wikilinks to `current`'s title.
    pub fn backlinks(&self, current: &Note) -> Vec<&Note> {
        backlinks(current, &self.notes)
    }

    /// Returns up to [`RELATED_LIMIT`] notes sharing at least one tag with
    /// `current`.
    pub fn related(&self, current: &Note) -> Vec<&Note> {
        related(current, &self.notes)
    }

    /// Case-insensitive substring search over titles, content, and tags.
    ///
    /// An empty query matches every note.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let q = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| {
                n.title().to_lowercase().contains(&q)
                    || n.content().to_lowercase().contains(&q)
                    || n.tags().iter().any(|t| t.as_str().to_lowercase().contains(&q))
            })
            .collect()
    }

    /// Returns every distinct tag with its usage count, in first-seen order.
    pub fn tag_counts(&self) -> Vec<(&Tag, usize)> {
        let mut counts: Vec<(&Tag, usize)> = Vec::new();
        for note in &self.notes {
            for tag in note.tags() {
                match counts.iter_mut().find(|(t, _)| *t == tag) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((tag, 1)),
                }
            }
        }
        counts
    }

    /// Resolves a user-supplied selector to a note.
    ///
    /// Tries a case-insensitive exact title match first, then an id prefix
    /// match. Multiple matches at either step are reported as ambiguous.
    pub fn resolve(&self, selector: &str) -> ResolveResult<'_> {
        let by_title: Vec<&Note> = self
            .notes
            .iter()
            .filter(|n| n.title().eq_ignore_ascii_case(selector))
            .collect();

        match by_title.len() {
            1 => return ResolveResult::Unique(by_title[0]),
            n if n > 1 => return ResolveResult::Ambiguous(by_title),
            _ => {}
        }

        let prefix = selector.to_ascii_uppercase();
        let by_id: Vec<&Note> = self
            .notes
            .iter()
            .filter(|n| n.id().to_string().starts_with(&prefix))
            .collect();

        match by_id.len() {
            0 => ResolveResult::NotFound,
            1 => ResolveResult::Unique(by_id[0]),
            _ => ResolveResult::Ambiguous(by_id),
        }
    }
}
