//! Backlink and related-note resolution.
//!
//! Both queries are pure functions over the full collection: no index, no
//! cache. Backlink matching is a literal substring test for the exact
//! bracketed span, not a parsed-link lookup.

use crate::domain::Note;

/// Maximum number of related notes returned.
pub const RELATED_LIMIT: usize = 3;

/// Returns every note in `all` whose content wikilinks to `current`'s title.
///
/// A note matches when its content contains the exact substring
/// `[[<title>]]`. Partial overlap without exact bracket closure does not
/// match: content `[[Notes Template]]` is not a backlink to a note titled
/// `Notes`. The current note is excluded by identifier, so a note that
/// wikilinks to itself never appears in its own backlinks. Result order
/// follows `all`.
pub fn backlinks<'a>(current: &Note, all: &'a [Note]) -> Vec<&'a Note> {
    let needle = format!("[[{}]]", current.title());
    all.iter()
        .filter(|note| note.id() != current.id() && note.content().contains(&needle))
        .collect()
}

/// Returns notes sharing at least one tag with `current`.
///
/// Tag comparison is exact and case-sensitive. The current note is excluded
/// by identifier. Result order follows `all`, truncated to
/// [`RELATED_LIMIT`].
pub fn related<'a>(current: &Note, all: &'a [Note]) -> Vec<&'a Note> {
    all.iter()
        .filter(|note| {
            note.id() != current.id() && note.tags().iter().any(|tag| current.has_tag(tag))
        })
        .take(RELATED_LIMIT)
        .collect()
}

/// Returns the first content line of `source` that wikilinks to
/// `target_title`, for display context next to a backlink.
pub fn backlink_line<'a>(source: &'a Note, target_title: &str) -> Option<&'a str> {
    let needle = format!("[[{}]]", target_title);
    source.content().lines().find(|line| line.contains(&needle))
}
