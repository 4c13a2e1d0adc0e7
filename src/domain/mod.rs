//! Core value types: Note, Tag, NoteId

mod note;
mod note_id;
mod tag;

pub use note::{Note, NoteBuilder, ParseNoteError};
pub use note_id::{NoteId, ParseNoteIdError};
pub use tag::{ParseTagError, Tag};
