// src/domain/note.rs
use std::fmt;

/// Identifier handed out by the notebook when a note is created.
///
/// Ids form a monotonic sequence, so two notes with identical title and
/// content remain distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}
