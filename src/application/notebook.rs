// src/application/notebook.rs
use tracing::debug;

use crate::constants::{DEFAULT_MIN_NOTES, SEED_NOTE_CONTENT, SEED_NOTE_TITLE};
use crate::domain::{DomainError, Note, NoteId};

/// The note collection and its selection, owned as a plain value.
///
/// All state transitions happen here, independent of any rendering layer.
/// The collection never drops below `min_notes` through `delete_note`.
#[derive(Debug, Clone)]
pub struct Notebook {
    notes: Vec<Note>,
    selected: Option<NoteId>,
    next_id: u64,
    min_notes: usize,
}

impl Notebook {
    pub fn new(min_notes: usize) -> Self {
        Self {
            notes: Vec::new(),
            selected: None,
            next_id: 1,
            min_notes,
        }
    }

    /// A notebook pre-populated with the welcome note, so a fresh session
    /// always starts with exactly one note.
    pub fn seeded(min_notes: usize) -> Self {
        let mut notebook = Self::new(min_notes);
        notebook.append(SEED_NOTE_TITLE, SEED_NOTE_CONTENT);
        notebook
    }

    pub fn min_notes(&self) -> usize {
        self.min_notes
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn selected(&self) -> Option<&Note> {
        let id = self.selected?;
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected
    }

    /// Append a new note and select it. Rejects with `EmptyField` if either
    /// field is empty; the collection is left unchanged in that case.
    pub fn add_note(&mut self, title: &str, content: &str) -> Result<NoteId, DomainError> {
        if title.is_empty() || content.is_empty() {
            return Err(DomainError::EmptyField);
        }
        let id = self.append(title, content);
        debug!(%id, title, "Added note");
        Ok(id)
    }

    /// Remove a note and reselect the last remaining one. Rejects with
    /// `MinimumNotes` when the collection is at its floor.
    pub fn delete_note(&mut self, id: NoteId) -> Result<(), DomainError> {
        let position = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(DomainError::NoteNotFound(id))?;
        if self.notes.len() <= self.min_notes {
            return Err(DomainError::MinimumNotes {
                min: self.min_notes,
            });
        }
        self.notes.remove(position);
        self.selected = self.notes.last().map(|note| note.id);
        debug!(%id, remaining = self.notes.len(), "Deleted note");
        Ok(())
    }

    /// Set the selection. Stale ids surface as `NoteNotFound`.
    pub fn select_note(&mut self, id: NoteId) -> Result<(), DomainError> {
        if !self.notes.iter().any(|note| note.id == id) {
            return Err(DomainError::NoteNotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    fn append(&mut self, title: &str, content: &str) -> NoteId {
        let id = NoteId(self.next_id);
        self.next_id += 1;
        self.notes.push(Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
        });
        self.selected = Some(id);
        id
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::seeded(DEFAULT_MIN_NOTES)
    }
}
