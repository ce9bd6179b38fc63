// src/application/composer.rs
use tracing::debug;

use crate::application::Notebook;
use crate::domain::{DomainError, NoteId};

/// Which input field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerField {
    Title,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    Editing,
    Closed,
}

/// The note creation flow: a two-state machine (`Editing` -> `Closed`).
///
/// `save` commits through the notebook and closes on success; a rejected
/// save keeps the flow in `Editing` so the caller can show the notice.
/// `cancel` closes unconditionally and discards the buffers.
#[derive(Debug, Clone)]
pub struct Composer {
    title: String,
    content: String,
    focus: ComposerField,
    state: ComposerState,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            focus: ComposerField::Title,
            state: ComposerState::Editing,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn focus(&self) -> ComposerField {
        self.focus
    }

    pub fn state(&self) -> ComposerState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == ComposerState::Closed
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ComposerField::Title => ComposerField::Content,
            ComposerField::Content => ComposerField::Title,
        };
    }

    pub fn push_char(&mut self, ch: char) {
        match self.focus {
            ComposerField::Title => self.title.push(ch),
            ComposerField::Content => self.content.push(ch),
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            ComposerField::Title => self.title.pop(),
            ComposerField::Content => self.content.pop(),
        };
    }

    /// Newlines only make sense in the content field; in the title they
    /// move focus to the content field instead.
    pub fn push_newline(&mut self) {
        match self.focus {
            ComposerField::Title => self.focus = ComposerField::Content,
            ComposerField::Content => self.content.push('\n'),
        }
    }

    pub fn save(&mut self, notebook: &mut Notebook) -> Result<NoteId, DomainError> {
        let id = notebook.add_note(&self.title, &self.content)?;
        self.state = ComposerState::Closed;
        debug!(%id, "Composer committed note");
        Ok(id)
    }

    pub fn cancel(&mut self) {
        self.state = ComposerState::Closed;
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}
