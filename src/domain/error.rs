// src/domain/error.rs
use thiserror::Error;

use crate::domain::NoteId;

/// Domain failures. The display strings for `MinimumNotes` and
/// `EmptyField` double as the user-facing notice text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),
    #[error("{}", minimum_notes_notice(*.min))]
    MinimumNotes { min: usize },
    #[error("All fields must be filled")]
    EmptyField,
}

fn minimum_notes_notice(min: usize) -> String {
    if min == 1 {
        "At least one note must remain".to_string()
    } else {
        format!("At least {min} notes must remain")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_floor_of_one_when_formatting_then_uses_singular_notice() {
        let error = DomainError::MinimumNotes { min: 1 };
        assert_eq!(error.to_string(), "At least one note must remain");
    }

    #[test]
    fn given_higher_floor_when_formatting_then_names_the_count() {
        let error = DomainError::MinimumNotes { min: 3 };
        assert_eq!(error.to_string(), "At least 3 notes must remain");
    }
}
