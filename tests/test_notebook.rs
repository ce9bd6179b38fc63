mod helpers;

use anyhow::Result;
use helpers::populated_notebook;
use sidenote::application::Notebook;
use sidenote::domain::DomainError;

#[test]
fn given_fresh_session_when_opening_then_exactly_one_note_exists() -> Result<()> {
    // Arrange / Act
    let notebook = Notebook::seeded(1);

    // Assert
    assert_eq!(notebook.len(), 1);
    assert!(notebook.selected().is_some());
    Ok(())
}

#[test]
fn given_sequence_of_adds_when_all_fields_filled_then_size_grows_by_one_each_time() -> Result<()> {
    // Arrange
    let mut notebook = Notebook::seeded(1);

    // Act / Assert
    for i in 0..5 {
        let size_before = notebook.len();
        let id = notebook.add_note(&format!("Title {i}"), &format!("Body {i}"))?;
        assert_eq!(notebook.len(), size_before + 1);
        assert_eq!(notebook.selected_id(), Some(id));
    }
    Ok(())
}

#[test]
fn given_single_note_when_deleting_it_then_size_is_unchanged_and_notice_names_floor() {
    // Arrange
    let mut notebook = Notebook::seeded(1);
    let only = notebook.notes()[0].id;

    // Act
    let result = notebook.delete_note(only);

    // Assert
    assert_eq!(notebook.len(), 1);
    let error = result.expect_err("delete at floor should be rejected");
    assert!(matches!(error, DomainError::MinimumNotes { min: 1 }));
    assert_eq!(error.to_string(), "At least one note must remain");
}

#[test]
fn given_two_notes_when_deleting_first_then_only_second_remains_selected() -> Result<()> {
    // Arrange
    let mut notebook = populated_notebook(1);
    let first = notebook.notes()[0].id;
    let second = notebook.notes()[1].id;

    // Act
    notebook.delete_note(first)?;

    // Assert
    assert_eq!(notebook.len(), 1);
    assert_eq!(notebook.notes()[0].id, second);
    assert_eq!(notebook.selected_id(), Some(second));
    Ok(())
}

#[test]
fn given_empty_fields_when_adding_then_collection_never_changes() {
    // Arrange
    let mut notebook = populated_notebook(2);
    let size_before = notebook.len();

    // Act / Assert
    for (title, content) in [("", "x"), ("x", ""), ("", "")] {
        assert_eq!(
            notebook.add_note(title, content),
            Err(DomainError::EmptyField)
        );
        assert_eq!(notebook.len(), size_before);
    }
}

#[test]
fn given_mixed_operation_sequence_when_replayed_then_floor_invariant_holds() -> Result<()> {
    // Arrange
    let mut notebook = populated_notebook(3);

    // Act: delete everything we are allowed to delete
    while notebook.len() > 1 {
        let last = notebook.notes().last().expect("notebook is non-empty").id;
        notebook.delete_note(last)?;
    }
    let only = notebook.notes()[0].id;

    // Assert
    assert!(notebook.delete_note(only).is_err());
    assert_eq!(notebook.len(), 1);
    assert_eq!(notebook.selected_id(), Some(only));
    Ok(())
}

#[test]
fn given_selection_when_note_deleted_elsewhere_then_selection_moves_to_last_note() -> Result<()> {
    // Arrange
    let mut notebook = populated_notebook(2);
    let first = notebook.notes()[0].id;
    let last = notebook.notes()[2].id;
    notebook.select_note(first)?;

    // Act: deleting a different note still reselects the last note
    let middle = notebook.notes()[1].id;
    notebook.delete_note(middle)?;

    // Assert
    assert_eq!(notebook.selected_id(), Some(last));
    Ok(())
}
