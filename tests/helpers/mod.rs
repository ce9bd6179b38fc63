use sidenote::application::Notebook;

/// A seeded notebook (floor 1) with `extra` additional notes appended.
pub fn populated_notebook(extra: usize) -> Notebook {
    let mut notebook = Notebook::seeded(1);
    for i in 0..extra {
        notebook
            .add_note(&format!("Note {}", i + 1), &format!("Body {}", i + 1))
            .expect("test note should be valid");
    }
    notebook
}
