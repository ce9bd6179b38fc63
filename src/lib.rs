// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod tui;
pub mod util;

use anyhow::Result;
use application::Notebook;
use tracing::{debug, info};

use crate::cli::args::Args;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting sidenote with arguments");

    // The session always opens with the seeded welcome note.
    let notebook = Notebook::seeded(args.min_notes);
    info!(notes = notebook.len(), min_notes = args.min_notes, "Opening notebook");

    let mut app = tui::App::new(notebook);
    app.run()
}
