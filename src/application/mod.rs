// src/application/mod.rs
pub mod composer;
pub mod notebook;

pub use composer::{Composer, ComposerField, ComposerState};
pub use notebook::Notebook;
