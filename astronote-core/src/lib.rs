//! Core library for Astronote — a hierarchical note-taking application.
//!
//! The primary entry point is [`Store`], which represents an open Astronote
//! SQLite database. All record mutations go through `Store` methods; the
//! desktop crate builds its sidebar, dialogs and context menus from the
//! pure models in [`form`](core::form), [`menu`](core::menu) and
//! [`paths`](core::paths).
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    error::{AstronoteError, Result},
    form::{DialogMode, NotebookForm, Submission},
    menu::{note_context_menu, MenuEntry, NoteAction},
    note::{CreateNoteInput, Note, NotePatch},
    notebook::{CreateNotebookInput, Notebook, NotebookPatch},
    patch::Patch,
    paths,
    paths::{note_path, notebook_path, unsorted_path},
    render::{default_export_dir, export_note, render_note, RenderFormat},
    storage::Storage,
    store::{NoteQuery, Store},
    workspace::Workspace,
};
