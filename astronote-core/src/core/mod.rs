//! Internal domain modules for the Astronote core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod error;
pub mod form;
pub mod menu;
pub mod note;
pub mod notebook;
pub mod patch;
pub mod paths;
pub mod render;
pub mod storage;
pub mod store;
pub mod workspace;

#[doc(inline)]
pub use error::{AstronoteError, Result};
#[doc(inline)]
pub use form::{DialogMode, NotebookForm, Submission};
#[doc(inline)]
pub use menu::{note_context_menu, MenuEntry, NoteAction};
#[doc(inline)]
pub use note::{CreateNoteInput, Note, NotePatch};
#[doc(inline)]
pub use notebook::{CreateNotebookInput, Notebook, NotebookPatch};
#[doc(inline)]
pub use patch::Patch;
#[doc(inline)]
pub use paths::{notebook_path, note_path, unsorted_path};
#[doc(inline)]
pub use render::{default_export_dir, export_note, render_note, RenderFormat};
#[doc(inline)]
pub use storage::Storage;
#[doc(inline)]
pub use store::{NoteQuery, Store};
#[doc(inline)]
pub use workspace::Workspace;
