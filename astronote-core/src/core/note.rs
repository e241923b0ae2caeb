use crate::Patch;
use serde::{Deserialize, Serialize};

/// A note, optionally attached to exactly one notebook.
///
/// `notebook_id == None` means the note is unsorted. `is_deleted` is a
/// soft-delete flag; no store operation physically removes a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub workspace_id: String,
    pub notebook_id: Option<String>,
    pub title: String,
    /// Markdown body.
    pub content: String,
    pub is_pinned: bool,
    pub is_favorite: bool,
    pub is_deleted: bool,
    pub created_at: i64,
    pub modified_at: i64,
}

/// Input for [`Store::create_note`](crate::Store::create_note).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteInput {
    pub workspace_id: String,
    pub notebook_id: Option<String>,
    pub title: String,
    pub content: String,
}

/// A partial update for [`Store::update_note`](crate::Store::update_note).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub notebook_id: Patch<String>,
    pub is_pinned: Option<bool>,
    pub is_favorite: Option<bool>,
    pub is_deleted: Option<bool>,
}

impl NotePatch {
    /// Returns `true` when applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.notebook_id.is_keep()
            && self.is_pinned.is_none()
            && self.is_favorite.is_none()
            && self.is_deleted.is_none()
    }
}
