use crate::Patch;
use serde::{Deserialize, Serialize};

/// A notebook inside a workspace.
///
/// Notebooks form a tree per workspace via `parent_id` back-references;
/// `parent_id == None` means root level. Sibling order is computed at
/// display time by case-insensitive name comparison — no ordinal is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notebook {
    pub id: String,
    pub workspace_id: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub emoji: Option<String>,
    pub description: Option<String>,
    /// Whether the sidebar shows this notebook's children.
    pub is_expanded: bool,
    pub created_at: i64,
    pub modified_at: i64,
}

/// Input for [`Store::create_notebook`](crate::Store::create_notebook).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotebookInput {
    pub workspace_id: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub emoji: Option<String>,
    pub description: Option<String>,
}

/// A partial update for [`Store::update_notebook`](crate::Store::update_notebook).
///
/// `workspace_id` is deliberately absent: it is immutable after creation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookPatch {
    pub name: Option<String>,
    pub emoji: Patch<String>,
    pub description: Patch<String>,
    pub parent_id: Patch<String>,
}

impl NotebookPatch {
    /// Returns `true` when applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.emoji.is_keep()
            && self.description.is_keep()
            && self.parent_id.is_keep()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patch_is_empty() {
        assert!(NotebookPatch::default().is_empty());
    }

    #[test]
    fn test_patch_with_cleared_emoji_is_not_empty() {
        let patch = NotebookPatch {
            emoji: Patch::Clear,
            ..NotebookPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
