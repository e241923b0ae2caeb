//! The note context menu builder.
//!
//! [`note_context_menu`] is a pure function from a note record to an ordered
//! entry list; nothing here touches the store. Side effects happen only when
//! the desktop layer dispatches an entry's [`NoteAction`].

use crate::{Note, RenderFormat};

/// An operation a context menu entry performs on its note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteAction {
    /// Flip `is_pinned`.
    TogglePinned,
    /// Flip `is_favorite`.
    ToggleFavorite,
    /// Flip `is_deleted` (move to / restore from trash).
    ToggleDeleted,
    /// Copy the note under a fresh ID.
    Duplicate,
    /// Put the note's canonical path on the clipboard.
    CopyLink,
    /// Put a rendering of the note on the clipboard.
    CopyAs(RenderFormat),
    /// Write a rendering of the note to a file.
    ExportAs(RenderFormat),
}

/// One entry of a note context menu.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Button {
        label: String,
        action: NoteAction,
    },
    Separator,
    Submenu {
        label: String,
        items: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    fn button(label: &str, action: NoteAction) -> Self {
        MenuEntry::Button {
            label: label.to_string(),
            action,
        }
    }
}

/// Builds the context menu for a note.
///
/// Entry order is fixed; the pin/favorite/trash labels depend on the note's
/// current flags.
pub fn note_context_menu(note: &Note) -> Vec<MenuEntry> {
    vec![
        MenuEntry::button(
            if note.is_pinned {
                "Remove from Sidebar"
            } else {
                "Pin to sidebar"
            },
            NoteAction::TogglePinned,
        ),
        MenuEntry::button(
            if note.is_favorite {
                "Remove from favorites"
            } else {
                "Add to favorites"
            },
            NoteAction::ToggleFavorite,
        ),
        MenuEntry::Separator,
        MenuEntry::button("Duplicate", NoteAction::Duplicate),
        MenuEntry::button("Copy Link", NoteAction::CopyLink),
        MenuEntry::Submenu {
            label: "Copy as".to_string(),
            items: vec![
                MenuEntry::button("Plain Text", NoteAction::CopyAs(RenderFormat::Plain)),
                MenuEntry::button("Markdown", NoteAction::CopyAs(RenderFormat::Markdown)),
                MenuEntry::button("Html", NoteAction::CopyAs(RenderFormat::Html)),
                MenuEntry::button("Json", NoteAction::CopyAs(RenderFormat::Json)),
            ],
        },
        MenuEntry::Separator,
        MenuEntry::Submenu {
            label: "Export as".to_string(),
            items: vec![
                MenuEntry::button("Text File", NoteAction::ExportAs(RenderFormat::Plain)),
                MenuEntry::button("Markdown File", NoteAction::ExportAs(RenderFormat::Markdown)),
                MenuEntry::button("Html File", NoteAction::ExportAs(RenderFormat::Html)),
                MenuEntry::button("Json File", NoteAction::ExportAs(RenderFormat::Json)),
            ],
        },
        MenuEntry::button(
            if note.is_deleted {
                "Remove from Trash"
            } else {
                "Move to Trash"
            },
            NoteAction::ToggleDeleted,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Note {
        Note {
            id: "n1".to_string(),
            workspace_id: "w1".to_string(),
            notebook_id: None,
            title: "Note".to_string(),
            content: String::new(),
            is_pinned: false,
            is_favorite: false,
            is_deleted: false,
            created_at: 0,
            modified_at: 0,
        }
    }

    fn labels(entries: &[MenuEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|entry| match entry {
                MenuEntry::Button { label, .. } => label.clone(),
                MenuEntry::Separator => "---".to_string(),
                MenuEntry::Submenu { label, .. } => label.clone(),
            })
            .collect()
    }

    #[test]
    fn test_entry_order_is_fixed() {
        let entries = note_context_menu(&note());
        assert_eq!(
            labels(&entries),
            vec![
                "Pin to sidebar",
                "Add to favorites",
                "---",
                "Duplicate",
                "Copy Link",
                "Copy as",
                "---",
                "Export as",
                "Move to Trash",
            ]
        );
    }

    #[test]
    fn test_construction_has_no_side_effects_on_note() {
        let before = note();
        let _ = note_context_menu(&before);
        assert_eq!(before, note());
    }

    #[test]
    fn test_labels_follow_note_flags() {
        let mut n = note();
        n.is_pinned = true;
        n.is_favorite = true;
        n.is_deleted = true;

        let entries = note_context_menu(&n);
        let labels = labels(&entries);
        assert_eq!(labels[0], "Remove from Sidebar");
        assert_eq!(labels[1], "Remove from favorites");
        assert_eq!(labels[8], "Remove from Trash");
    }

    #[test]
    fn test_trash_label_for_undeleted_note() {
        let entries = note_context_menu(&note());
        assert!(matches!(
            &entries[8],
            MenuEntry::Button { label, action: NoteAction::ToggleDeleted } if label == "Move to Trash"
        ));
    }

    #[test]
    fn test_copy_and_export_submenus_cover_all_formats() {
        let entries = note_context_menu(&note());

        let MenuEntry::Submenu { label, items } = &entries[5] else {
            panic!("expected Copy as submenu");
        };
        assert_eq!(label, "Copy as");
        assert_eq!(
            labels(items),
            vec!["Plain Text", "Markdown", "Html", "Json"]
        );

        let MenuEntry::Submenu { label, items } = &entries[7] else {
            panic!("expected Export as submenu");
        };
        assert_eq!(label, "Export as");
        assert_eq!(
            labels(items),
            vec!["Text File", "Markdown File", "Html File", "Json File"]
        );
    }
}
