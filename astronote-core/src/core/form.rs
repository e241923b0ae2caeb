//! The create-or-update notebook form model.
//!
//! One form serves both dialog modes. The mode is a tagged variant so the
//! call site matches exhaustively instead of probing for optional props, and
//! update-mode initial values are copied from the record exactly once, at
//! construction. The desktop layer owns rendering and the async submit; this
//! model owns field state, validation and payload building.

use crate::{CreateNotebookInput, Notebook, NotebookPatch, Patch};

/// Which mode the notebook dialog was opened in.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogMode {
    Create {
        workspace_id: String,
        parent_id: Option<String>,
    },
    Update {
        notebook: Notebook,
    },
}

/// The payload a valid form submits to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(CreateNotebookInput),
    Update { id: String, patch: NotebookPatch },
}

/// Field state of the create-or-update notebook dialog.
#[derive(Debug, Clone)]
pub struct NotebookForm {
    mode: DialogMode,
    pub name: String,
    pub emoji: Option<String>,
    /// Set once the user picks or clears an emoji; a cleared emoji patches
    /// the stored value, an untouched one does not.
    emoji_touched: bool,
    pub description: String,
    /// Inline validation or submit error shown under the name field.
    pub error: Option<String>,
    /// True while a submission is awaiting the store.
    pub submitting: bool,
}

impl NotebookForm {
    pub fn new(mode: DialogMode) -> Self {
        let (name, emoji, description) = match &mode {
            DialogMode::Create { .. } => (String::new(), None, String::new()),
            DialogMode::Update { notebook } => (
                notebook.name.clone(),
                notebook.emoji.clone(),
                notebook.description.clone().unwrap_or_default(),
            ),
        };
        Self {
            mode,
            name,
            emoji,
            emoji_touched: false,
            description,
            error: None,
            submitting: false,
        }
    }

    pub fn mode(&self) -> &DialogMode {
        &self.mode
    }

    /// Dialog title: "Create Notebook" or "Update Notebook".
    pub fn title(&self) -> &'static str {
        match self.mode {
            DialogMode::Create { .. } => "Create Notebook",
            DialogMode::Update { .. } => "Update Notebook",
        }
    }

    /// Submit button label, matching the dialog title.
    pub fn submit_label(&self) -> &'static str {
        self.title()
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.error = None;
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    pub fn set_emoji(&mut self, emoji: String) {
        self.emoji = Some(emoji);
        self.emoji_touched = true;
    }

    /// Explicitly clears the emoji; distinct from never having touched it.
    pub fn clear_emoji(&mut self) {
        self.emoji = None;
        self.emoji_touched = true;
    }

    /// Validates the form, recording an inline error for an empty name.
    ///
    /// `name` is the only validated field.
    pub fn validate(&mut self) -> bool {
        if self.name.trim().is_empty() {
            self.error = Some("Notebook Name is a required field".to_string());
            false
        } else {
            self.error = None;
            true
        }
    }

    /// Builds the store payload for the current field state.
    ///
    /// Call [`validate`](Self::validate) first; this does not re-check.
    /// Update mode submits only the changed field set.
    pub fn submission(&self) -> Submission {
        match &self.mode {
            DialogMode::Create {
                workspace_id,
                parent_id,
            } => Submission::Create(CreateNotebookInput {
                workspace_id: workspace_id.clone(),
                parent_id: parent_id.clone(),
                name: self.name.trim().to_string(),
                emoji: self.emoji.clone(),
                description: trimmed_or_none(&self.description),
            }),
            DialogMode::Update { notebook } => {
                let name = self.name.trim().to_string();
                let description = trimmed_or_none(&self.description);
                let patch = NotebookPatch {
                    name: (name != notebook.name).then_some(name),
                    emoji: if self.emoji_touched {
                        match &self.emoji {
                            Some(emoji) => Patch::Set(emoji.clone()),
                            None => Patch::Clear,
                        }
                    } else {
                        Patch::Keep
                    },
                    description: if description != notebook.description {
                        match description {
                            Some(description) => Patch::Set(description),
                            None => Patch::Clear,
                        }
                    } else {
                        Patch::Keep
                    },
                    parent_id: Patch::Keep,
                };
                Submission::Update {
                    id: notebook.id.clone(),
                    patch,
                }
            }
        }
    }
}

fn trimmed_or_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notebook() -> Notebook {
        Notebook {
            id: "nb1".to_string(),
            workspace_id: "w1".to_string(),
            parent_id: None,
            name: "Work".to_string(),
            emoji: Some("💼".to_string()),
            description: Some("Day job".to_string()),
            is_expanded: true,
            created_at: 0,
            modified_at: 0,
        }
    }

    fn create_form() -> NotebookForm {
        NotebookForm::new(DialogMode::Create {
            workspace_id: "w1".to_string(),
            parent_id: None,
        })
    }

    #[test]
    fn test_update_mode_binds_record_fields_at_construction() {
        let form = NotebookForm::new(DialogMode::Update {
            notebook: notebook(),
        });
        assert_eq!(form.name, "Work");
        assert_eq!(form.emoji, Some("💼".to_string()));
        assert_eq!(form.description, "Day job");
    }

    #[test]
    fn test_empty_name_fails_validation_with_inline_error() {
        let mut form = create_form();
        assert!(!form.validate());
        assert_eq!(
            form.error.as_deref(),
            Some("Notebook Name is a required field")
        );

        // Typing clears the error
        form.set_name("Work".to_string());
        assert!(form.error.is_none());
        assert!(form.validate());
    }

    #[test]
    fn test_create_submission_sends_untouched_optionals_as_none() {
        let mut form = create_form();
        form.set_name("Work".to_string());
        assert!(form.validate());

        match form.submission() {
            Submission::Create(input) => {
                assert_eq!(input.name, "Work");
                assert_eq!(input.workspace_id, "w1");
                assert_eq!(input.parent_id, None);
                assert_eq!(input.emoji, None);
                assert_eq!(input.description, None);
            }
            other => panic!("expected create submission, got {other:?}"),
        }
    }

    #[test]
    fn test_create_submission_carries_parent_id() {
        let mut form = NotebookForm::new(DialogMode::Create {
            workspace_id: "w1".to_string(),
            parent_id: Some("nb-parent".to_string()),
        });
        form.set_name("Child".to_string());

        match form.submission() {
            Submission::Create(input) => {
                assert_eq!(input.parent_id, Some("nb-parent".to_string()));
            }
            other => panic!("expected create submission, got {other:?}"),
        }
    }

    #[test]
    fn test_update_submission_contains_only_changed_fields() {
        let mut form = NotebookForm::new(DialogMode::Update {
            notebook: notebook(),
        });
        form.set_name("Work stuff".to_string());

        match form.submission() {
            Submission::Update { id, patch } => {
                assert_eq!(id, "nb1");
                assert_eq!(patch.name, Some("Work stuff".to_string()));
                assert!(patch.emoji.is_keep());
                assert!(patch.description.is_keep());
                assert!(patch.parent_id.is_keep());
            }
            other => panic!("expected update submission, got {other:?}"),
        }
    }

    #[test]
    fn test_cleared_emoji_patches_as_clear_not_keep() {
        let mut form = NotebookForm::new(DialogMode::Update {
            notebook: notebook(),
        });
        form.clear_emoji();

        match form.submission() {
            Submission::Update { patch, .. } => {
                assert_eq!(patch.emoji, Patch::Clear);
                assert_eq!(patch.name, None);
            }
            other => panic!("expected update submission, got {other:?}"),
        }
    }

    #[test]
    fn test_unchanged_update_produces_empty_patch() {
        let form = NotebookForm::new(DialogMode::Update {
            notebook: notebook(),
        });
        match form.submission() {
            Submission::Update { patch, .. } => assert!(patch.is_empty()),
            other => panic!("expected update submission, got {other:?}"),
        }
    }
}
