//! High-level record operations over an Astronote SQLite database.

use crate::{
    AstronoteError, CreateNoteInput, CreateNotebookInput, Note, NotePatch, Notebook,
    NotebookPatch, Patch, Result, Storage, Workspace,
};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use uuid::Uuid;

/// Selects which notes [`Store::list_notes`] returns for a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteQuery {
    /// Every note that is not in the trash.
    All,
    /// Notes not attached to any notebook.
    Unsorted,
    /// Notes flagged as favorites.
    Favorites,
    /// Soft-deleted notes.
    Trash,
    /// Notes attached to the given notebook.
    Notebook(String),
}

/// An open Astronote store backed by a SQLite database.
///
/// `Store` is the single serialization point for all record mutations. The
/// desktop application shares one instance behind an `Arc<Mutex<…>>`; every
/// mutator runs inside a SQLite transaction and bumps `modified_at`.
pub struct Store {
    storage: Storage,
}

impl Store {
    /// Creates a new store database at `path` and initialises the schema.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            storage: Storage::create(path)?,
        })
    }

    /// Opens an existing store database at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AstronoteError::InvalidStore`] if the file is not an
    /// Astronote database, or [`AstronoteError::Database`] for any SQLite
    /// failure.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            storage: Storage::open(path)?,
        })
    }

    /// Opens the database at `path`, creating it first if it does not exist.
    pub fn open_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::open(path)
        } else {
            Self::create(path)
        }
    }

    /// Opens a transient in-memory store.
    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            storage: Storage::in_memory()?,
        })
    }

    /// Returns the underlying SQLite connection.
    pub fn connection(&self) -> &Connection {
        self.storage.connection()
    }

    // ── workspaces ───────────────────────────────────────────────

    /// Creates a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`AstronoteError::ValidationFailed`] when `name` is empty.
    pub fn create_workspace(
        &mut self,
        name: &str,
        emoji: Option<String>,
        color: Option<String>,
    ) -> Result<Workspace> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AstronoteError::ValidationFailed(
                "Workspace name cannot be empty".to_string(),
            ));
        }

        let now = chrono::Utc::now().timestamp();
        let workspace = Workspace {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            emoji,
            color,
            created_at: now,
            modified_at: now,
        };

        self.connection().execute(
            "INSERT INTO workspaces (id, name, emoji, color, created_at, modified_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                workspace.id,
                workspace.name,
                workspace.emoji,
                workspace.color,
                workspace.created_at,
                workspace.modified_at,
            ],
        )?;

        log::info!("created workspace {} ({})", workspace.name, workspace.id);
        Ok(workspace)
    }

    /// Fetches a single workspace by ID.
    pub fn get_workspace(&self, workspace_id: &str) -> Result<Workspace> {
        self.connection()
            .query_row(
                "SELECT id, name, emoji, color, created_at, modified_at
                 FROM workspaces WHERE id = ?",
                [workspace_id],
                map_workspace_row,
            )
            .optional()?
            .ok_or_else(|| AstronoteError::WorkspaceNotFound(workspace_id.to_string()))
    }

    /// Lists all workspaces, ordered by case-insensitive name.
    pub fn list_workspaces(&self) -> Result<Vec<Workspace>> {
        let mut stmt = self.connection().prepare(
            "SELECT id, name, emoji, color, created_at, modified_at
             FROM workspaces ORDER BY name COLLATE NOCASE ASC",
        )?;
        let rows = stmt.query_map([], map_workspace_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ── notebooks ────────────────────────────────────────────────

    /// Creates a notebook from dialog input.
    ///
    /// # Errors
    ///
    /// Returns [`AstronoteError::ValidationFailed`] when the name is empty,
    /// [`AstronoteError::WorkspaceNotFound`] / [`AstronoteError::NotebookNotFound`]
    /// for dangling references, and [`AstronoteError::InvalidMove`] when the
    /// parent belongs to a different workspace.
    pub fn create_notebook(&mut self, input: CreateNotebookInput) -> Result<Notebook> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(AstronoteError::ValidationFailed(
                "Notebook name cannot be empty".to_string(),
            ));
        }

        self.get_workspace(&input.workspace_id)?;
        if let Some(parent_id) = &input.parent_id {
            let parent = self.get_notebook(parent_id)?;
            if parent.workspace_id != input.workspace_id {
                return Err(AstronoteError::InvalidMove(
                    "Parent notebook belongs to a different workspace".to_string(),
                ));
            }
        }

        let now = chrono::Utc::now().timestamp();
        let notebook = Notebook {
            id: Uuid::new_v4().to_string(),
            workspace_id: input.workspace_id,
            parent_id: input.parent_id,
            name: name.to_string(),
            emoji: input.emoji,
            description: input.description,
            is_expanded: true,
            created_at: now,
            modified_at: now,
        };

        self.connection().execute(
            "INSERT INTO notebooks (id, workspace_id, parent_id, name, emoji, description, is_expanded, created_at, modified_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                notebook.id,
                notebook.workspace_id,
                notebook.parent_id,
                notebook.name,
                notebook.emoji,
                notebook.description,
                notebook.is_expanded,
                notebook.created_at,
                notebook.modified_at,
            ],
        )?;

        log::info!("created notebook {} ({})", notebook.name, notebook.id);
        Ok(notebook)
    }

    /// Applies a partial update to a notebook.
    ///
    /// A `parent_id` patch is a reparent and runs the same checks as a
    /// drag-and-drop move: the new parent must exist, share the notebook's
    /// workspace, and must not be the notebook itself or one of its
    /// descendants.
    ///
    /// # Errors
    ///
    /// Returns [`AstronoteError::InvalidMove`] for cycles and cross-workspace
    /// parents, [`AstronoteError::ValidationFailed`] for an empty name patch.
    pub fn update_notebook(&mut self, notebook_id: &str, patch: NotebookPatch) -> Result<()> {
        let current = self.get_notebook(notebook_id)?;

        let name = match patch.name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(AstronoteError::ValidationFailed(
                        "Notebook name cannot be empty".to_string(),
                    ));
                }
                name
            }
            None => current.name.clone(),
        };

        if let Patch::Set(parent_id) = &patch.parent_id {
            self.check_reparent(notebook_id, &current.workspace_id, parent_id)?;
        }

        let emoji = patch.emoji.apply(current.emoji);
        let description = patch.description.apply(current.description);
        let parent_id = patch.parent_id.apply(current.parent_id);
        let now = chrono::Utc::now().timestamp();

        let tx = self.storage.connection_mut().transaction()?;
        tx.execute(
            "UPDATE notebooks SET name = ?, emoji = ?, description = ?, parent_id = ?, modified_at = ?
             WHERE id = ?",
            rusqlite::params![name, emoji, description, parent_id, now, notebook_id],
        )?;
        tx.commit()?;

        Ok(())
    }

    /// Persists the sidebar disclosure state of a notebook.
    pub fn set_notebook_expanded(&mut self, notebook_id: &str, expanded: bool) -> Result<()> {
        let changed = self.connection().execute(
            "UPDATE notebooks SET is_expanded = ? WHERE id = ?",
            rusqlite::params![expanded, notebook_id],
        )?;
        if changed == 0 {
            return Err(AstronoteError::NotebookNotFound(notebook_id.to_string()));
        }
        Ok(())
    }

    /// Fetches a single notebook by ID.
    pub fn get_notebook(&self, notebook_id: &str) -> Result<Notebook> {
        self.connection()
            .query_row(
                "SELECT id, workspace_id, parent_id, name, emoji, description, is_expanded, created_at, modified_at
                 FROM notebooks WHERE id = ?",
                [notebook_id],
                map_notebook_row,
            )
            .optional()?
            .ok_or_else(|| AstronoteError::NotebookNotFound(notebook_id.to_string()))
    }

    /// Lists every notebook in a workspace, ordered by case-insensitive name.
    pub fn list_notebooks(&self, workspace_id: &str) -> Result<Vec<Notebook>> {
        let mut stmt = self.connection().prepare(
            "SELECT id, workspace_id, parent_id, name, emoji, description, is_expanded, created_at, modified_at
             FROM notebooks WHERE workspace_id = ? ORDER BY name COLLATE NOCASE ASC",
        )?;
        let rows = stmt.query_map([workspace_id], map_notebook_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Lists root-level notebooks of a workspace, ordered by case-insensitive name.
    pub fn root_notebooks(&self, workspace_id: &str) -> Result<Vec<Notebook>> {
        let mut stmt = self.connection().prepare(
            "SELECT id, workspace_id, parent_id, name, emoji, description, is_expanded, created_at, modified_at
             FROM notebooks WHERE workspace_id = ? AND parent_id IS NULL
             ORDER BY name COLLATE NOCASE ASC",
        )?;
        let rows = stmt.query_map([workspace_id], map_notebook_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Lists the direct children of a notebook, ordered by case-insensitive name.
    pub fn child_notebooks(&self, parent_id: &str) -> Result<Vec<Notebook>> {
        let mut stmt = self.connection().prepare(
            "SELECT id, workspace_id, parent_id, name, emoji, description, is_expanded, created_at, modified_at
             FROM notebooks WHERE parent_id = ? ORDER BY name COLLATE NOCASE ASC",
        )?;
        let rows = stmt.query_map([parent_id], map_notebook_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Validates a reparent target for `notebook_id`.
    fn check_reparent(
        &self,
        notebook_id: &str,
        workspace_id: &str,
        new_parent_id: &str,
    ) -> Result<()> {
        if new_parent_id == notebook_id {
            return Err(AstronoteError::InvalidMove(
                "A notebook cannot be its own parent".to_string(),
            ));
        }

        let parent = self.get_notebook(new_parent_id)?;
        if parent.workspace_id != workspace_id {
            return Err(AstronoteError::InvalidMove(
                "Parent notebook belongs to a different workspace".to_string(),
            ));
        }

        // Walk the ancestor chain of the new parent; hitting the notebook
        // being moved means the move would create a cycle.
        let mut current = new_parent_id.to_string();
        loop {
            let parent_of: Option<String> = self
                .connection()
                .query_row(
                    "SELECT parent_id FROM notebooks WHERE id = ?",
                    [&current],
                    |row| row.get(0),
                )
                .optional()?
                .ok_or_else(|| AstronoteError::NotebookNotFound(current.clone()))?;
            match parent_of {
                Some(pid) => {
                    if pid == notebook_id {
                        return Err(AstronoteError::InvalidMove(
                            "Move would create a cycle".to_string(),
                        ));
                    }
                    current = pid;
                }
                None => break,
            }
        }

        Ok(())
    }

    // ── notes ────────────────────────────────────────────────────

    /// Creates a note, unsorted or attached to a notebook.
    pub fn create_note(&mut self, input: CreateNoteInput) -> Result<Note> {
        self.get_workspace(&input.workspace_id)?;
        if let Some(notebook_id) = &input.notebook_id {
            let notebook = self.get_notebook(notebook_id)?;
            if notebook.workspace_id != input.workspace_id {
                return Err(AstronoteError::InvalidMove(
                    "Notebook belongs to a different workspace".to_string(),
                ));
            }
        }

        let now = chrono::Utc::now().timestamp();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            workspace_id: input.workspace_id,
            notebook_id: input.notebook_id,
            title: input.title,
            content: input.content,
            is_pinned: false,
            is_favorite: false,
            is_deleted: false,
            created_at: now,
            modified_at: now,
        };

        self.insert_note(&note)?;
        Ok(note)
    }

    /// Applies a partial update to a note.
    ///
    /// Flag toggles arrive here as single-field patches; applying the same
    /// toggle twice restores the original state.
    pub fn update_note(&mut self, note_id: &str, patch: NotePatch) -> Result<()> {
        let current = self.get_note(note_id)?;

        if let Patch::Set(notebook_id) = &patch.notebook_id {
            let notebook = self.get_notebook(notebook_id)?;
            if notebook.workspace_id != current.workspace_id {
                return Err(AstronoteError::InvalidMove(
                    "Notebook belongs to a different workspace".to_string(),
                ));
            }
        }

        let title = patch.title.unwrap_or(current.title);
        let content = patch.content.unwrap_or(current.content);
        let notebook_id = patch.notebook_id.apply(current.notebook_id);
        let is_pinned = patch.is_pinned.unwrap_or(current.is_pinned);
        let is_favorite = patch.is_favorite.unwrap_or(current.is_favorite);
        let is_deleted = patch.is_deleted.unwrap_or(current.is_deleted);
        let now = chrono::Utc::now().timestamp();

        let tx = self.storage.connection_mut().transaction()?;
        tx.execute(
            "UPDATE notes SET title = ?, content = ?, notebook_id = ?, is_pinned = ?, is_favorite = ?, is_deleted = ?, modified_at = ?
             WHERE id = ?",
            rusqlite::params![
                title,
                content,
                notebook_id,
                is_pinned,
                is_favorite,
                is_deleted,
                now,
                note_id
            ],
        )?;
        tx.commit()?;

        Ok(())
    }

    /// Creates a copy of a note with a fresh ID and timestamps.
    ///
    /// The copy keeps the body, notebook attachment and flags; the title is
    /// suffixed with `" (Copy)"`.
    pub fn duplicate_note(&mut self, note_id: &str) -> Result<Note> {
        let original = self.get_note(note_id)?;
        let now = chrono::Utc::now().timestamp();
        let copy = Note {
            id: Uuid::new_v4().to_string(),
            title: format!("{} (Copy)", original.title),
            created_at: now,
            modified_at: now,
            ..original
        };

        self.insert_note(&copy)?;
        log::info!("duplicated note {} -> {}", note_id, copy.id);
        Ok(copy)
    }

    /// Fetches a single note by ID.
    pub fn get_note(&self, note_id: &str) -> Result<Note> {
        self.connection()
            .query_row(
                "SELECT id, workspace_id, notebook_id, title, content, is_pinned, is_favorite, is_deleted, created_at, modified_at
                 FROM notes WHERE id = ?",
                [note_id],
                map_note_row,
            )
            .optional()?
            .ok_or_else(|| AstronoteError::NoteNotFound(note_id.to_string()))
    }

    /// Lists notes in a workspace matching `query`, pinned first and then by
    /// most recent modification.
    pub fn list_notes(&self, workspace_id: &str, query: NoteQuery) -> Result<Vec<Note>> {
        let (filter, binds): (&str, Vec<&str>) = match &query {
            NoteQuery::All => ("workspace_id = ?1 AND is_deleted = 0", vec![workspace_id]),
            NoteQuery::Unsorted => (
                "workspace_id = ?1 AND notebook_id IS NULL AND is_deleted = 0",
                vec![workspace_id],
            ),
            NoteQuery::Favorites => (
                "workspace_id = ?1 AND is_favorite = 1 AND is_deleted = 0",
                vec![workspace_id],
            ),
            NoteQuery::Trash => ("workspace_id = ?1 AND is_deleted = 1", vec![workspace_id]),
            NoteQuery::Notebook(id) => (
                "workspace_id = ?1 AND notebook_id = ?2 AND is_deleted = 0",
                vec![workspace_id, id.as_str()],
            ),
        };

        let sql = format!(
            "SELECT id, workspace_id, notebook_id, title, content, is_pinned, is_favorite, is_deleted, created_at, modified_at
             FROM notes WHERE {filter}
             ORDER BY is_pinned DESC, modified_at DESC, created_at DESC"
        );
        let mut stmt = self.connection().prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(binds), map_note_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    fn insert_note(&mut self, note: &Note) -> Result<()> {
        self.connection().execute(
            "INSERT INTO notes (id, workspace_id, notebook_id, title, content, is_pinned, is_favorite, is_deleted, created_at, modified_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                note.id,
                note.workspace_id,
                note.notebook_id,
                note.title,
                note.content,
                note.is_pinned,
                note.is_favorite,
                note.is_deleted,
                note.created_at,
                note.modified_at,
            ],
        )?;
        Ok(())
    }
}

fn map_workspace_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Workspace> {
    Ok(Workspace {
        id: row.get(0)?,
        name: row.get(1)?,
        emoji: row.get(2)?,
        color: row.get(3)?,
        created_at: row.get(4)?,
        modified_at: row.get(5)?,
    })
}

fn map_notebook_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Notebook> {
    Ok(Notebook {
        id: row.get(0)?,
        workspace_id: row.get(1)?,
        parent_id: row.get(2)?,
        name: row.get(3)?,
        emoji: row.get(4)?,
        description: row.get(5)?,
        is_expanded: row.get(6)?,
        created_at: row.get(7)?,
        modified_at: row.get(8)?,
    })
}

fn map_note_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        workspace_id: row.get(1)?,
        notebook_id: row.get(2)?,
        title: row.get(3)?,
        content: row.get(4)?,
        is_pinned: row.get(5)?,
        is_favorite: row.get(6)?,
        is_deleted: row.get(7)?,
        created_at: row.get(8)?,
        modified_at: row.get(9)?,
    })
}
