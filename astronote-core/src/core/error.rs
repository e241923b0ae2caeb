//! Error types for the Astronote core library.

use thiserror::Error;

/// All errors that can occur within the Astronote core library.
#[derive(Debug, Error)]
pub enum AstronoteError {
    /// A SQLite operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A workspace ID was requested that does not exist.
    #[error("Workspace not found: {0}")]
    WorkspaceNotFound(String),

    /// A notebook ID was requested that does not exist.
    #[error("Notebook not found: {0}")]
    NotebookNotFound(String),

    /// A note ID was requested that does not exist.
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    /// A required field was empty or otherwise invalid.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// A reparent would create a cycle or cross a workspace boundary.
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    /// The opened file is not a valid Astronote database.
    #[error("Invalid store: {0}")]
    InvalidStore(String),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored record data could not be serialized to or from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`AstronoteError`].
pub type Result<T> = std::result::Result<T, AstronoteError>;

impl AstronoteError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(e) => format!("Failed to save: {e}"),
            Self::WorkspaceNotFound(_) => "Workspace no longer exists".to_string(),
            Self::NotebookNotFound(_) => "Notebook no longer exists".to_string(),
            Self::NoteNotFound(_) => "Note no longer exists".to_string(),
            Self::ValidationFailed(msg) => msg.clone(),
            Self::InvalidMove(msg) => msg.clone(),
            Self::InvalidStore(_) => "Could not open the Astronote data file".to_string(),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}
