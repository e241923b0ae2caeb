//! In-app routes and their canonical paths.

use astronote_core::{paths, NoteQuery, Notebook};

/// Which note collection the main pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    All,
    Unsorted,
    Favorites,
    Trash,
    Notebook(String),
}

impl Route {
    /// The route for a notebook's canonical path.
    pub fn for_notebook(notebook: &Notebook) -> Route {
        Route::Notebook(notebook.id.clone())
    }

    /// Canonical path of this route within a workspace.
    pub fn path(&self, workspace_id: &str) -> String {
        match self {
            Route::All => format!("/workspaces/{workspace_id}/notes"),
            Route::Unsorted => paths::unsorted_path(workspace_id),
            Route::Favorites => format!("/workspaces/{workspace_id}/favorites"),
            Route::Trash => format!("/workspaces/{workspace_id}/trash"),
            Route::Notebook(id) => format!("/workspaces/{workspace_id}/notebooks/{id}"),
        }
    }

    /// The store query backing this route.
    pub fn query(&self) -> NoteQuery {
        match self {
            Route::All => NoteQuery::All,
            Route::Unsorted => NoteQuery::Unsorted,
            Route::Favorites => NoteQuery::Favorites,
            Route::Trash => NoteQuery::Trash,
            Route::Notebook(id) => NoteQuery::Notebook(id.clone()),
        }
    }

    /// Title shown above the note list.
    pub fn title(&self, notebooks: &[Notebook]) -> String {
        match self {
            Route::All => "All Notes".to_string(),
            Route::Unsorted => "Unsorted".to_string(),
            Route::Favorites => "Favorites".to_string(),
            Route::Trash => "Trash".to_string(),
            Route::Notebook(id) => notebooks
                .iter()
                .find(|nb| &nb.id == id)
                .map(|nb| nb.name.clone())
                .unwrap_or_else(|| "Notebook".to_string()),
        }
    }

    /// The notebook new notes should attach to under this route.
    pub fn notebook_id(&self) -> Option<String> {
        match self {
            Route::Notebook(id) => Some(id.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astronote_core::notebook_path;

    fn notebook() -> Notebook {
        Notebook {
            id: "nb1".to_string(),
            workspace_id: "w1".to_string(),
            parent_id: None,
            name: "Work".to_string(),
            emoji: None,
            description: None,
            is_expanded: true,
            created_at: 0,
            modified_at: 0,
        }
    }

    #[test]
    fn test_notebook_route_path_matches_canonical_path() {
        let nb = notebook();
        let route = Route::for_notebook(&nb);
        assert_eq!(route.path("w1"), notebook_path(&nb));
    }

    #[test]
    fn test_unsorted_route_path() {
        assert_eq!(Route::Unsorted.path("w1"), "/workspaces/w1/unsorted");
    }

    #[test]
    fn test_route_queries() {
        assert_eq!(Route::Trash.query(), NoteQuery::Trash);
        assert_eq!(
            Route::Notebook("nb1".to_string()).query(),
            NoteQuery::Notebook("nb1".to_string())
        );
    }
}
