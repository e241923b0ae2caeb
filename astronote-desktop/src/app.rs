//! The Astronote iced application: state, messages, update loop and views.
//!
//! Components hold no record state of their own; the store is the single
//! owner and every view renders from the snapshot refreshed after each
//! mutation. Store mutations run as `Task::perform` futures so the update
//! loop itself never blocks on SQLite.

use crate::context_menu;
use crate::dialog::{self, DialogStack};
use crate::router::Route;
use crate::sidebar::{self, DragPayload, DropTarget};
use astronote_core::{
    default_export_dir, export_note, note_context_menu, note_path, render_note, CreateNoteInput,
    DialogMode, Note, NoteAction, NotePatch, Notebook, NotebookForm, NotebookPatch, Patch, Store,
    Submission, Workspace,
};
use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, scrollable, stack, text, Space,
};
use iced::{Alignment, Color, Element, Length, Task, Theme};
use std::sync::{Arc, Mutex};

/// Outcome of a notebook dialog submission.
#[derive(Debug, Clone)]
pub enum SavedNotebook {
    Created(Notebook),
    Updated,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    // Sidebar
    OpenCreateNotebook { parent_id: Option<String> },
    OpenEditNotebook(String),
    ToggleExpanded(String),
    NotebookPressed(String),
    NotebookReleased(String),
    ZoneEntered(usize),
    ZoneExited(usize),
    ZoneReleased(DropTarget),
    // Note list
    NotePressed(String),
    NoteReleased(String),
    NewNote,
    OpenNoteMenu(String),
    // Dialog
    DialogNameChanged(String),
    DialogDescriptionChanged(String),
    DialogEmojiPicked(String),
    DialogEmojiCleared,
    DialogSubmit,
    DialogDismiss,
    NotebookSaved {
        dialog_id: u64,
        result: Result<SavedNotebook, String>,
    },
    // Context menu
    MenuToggleSubmenu(String),
    MenuAction(NoteAction),
    MenuDismiss,
    // Async action results
    Mutated(Result<Option<String>, String>),
    Exported(Result<String, String>),
    Copied(String),
    DismissNotice,
}

struct MenuState {
    note: Note,
    open_submenu: Option<String>,
}

struct DragState {
    payload: DragPayload,
    hover_zone: Option<usize>,
}

pub struct App {
    store: Arc<Mutex<Store>>,
    workspace: Workspace,
    notebooks: Vec<Notebook>,
    notes: Vec<Note>,
    route: Route,
    dialogs: DialogStack,
    next_dialog_id: u64,
    menu: Option<MenuState>,
    drag: Option<DragState>,
    selected_note: Option<String>,
    notice: Option<String>,
}

impl App {
    pub fn new(store: Arc<Mutex<Store>>, workspace: Workspace) -> Self {
        let mut app = Self {
            store,
            workspace,
            notebooks: Vec::new(),
            notes: Vec::new(),
            route: Route::All,
            dialogs: DialogStack::new(),
            next_dialog_id: 1,
            menu: None,
            drag: None,
            selected_note: None,
            notice: None,
        };
        app.refresh();
        app
    }

    pub fn title(&self) -> String {
        format!("Astronote — {}", self.workspace.name)
    }

    /// Reloads the notebook and note snapshots for the current route.
    fn refresh(&mut self) {
        let result = {
            let store = self.store.lock().expect("store mutex poisoned");
            store
                .list_notebooks(&self.workspace.id)
                .and_then(|notebooks| {
                    let notes = store.list_notes(&self.workspace.id, self.route.query())?;
                    Ok((notebooks, notes))
                })
        };
        match result {
            Ok((notebooks, notes)) => {
                self.notebooks = notebooks;
                self.notes = notes;
            }
            Err(e) => {
                log::error!("failed to refresh workspace snapshot: {e}");
                self.notice = Some(e.user_message());
            }
        }
    }

    fn navigate(&mut self, route: Route) {
        self.route = route;
        self.selected_note = None;
        self.refresh();
    }

    fn show_dialog(&mut self, form: NotebookForm) {
        let id = self.next_dialog_id;
        self.next_dialog_id += 1;
        self.dialogs.show(id, form);
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                self.navigate(route);
                Task::none()
            }

            Message::OpenCreateNotebook { parent_id } => {
                self.show_dialog(NotebookForm::new(DialogMode::Create {
                    workspace_id: self.workspace.id.clone(),
                    parent_id,
                }));
                Task::none()
            }

            Message::OpenEditNotebook(id) => {
                let fetched = {
                    let store = self.store.lock().expect("store mutex poisoned");
                    store.get_notebook(&id)
                };
                match fetched {
                    Ok(notebook) => {
                        self.show_dialog(NotebookForm::new(DialogMode::Update { notebook }));
                    }
                    Err(e) => self.notice = Some(e.user_message()),
                }
                Task::none()
            }

            Message::ToggleExpanded(id) => {
                let result = {
                    let mut store = self.store.lock().expect("store mutex poisoned");
                    store
                        .get_notebook(&id)
                        .and_then(|nb| store.set_notebook_expanded(&id, !nb.is_expanded))
                };
                if let Err(e) = result {
                    self.notice = Some(e.user_message());
                }
                self.refresh();
                Task::none()
            }

            Message::NotebookPressed(id) => {
                self.drag = Some(DragState {
                    payload: DragPayload::Notebook { id },
                    hover_zone: None,
                });
                Task::none()
            }

            Message::NotePressed(id) => {
                self.drag = Some(DragState {
                    payload: DragPayload::Note { id },
                    hover_zone: None,
                });
                Task::none()
            }

            Message::ZoneEntered(index) => {
                if let Some(drag) = &mut self.drag {
                    drag.hover_zone = Some(index);
                }
                Task::none()
            }

            Message::ZoneExited(index) => {
                if let Some(drag) = &mut self.drag {
                    if drag.hover_zone == Some(index) {
                        drag.hover_zone = None;
                    }
                }
                Task::none()
            }

            Message::ZoneReleased(target) => match self.drag.take() {
                Some(drag) => self.perform_drop(drag.payload, target),
                None => Task::none(),
            },

            Message::NotebookReleased(id) => match self.drag.take() {
                Some(DragState {
                    payload: DragPayload::Notebook { id: dragged },
                    ..
                }) if dragged == id => {
                    // Press and release on the same notebook is a click
                    self.navigate(Route::Notebook(id));
                    Task::none()
                }
                Some(DragState { payload, .. }) => {
                    // Released over another notebook: it becomes the parent
                    let name = self
                        .notebooks
                        .iter()
                        .find(|nb| nb.id == id)
                        .map(|nb| nb.name.clone())
                        .unwrap_or_default();
                    self.perform_drop(payload, DropTarget { id: Some(id), name })
                }
                None => {
                    self.navigate(Route::Notebook(id));
                    Task::none()
                }
            },

            Message::NoteReleased(id) => {
                match self.drag.take() {
                    Some(DragState {
                        payload: DragPayload::Note { id: dragged },
                        ..
                    }) if dragged == id => self.selected_note = Some(id),
                    Some(_) => {} // note rows are not drop targets
                    None => self.selected_note = Some(id),
                }
                Task::none()
            }

            Message::NewNote => {
                let input = CreateNoteInput {
                    workspace_id: self.workspace.id.clone(),
                    notebook_id: self.route.notebook_id(),
                    title: "Untitled".to_string(),
                    content: String::new(),
                };
                let store = Arc::clone(&self.store);
                Task::perform(
                    async move {
                        let mut store = store.lock().expect("store mutex poisoned");
                        store
                            .create_note(input)
                            .map(|note| Some(format!("Created \"{}\"", note.title)))
                            .map_err(|e| e.user_message())
                    },
                    Message::Mutated,
                )
            }

            Message::OpenNoteMenu(id) => {
                let fetched = {
                    let store = self.store.lock().expect("store mutex poisoned");
                    store.get_note(&id)
                };
                match fetched {
                    Ok(note) => {
                        self.menu = Some(MenuState {
                            note,
                            open_submenu: None,
                        })
                    }
                    Err(e) => self.notice = Some(e.user_message()),
                }
                Task::none()
            }

            Message::DialogNameChanged(name) => {
                if let Some(dialog) = self.dialogs.top_mut() {
                    dialog.form.set_name(name);
                }
                Task::none()
            }

            Message::DialogDescriptionChanged(description) => {
                if let Some(dialog) = self.dialogs.top_mut() {
                    dialog.form.set_description(description);
                }
                Task::none()
            }

            Message::DialogEmojiPicked(emoji) => {
                if let Some(dialog) = self.dialogs.top_mut() {
                    dialog.form.set_emoji(emoji);
                }
                Task::none()
            }

            Message::DialogEmojiCleared => {
                if let Some(dialog) = self.dialogs.top_mut() {
                    dialog.form.clear_emoji();
                }
                Task::none()
            }

            Message::DialogDismiss => {
                self.dialogs.close_all();
                Task::none()
            }

            Message::DialogSubmit => {
                let Some(dialog) = self.dialogs.top_mut() else {
                    return Task::none();
                };
                if dialog.form.submitting || !dialog.form.validate() {
                    return Task::none();
                }
                dialog.form.submitting = true;

                let dialog_id = dialog.id;
                let submission = dialog.form.submission();
                let store = Arc::clone(&self.store);
                Task::perform(
                    async move {
                        let mut store = store.lock().expect("store mutex poisoned");
                        match submission {
                            Submission::Create(input) => {
                                store.create_notebook(input).map(SavedNotebook::Created)
                            }
                            Submission::Update { id, patch } => store
                                .update_notebook(&id, patch)
                                .map(|_| SavedNotebook::Updated),
                        }
                        .map_err(|e| e.user_message())
                    },
                    move |result| Message::NotebookSaved { dialog_id, result },
                )
            }

            Message::NotebookSaved { dialog_id, result } => {
                if !self.dialogs.contains(dialog_id) {
                    // The dialog was closed mid-flight. The store change
                    // stands, but no navigation or close runs on its behalf.
                    log::info!("dropping submission result for closed dialog {dialog_id}");
                    self.refresh();
                    return Task::none();
                }
                match result {
                    Ok(SavedNotebook::Created(notebook)) => {
                        self.dialogs.close_all();
                        self.navigate(Route::for_notebook(&notebook));
                    }
                    Ok(SavedNotebook::Updated) => {
                        self.dialogs.close_all();
                        self.refresh();
                    }
                    Err(message) => {
                        // Another dialog may have been pushed meanwhile; the
                        // error belongs to the one that submitted.
                        if let Some(dialog) = self.dialogs.get_mut(dialog_id) {
                            dialog.form.submitting = false;
                            dialog.form.error = Some(message);
                        }
                    }
                }
                Task::none()
            }

            Message::MenuToggleSubmenu(label) => {
                if let Some(menu) = &mut self.menu {
                    menu.open_submenu = if menu.open_submenu.as_deref() == Some(label.as_str()) {
                        None
                    } else {
                        Some(label)
                    };
                }
                Task::none()
            }

            Message::MenuAction(action) => match self.menu.take() {
                Some(menu) => self.dispatch_note_action(menu.note, action),
                None => Task::none(),
            },

            Message::MenuDismiss => {
                self.menu = None;
                Task::none()
            }

            Message::Mutated(result) => {
                match result {
                    Ok(notice) => self.notice = notice,
                    Err(message) => self.notice = Some(message),
                }
                self.refresh();
                Task::none()
            }

            Message::Exported(result) => {
                self.notice = Some(match result {
                    Ok(path) => format!("Exported to {path}"),
                    Err(message) => message,
                });
                Task::none()
            }

            Message::Copied(notice) => {
                self.notice = Some(notice);
                Task::none()
            }

            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    /// Applies a drag-and-drop release onto `target`.
    fn perform_drop(&mut self, payload: DragPayload, target: DropTarget) -> Task<Message> {
        let store = Arc::clone(&self.store);
        match payload {
            DragPayload::Note { id } => Task::perform(
                async move {
                    let patch = NotePatch {
                        notebook_id: match &target.id {
                            Some(notebook_id) => Patch::Set(notebook_id.clone()),
                            None => Patch::Clear,
                        },
                        ..NotePatch::default()
                    };
                    let mut store = store.lock().expect("store mutex poisoned");
                    store
                        .update_note(&id, patch)
                        .map(|_| Some(format!("Moved note to {}", target.name)))
                        .map_err(|e| e.user_message())
                },
                Message::Mutated,
            ),
            DragPayload::Notebook { id } => {
                if target.id.as_deref() == Some(id.as_str()) {
                    return Task::none();
                }
                Task::perform(
                    async move {
                        let patch = NotebookPatch {
                            parent_id: match &target.id {
                                Some(parent_id) => Patch::Set(parent_id.clone()),
                                None => Patch::Clear,
                            },
                            ..NotebookPatch::default()
                        };
                        let mut store = store.lock().expect("store mutex poisoned");
                        store
                            .update_notebook(&id, patch)
                            .map(|_| Some(format!("Moved notebook to {}", target.name)))
                            .map_err(|e| e.user_message())
                    },
                    Message::Mutated,
                )
            }
        }
    }

    /// Dispatches a context menu action for `note`.
    fn dispatch_note_action(&mut self, note: Note, action: NoteAction) -> Task<Message> {
        match action {
            NoteAction::TogglePinned => self.toggle_task(
                note.id.clone(),
                NotePatch {
                    is_pinned: Some(!note.is_pinned),
                    ..NotePatch::default()
                },
                if note.is_pinned {
                    "Removed from sidebar"
                } else {
                    "Pinned to sidebar"
                },
            ),
            NoteAction::ToggleFavorite => self.toggle_task(
                note.id.clone(),
                NotePatch {
                    is_favorite: Some(!note.is_favorite),
                    ..NotePatch::default()
                },
                if note.is_favorite {
                    "Removed from favorites"
                } else {
                    "Added to favorites"
                },
            ),
            NoteAction::ToggleDeleted => self.toggle_task(
                note.id.clone(),
                NotePatch {
                    is_deleted: Some(!note.is_deleted),
                    ..NotePatch::default()
                },
                if note.is_deleted {
                    "Restored from Trash"
                } else {
                    "Moved to Trash"
                },
            ),
            NoteAction::Duplicate => {
                let store = Arc::clone(&self.store);
                Task::perform(
                    async move {
                        let mut store = store.lock().expect("store mutex poisoned");
                        store
                            .duplicate_note(&note.id)
                            .map(|copy| Some(format!("Duplicated as \"{}\"", copy.title)))
                            .map_err(|e| e.user_message())
                    },
                    Message::Mutated,
                )
            }
            NoteAction::CopyLink => Task::batch([
                iced::clipboard::write(note_path(&note)),
                Task::done(Message::Copied("Link copied to clipboard".to_string())),
            ]),
            NoteAction::CopyAs(format) => match render_note(&note, format) {
                Ok(rendered) => Task::batch([
                    iced::clipboard::write(rendered),
                    Task::done(Message::Copied(format!(
                        "Copied note as {}",
                        format.display_name()
                    ))),
                ]),
                Err(e) => {
                    self.notice = Some(e.user_message());
                    Task::none()
                }
            },
            NoteAction::ExportAs(format) => Task::perform(
                async move {
                    export_note(&note, format, &default_export_dir())
                        .map(|path| path.display().to_string())
                        .map_err(|e| e.user_message())
                },
                Message::Exported,
            ),
        }
    }

    fn toggle_task(&self, note_id: String, patch: NotePatch, notice: &str) -> Task<Message> {
        let store = Arc::clone(&self.store);
        let notice = notice.to_string();
        Task::perform(
            async move {
                let mut store = store.lock().expect("store mutex poisoned");
                store
                    .update_note(&note_id, patch)
                    .map(|_| Some(notice))
                    .map_err(|e| e.user_message())
            },
            Message::Mutated,
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let hover_zone = self.drag.as_ref().and_then(|drag| drag.hover_zone);
        let rows = sidebar::sidebar_rows(&self.notebooks);
        let sidebar = container(scrollable(sidebar::view(
            &self.workspace,
            rows,
            hover_zone,
            &self.route,
        )))
        .width(260)
        .height(Length::Fill);

        let mut content = column![row![sidebar, self.notes_view()].height(Length::Fill)];
        if let Some(notice) = &self.notice {
            content = content.push(notice_view(notice));
        }
        let base: Element<'_, Message> = content.into();

        if let Some(menu) = &self.menu {
            let entries = note_context_menu(&menu.note);
            modal(
                base,
                context_menu::view(entries, menu.open_submenu.as_deref()),
                Message::MenuDismiss,
            )
        } else if let Some(dialog) = self.dialogs.top() {
            modal(base, dialog::view(dialog), Message::DialogDismiss)
        } else {
            base
        }
    }

    fn notes_view(&self) -> Element<'_, Message> {
        let title_bar = row![
            text(self.route.title(&self.notebooks)).size(18),
            Space::with_width(Length::Fill),
            button(text("New Note").size(14)).on_press(Message::NewNote),
        ]
        .align_y(Alignment::Center)
        .padding(8);

        let mut list = column![].spacing(2).padding(8);
        if self.notes.is_empty() {
            list = list.push(
                container(text("No notes here yet").size(14))
                    .width(Length::Fill)
                    .center_x(Length::Fill)
                    .padding(12),
            );
        }
        for note in &self.notes {
            let selected = self.selected_note.as_deref() == Some(note.id.as_str());
            let mut badges = String::new();
            if note.is_pinned {
                badges.push_str("📌 ");
            }
            if note.is_favorite {
                badges.push_str("⭐ ");
            }
            let label = text(format!("{badges}{}", note.title)).size(14);
            list = list.push(
                mouse_area(
                    container(label)
                        .width(Length::Fill)
                        .padding(6)
                        .style(move |_theme: &Theme| container::Style {
                            background: selected.then(|| Color::from_rgb8(55, 65, 81).into()),
                            ..container::Style::default()
                        }),
                )
                .on_press(Message::NotePressed(note.id.clone()))
                .on_release(Message::NoteReleased(note.id.clone()))
                .on_right_press(Message::OpenNoteMenu(note.id.clone())),
            );
        }

        column![title_bar, scrollable(list).height(Length::Fill)]
            .width(Length::Fill)
            .into()
    }
}

fn notice_view(notice: &str) -> Element<'static, Message> {
    container(
        row![
            text(notice.to_string()).size(14),
            Space::with_width(Length::Fill),
            button(text("Dismiss").size(12))
                .style(button::text)
                .on_press(Message::DismissNotice),
        ]
        .align_y(Alignment::Center)
        .spacing(8),
    )
    .width(Length::Fill)
    .padding(8)
    .style(container::bordered_box)
    .into()
}

fn modal<'a>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(mouse_area(center(opaque(content))).on_press(on_blur))
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use astronote_core::notebook_path;

    fn test_app() -> App {
        let mut store = Store::in_memory().unwrap();
        let workspace = store.create_workspace("Personal", None, None).unwrap();
        App::new(Arc::new(Mutex::new(store)), workspace)
    }

    fn create_notebook(app: &mut App, name: &str) -> Notebook {
        let workspace_id = app.workspace.id.clone();
        let notebook = {
            let mut store = app.store.lock().unwrap();
            store
                .create_notebook(astronote_core::CreateNotebookInput {
                    workspace_id,
                    parent_id: None,
                    name: name.to_string(),
                    emoji: None,
                    description: None,
                })
                .unwrap()
        };
        app.refresh();
        notebook
    }

    #[test]
    fn test_create_dialog_flow_navigates_and_closes() {
        let mut app = test_app();

        let _ = app.update(Message::OpenCreateNotebook { parent_id: None });
        let dialog_id = app.dialogs.top().unwrap().id;
        let _ = app.update(Message::DialogNameChanged("Work".to_string()));
        let _ = app.update(Message::DialogSubmit);
        assert!(app.dialogs.top().unwrap().form.submitting);

        // Simulate the awaited store call resolving
        let created = create_notebook(&mut app, "Work");
        let _ = app.update(Message::NotebookSaved {
            dialog_id,
            result: Ok(SavedNotebook::Created(created.clone())),
        });

        assert!(app.dialogs.is_empty());
        assert_eq!(app.route, Route::Notebook(created.id.clone()));
        assert_eq!(
            app.route.path(&app.workspace.id),
            notebook_path(&created)
        );
    }

    #[test]
    fn test_empty_name_submission_shows_error_and_skips_store() {
        let mut app = test_app();

        let _ = app.update(Message::OpenCreateNotebook { parent_id: None });
        let _ = app.update(Message::DialogSubmit);

        let dialog = app.dialogs.top().unwrap();
        assert!(!dialog.form.submitting);
        assert_eq!(
            dialog.form.error.as_deref(),
            Some("Notebook Name is a required field")
        );
        assert_eq!(app.dialogs.len(), 1);

        let store = app.store.lock().unwrap();
        assert!(store.root_notebooks(&app.workspace.id).unwrap().is_empty());
    }

    #[test]
    fn test_failed_submission_keeps_dialog_populated() {
        let mut app = test_app();

        let _ = app.update(Message::OpenCreateNotebook { parent_id: None });
        let dialog_id = app.dialogs.top().unwrap().id;
        let _ = app.update(Message::DialogNameChanged("Work".to_string()));
        let _ = app.update(Message::DialogSubmit);

        let _ = app.update(Message::NotebookSaved {
            dialog_id,
            result: Err("Failed to save: disk full".to_string()),
        });

        let dialog = app.dialogs.top().unwrap();
        assert_eq!(dialog.form.name, "Work");
        assert!(!dialog.form.submitting);
        assert_eq!(
            dialog.form.error.as_deref(),
            Some("Failed to save: disk full")
        );
        assert_eq!(app.route, Route::All);
    }

    #[test]
    fn test_failed_submission_error_lands_on_originating_dialog() {
        let mut app = test_app();

        let _ = app.update(Message::OpenCreateNotebook { parent_id: None });
        let submitter_id = app.dialogs.top().unwrap().id;
        let _ = app.update(Message::DialogNameChanged("Work".to_string()));
        let _ = app.update(Message::DialogSubmit);

        // A second dialog opens while the mutation is in flight
        let _ = app.update(Message::OpenCreateNotebook { parent_id: None });
        let top_id = app.dialogs.top().unwrap().id;
        assert_ne!(top_id, submitter_id);

        let _ = app.update(Message::NotebookSaved {
            dialog_id: submitter_id,
            result: Err("Failed to save: disk full".to_string()),
        });

        let submitter = app.dialogs.get_mut(submitter_id).unwrap();
        assert!(!submitter.form.submitting);
        assert_eq!(
            submitter.form.error.as_deref(),
            Some("Failed to save: disk full")
        );

        let top = app.dialogs.top().unwrap();
        assert_eq!(top.id, top_id);
        assert!(top.form.error.is_none());
        assert!(!top.form.submitting);
    }

    #[test]
    fn test_stale_submission_result_applies_no_side_effects() {
        let mut app = test_app();

        let _ = app.update(Message::OpenCreateNotebook { parent_id: None });
        let dialog_id = app.dialogs.top().unwrap().id;
        let _ = app.update(Message::DialogNameChanged("Work".to_string()));
        let _ = app.update(Message::DialogSubmit);

        // The user closes the dialog while the mutation is in flight
        let _ = app.update(Message::DialogDismiss);
        assert!(app.dialogs.is_empty());

        let created = create_notebook(&mut app, "Work");
        let _ = app.update(Message::NotebookSaved {
            dialog_id,
            result: Ok(SavedNotebook::Created(created)),
        });

        // The store change stands but no navigation happened on its behalf
        assert_eq!(app.route, Route::All);
        assert_eq!(app.notebooks.len(), 1);
    }

    #[test]
    fn test_edit_notebook_dialog_binds_record_fields() {
        let mut app = test_app();
        let notebook = create_notebook(&mut app, "Work");

        let _ = app.update(Message::OpenEditNotebook(notebook.id.clone()));

        let form = &app.dialogs.top().unwrap().form;
        assert_eq!(form.name, "Work");
        assert_eq!(form.emoji, None);
        assert!(matches!(form.mode(), DialogMode::Update { .. }));
    }

    #[test]
    fn test_toggle_expanded_persists() {
        let mut app = test_app();
        let notebook = create_notebook(&mut app, "Work");
        assert!(notebook.is_expanded);

        let _ = app.update(Message::ToggleExpanded(notebook.id.clone()));

        let store = app.store.lock().unwrap();
        assert!(!store.get_notebook(&notebook.id).unwrap().is_expanded);
    }

    #[test]
    fn test_click_notebook_navigates() {
        let mut app = test_app();
        let notebook = create_notebook(&mut app, "Work");

        let _ = app.update(Message::NotebookPressed(notebook.id.clone()));
        let _ = app.update(Message::NotebookReleased(notebook.id.clone()));

        assert_eq!(app.route, Route::Notebook(notebook.id));
        assert!(app.drag.is_none());
    }

    #[test]
    fn test_zone_hover_only_highlights_during_drag() {
        let mut app = test_app();
        let notebook = create_notebook(&mut app, "Work");

        // Hover without a drag in progress changes nothing
        let _ = app.update(Message::ZoneEntered(0));
        assert!(app.drag.is_none());

        let _ = app.update(Message::NotebookPressed(notebook.id.clone()));
        let _ = app.update(Message::ZoneEntered(0));
        assert_eq!(app.drag.as_ref().unwrap().hover_zone, Some(0));

        let _ = app.update(Message::ZoneExited(0));
        assert_eq!(app.drag.as_ref().unwrap().hover_zone, None);
    }

    #[test]
    fn test_menu_dismiss_clears_menu() {
        let mut app = test_app();
        let note = {
            let mut store = app.store.lock().unwrap();
            store
                .create_note(CreateNoteInput {
                    workspace_id: app.workspace.id.clone(),
                    notebook_id: None,
                    title: "Note".to_string(),
                    content: String::new(),
                })
                .unwrap()
        };
        app.refresh();

        let _ = app.update(Message::OpenNoteMenu(note.id.clone()));
        assert!(app.menu.is_some());

        let _ = app.update(Message::MenuDismiss);
        assert!(app.menu.is_none());
    }
}
