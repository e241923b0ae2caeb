//! Astronote desktop entry point.

mod app;
mod context_menu;
mod dialog;
mod router;
mod sidebar;

use app::App;
use astronote_core::{Store, Workspace};
use flexi_logger::{Duplicate, FileSpec, Logger};
use iced::{Task, Theme};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("astronote")
}

fn init_logging(dir: &Path) -> Option<flexi_logger::LoggerHandle> {
    match Logger::try_with_env_or_str("info") {
        Ok(logger) => logger
            .log_to_file(FileSpec::default().directory(dir.join("logs")))
            .duplicate_to_stderr(Duplicate::Warn)
            .start()
            .map_err(|e| eprintln!("failed to start logger: {e}"))
            .ok(),
        Err(e) => {
            eprintln!("invalid log specification: {e}");
            None
        }
    }
}

/// Opens the store and returns the workspace to show, creating a default
/// "Personal" workspace on first launch.
fn bootstrap(dir: &Path) -> astronote_core::Result<(Store, Workspace)> {
    let mut store = Store::open_or_create(dir.join("astronote.db"))?;
    let workspace = match store.list_workspaces()?.into_iter().next() {
        Some(workspace) => workspace,
        None => store.create_workspace("Personal", None, None)?,
    };
    Ok((store, workspace))
}

fn main() -> iced::Result {
    let dir = data_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("failed to create data directory {}: {e}", dir.display());
        std::process::exit(1);
    }
    let _logger = init_logging(&dir);

    let (store, workspace) = match bootstrap(&dir) {
        Ok(opened) => opened,
        Err(e) => {
            log::error!("failed to open store: {e}");
            std::process::exit(1);
        }
    };
    log::info!("opened workspace {} ({})", workspace.name, workspace.id);

    let app = App::new(Arc::new(Mutex::new(store)), workspace);
    iced::application(App::title, App::update, App::view)
        .theme(|_app| Theme::Dark)
        .window_size((1100.0, 720.0))
        .run_with(move || (app, Task::none()))
}
