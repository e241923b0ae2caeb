//! The workspace sidebar: header, library links and the notebook tree.
//!
//! The tree is computed first as a flat row list ([`sidebar_rows`]) and then
//! rendered. Every sibling group is interleaved with drop zones — one before
//! each notebook and one after the last, so N notebooks yield N+1 zones.
//! A zone reports a [`DropTarget`] naming the parent the dragged item should
//! move to; the root target is the "Unsorted" sentinel with a `None` id.
//!
//! Drop position never persists an ordering: siblings are re-sorted by name
//! after every move. The zones exist for precise reparenting, not ordinals.

use crate::app::Message;
use crate::router::Route;
use astronote_core::{paths, Notebook, Workspace};
use iced::widget::{button, column, container, mouse_area, row, text, Space};
use iced::{Alignment, Color, Element, Length, Theme};
use std::collections::HashMap;

/// Sentinel name for the root-level drop target.
pub const UNSORTED_NAME: &str = "Unsorted";

/// Where a drag payload lands when dropped: the new parent's id and display
/// name, with `id == None` meaning root level / unsorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub id: Option<String>,
    pub name: String,
}

impl DropTarget {
    pub fn root() -> Self {
        Self {
            id: None,
            name: UNSORTED_NAME.to_string(),
        }
    }
}

/// A drag payload, tagged by record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    Note { id: String },
    Notebook { id: String },
}

/// One visual row of the notebook tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarRow {
    DropZone {
        index: usize,
        target: DropTarget,
    },
    Notebook {
        notebook: Notebook,
        depth: u16,
        has_children: bool,
    },
}

/// Flattens a workspace's notebooks into renderable rows.
///
/// `notebooks` must already be in case-insensitive name order (the store's
/// list order); grouping by parent preserves it within each sibling group.
/// Children of collapsed notebooks are skipped entirely.
pub fn sidebar_rows(notebooks: &[Notebook]) -> Vec<SidebarRow> {
    let mut children: HashMap<Option<String>, Vec<&Notebook>> = HashMap::new();
    for notebook in notebooks {
        children
            .entry(notebook.parent_id.clone())
            .or_default()
            .push(notebook);
    }

    let mut rows = Vec::new();
    let mut zone_index = 0;
    push_group(&mut rows, &mut zone_index, &children, None, DropTarget::root(), 0);
    rows
}

fn push_group(
    rows: &mut Vec<SidebarRow>,
    zone_index: &mut usize,
    children: &HashMap<Option<String>, Vec<&Notebook>>,
    parent_id: Option<&str>,
    target: DropTarget,
    depth: u16,
) {
    let group = children
        .get(&parent_id.map(str::to_string))
        .map(|v| v.as_slice())
        .unwrap_or(&[]);

    rows.push(next_zone(zone_index, target.clone()));
    for notebook in group {
        let has_children = children.contains_key(&Some(notebook.id.clone()));
        rows.push(SidebarRow::Notebook {
            notebook: (*notebook).clone(),
            depth,
            has_children,
        });
        if has_children && notebook.is_expanded {
            let child_target = DropTarget {
                id: Some(notebook.id.clone()),
                name: notebook.name.clone(),
            };
            push_group(
                rows,
                zone_index,
                children,
                Some(&notebook.id),
                child_target,
                depth + 1,
            );
        }
        rows.push(next_zone(zone_index, target.clone()));
    }
}

fn next_zone(zone_index: &mut usize, target: DropTarget) -> SidebarRow {
    let row = SidebarRow::DropZone {
        index: *zone_index,
        target,
    };
    *zone_index += 1;
    row
}

/// Renders the full sidebar.
pub fn view(
    workspace: &Workspace,
    rows: Vec<SidebarRow>,
    hover_zone: Option<usize>,
    route: &Route,
) -> Element<'static, Message> {
    let has_notebooks = rows
        .iter()
        .any(|row| matches!(row, SidebarRow::Notebook { .. }));

    let mut tree = column![].spacing(1);
    for item in rows {
        tree = tree.push(match item {
            SidebarRow::DropZone { index, target } => {
                zone_view(index, target, hover_zone == Some(index))
            }
            SidebarRow::Notebook {
                notebook,
                depth,
                has_children,
            } => {
                let selected = *route == Route::Notebook(notebook.id.clone());
                notebook_view(notebook, depth, has_children, selected)
            }
        });
    }
    if !has_notebooks {
        tree = tree.push(
            container(text("Use Notebooks to organize Notes").size(13))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding(8),
        );
    }

    let section_title = row![
        text("Notebooks").size(13),
        Space::with_width(Length::Fill),
        button(text("+").size(14))
            .style(button::text)
            .on_press(Message::OpenCreateNotebook { parent_id: None }),
    ]
    .align_y(Alignment::Center)
    .padding([0.0, 4.0]);

    column![
        header_view(workspace),
        library_view(route),
        section_title,
        tree,
    ]
    .spacing(12)
    .padding(8)
    .width(Length::Fill)
    .into()
}

fn header_view(workspace: &Workspace) -> Element<'static, Message> {
    let chip_label = workspace
        .emoji
        .clone()
        .unwrap_or_else(|| paths::initials(&workspace.name));
    let chip_color = workspace
        .color
        .as_deref()
        .and_then(paths::parse_hex_rgb)
        .map(|(r, g, b)| Color::from_rgb8(r, g, b));
    let label_color = if workspace.color.as_deref().is_some_and(paths::color_is_dark) {
        Color::WHITE
    } else {
        Color::BLACK
    };

    let chip = container(text(chip_label).size(14).color(label_color))
        .padding(4)
        .style(move |_theme: &Theme| container::Style {
            background: chip_color.map(Into::into),
            ..container::Style::default()
        });

    row![chip, text(workspace.name.clone()).size(16)]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

fn library_view(route: &Route) -> Element<'static, Message> {
    let link = |label: &'static str, target: Route| {
        let style = if *route == target {
            button::secondary
        } else {
            button::text
        };
        button(text(label).size(14))
            .width(Length::Fill)
            .style(style)
            .on_press(Message::Navigate(target))
    };

    column![
        link("All Notes", Route::All),
        link("Unsorted", Route::Unsorted),
        link("Favorites", Route::Favorites),
        link("Trash", Route::Trash),
    ]
    .spacing(1)
    .into()
}

fn zone_view(index: usize, target: DropTarget, hovered: bool) -> Element<'static, Message> {
    let strip = container(Space::with_height(4))
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: hovered.then(|| Color::from_rgb8(59, 130, 246).into()),
            ..container::Style::default()
        });

    mouse_area(strip)
        .on_enter(Message::ZoneEntered(index))
        .on_exit(Message::ZoneExited(index))
        .on_release(Message::ZoneReleased(target))
        .into()
}

fn notebook_view(
    notebook: Notebook,
    depth: u16,
    has_children: bool,
    selected: bool,
) -> Element<'static, Message> {
    let id = notebook.id.clone();
    let icon = notebook.emoji.clone().unwrap_or_else(|| "📔".to_string());

    let label = row![
        Space::with_width(4 + depth * 14),
        text(icon).size(14),
        text(notebook.name.clone()).size(14),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let draggable = mouse_area(
        container(label)
            .width(Length::Fill)
            .padding(2)
            .style(move |_theme: &Theme| container::Style {
                background: selected.then(|| Color::from_rgb8(55, 65, 81).into()),
                ..container::Style::default()
            }),
    )
    .on_press(Message::NotebookPressed(id.clone()))
    .on_release(Message::NotebookReleased(id.clone()))
    .on_right_press(Message::OpenEditNotebook(id.clone()));

    let mut controls = row![draggable].align_y(Alignment::Center).spacing(2);
    if has_children {
        let chevron = if notebook.is_expanded { "▾" } else { "▸" };
        controls = controls.push(
            button(text(chevron).size(12))
                .style(button::text)
                .on_press(Message::ToggleExpanded(id.clone())),
        );
    }
    controls = controls.push(
        button(text("+").size(12))
            .style(button::text)
            .on_press(Message::OpenCreateNotebook {
                parent_id: Some(id),
            }),
    );

    controls.into()
}
