//! Overlay rendering for note context menus.
//!
//! Entries come from `astronote_core::note_context_menu`; this module only
//! turns them into widgets. Submenus expand inline when toggled.

use crate::app::Message;
use astronote_core::MenuEntry;
use iced::widget::{button, column, container, horizontal_rule, text};
use iced::{Element, Length};

pub fn view(entries: Vec<MenuEntry>, open_submenu: Option<&str>) -> Element<'static, Message> {
    let mut items = column![].spacing(2);

    for entry in entries {
        items = match entry {
            MenuEntry::Button { label, action } => items.push(
                button(text(label).size(14))
                    .width(Length::Fill)
                    .style(button::text)
                    .on_press(Message::MenuAction(action)),
            ),
            MenuEntry::Separator => items.push(horizontal_rule(1)),
            MenuEntry::Submenu { label, items: sub } => {
                let open = open_submenu == Some(label.as_str());
                let marker = if open { "▾" } else { "▸" };
                let mut section = column![button(text(format!("{label} {marker}")).size(14))
                    .width(Length::Fill)
                    .style(button::text)
                    .on_press(Message::MenuToggleSubmenu(label.clone()))]
                .spacing(2);
                if open {
                    for item in sub {
                        if let MenuEntry::Button { label, action } = item {
                            section = section.push(
                                button(text(format!("    {label}")).size(14))
                                    .width(Length::Fill)
                                    .style(button::text)
                                    .on_press(Message::MenuAction(action)),
                            );
                        }
                    }
                }
                items.push(section)
            }
        };
    }

    container(items)
        .width(240)
        .padding(8)
        .style(container::rounded_box)
        .into()
}
