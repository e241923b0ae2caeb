//! Modal dialog stack and the create-or-update notebook dialog.

use crate::app::Message;
use astronote_core::NotebookForm;
use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Color, Element, Length};

/// A small fixed palette standing in for a full emoji picker.
const EMOJI_PALETTE: [&str; 10] = ["📒", "📚", "💼", "🏠", "🎓", "✈️", "💡", "🎵", "🧪", "🌱"];

/// One open dialog.
#[derive(Debug, Clone)]
pub struct Dialog {
    pub id: u64,
    pub form: NotebookForm,
}

/// LIFO stack of open dialogs. Only the top dialog renders; `close_all`
/// clears the entire stack.
#[derive(Debug, Default)]
pub struct DialogStack {
    stack: Vec<Dialog>,
}

impl DialogStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, id: u64, form: NotebookForm) {
        self.stack.push(Dialog { id, form });
    }

    pub fn close_all(&mut self) {
        self.stack.clear();
    }

    pub fn top(&self) -> Option<&Dialog> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Dialog> {
        self.stack.last_mut()
    }

    /// Whether the dialog a submission originated from is still open.
    pub fn contains(&self, id: u64) -> bool {
        self.stack.iter().any(|dialog| dialog.id == id)
    }

    /// Looks an open dialog up by id; it may no longer be the top one.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Dialog> {
        self.stack.iter_mut().find(|dialog| dialog.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Renders the notebook dialog card.
pub fn view(dialog: &Dialog) -> Element<'static, Message> {
    let form = &dialog.form;

    let mut fields = column![
        text(form.title()).size(18),
        Space::with_height(8),
        text("Notebook Name").size(13),
        text_input("My Notebook", &form.name).on_input(Message::DialogNameChanged),
    ]
    .spacing(4);

    if let Some(error) = &form.error {
        fields = fields.push(text(error.clone()).size(13).color(Color::from_rgb8(220, 38, 38)));
    }

    let mut palette = row![].spacing(4);
    for emoji in EMOJI_PALETTE {
        palette = palette.push(
            button(text(emoji).size(16))
                .style(button::text)
                .on_press(Message::DialogEmojiPicked(emoji.to_string())),
        );
    }

    let mut emoji_line = row![text("Emoji").size(13), Space::with_width(Length::Fill)]
        .align_y(Alignment::Center);
    if let Some(emoji) = &form.emoji {
        emoji_line = emoji_line.push(text(emoji.clone()).size(16));
        emoji_line = emoji_line.push(
            button(text("✕").size(12))
                .style(button::text)
                .on_press(Message::DialogEmojiCleared),
        );
    }

    let submit = button(text(if form.submitting {
        "Saving…"
    } else {
        form.submit_label()
    }))
    .width(Length::Fill)
    .on_press_maybe((!form.submitting).then_some(Message::DialogSubmit));

    let card = column![
        fields,
        Space::with_height(8),
        emoji_line,
        palette,
        Space::with_height(8),
        text("Description").size(13),
        text_input("Optional description", &form.description)
            .on_input(Message::DialogDescriptionChanged),
        Space::with_height(12),
        submit,
    ]
    .spacing(4);

    container(card)
        .width(360)
        .padding(16)
        .style(container::rounded_box)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use astronote_core::DialogMode;

    fn form() -> NotebookForm {
        NotebookForm::new(DialogMode::Create {
            workspace_id: "w1".to_string(),
            parent_id: None,
        })
    }

    #[test]
    fn test_stack_is_lifo_and_close_all_clears() {
        let mut dialogs = DialogStack::new();
        dialogs.show(1, form());
        dialogs.show(2, form());

        assert_eq!(dialogs.len(), 2);
        assert_eq!(dialogs.top().unwrap().id, 2);
        assert!(dialogs.contains(1));

        dialogs.close_all();
        assert!(dialogs.is_empty());
        assert!(!dialogs.contains(1));
    }
}
