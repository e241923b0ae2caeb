//! Note renderings for the copy-as and export-as context menu actions.

use crate::paths::slugify_title;
use crate::{Note, Result};
use pulldown_cmark::{html, Event, Parser, TagEnd};
use std::fs;
use std::path::{Path, PathBuf};

/// The output format of a note rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Plain,
    Markdown,
    Html,
    Json,
}

impl RenderFormat {
    /// File extension used by export-as.
    pub fn extension(&self) -> &'static str {
        match self {
            RenderFormat::Plain => "txt",
            RenderFormat::Markdown => "md",
            RenderFormat::Html => "html",
            RenderFormat::Json => "json",
        }
    }

    /// Short name used in notices ("Copied note as Markdown").
    pub fn display_name(&self) -> &'static str {
        match self {
            RenderFormat::Plain => "Plain Text",
            RenderFormat::Markdown => "Markdown",
            RenderFormat::Html => "Html",
            RenderFormat::Json => "Json",
        }
    }
}

/// Renders a note in the requested format.
pub fn render_note(note: &Note, format: RenderFormat) -> Result<String> {
    match format {
        RenderFormat::Plain => Ok(plain_text(note)),
        RenderFormat::Markdown => Ok(markdown(note)),
        RenderFormat::Html => Ok(html_document(note)),
        RenderFormat::Json => Ok(serde_json::to_string_pretty(note)?),
    }
}

fn markdown(note: &Note) -> String {
    if note.content.is_empty() {
        format!("# {}\n", note.title)
    } else {
        format!("# {}\n\n{}", note.title, note.content)
    }
}

fn plain_text(note: &Note) -> String {
    let mut out = note.title.clone();
    out.push('\n');

    for event in Parser::new(&note.content) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::End(TagEnd::Paragraph | TagEnd::Item) => out.push('\n'),
            Event::End(TagEnd::Heading(_)) => out.push('\n'),
            _ => {}
        }
    }

    out.trim_end().to_string()
}

fn html_document(note: &Note) -> String {
    let mut body = String::new();
    html::push_html(&mut body, Parser::new(&markdown(note)));
    body
}

/// Returns the default export directory: `~/Documents/Astronote`.
pub fn default_export_dir() -> PathBuf {
    dirs::document_dir()
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Documents")
        })
        .join("Astronote")
}

/// Writes a rendering of `note` into `dir`, creating the directory as needed.
///
/// The filename is the slugified title plus the format's extension. An
/// existing file with the same name is overwritten.
pub fn export_note(note: &Note, format: RenderFormat, dir: &Path) -> Result<PathBuf> {
    let rendered = render_note(note, format)?;
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("{}.{}", slugify_title(&note.title), format.extension()));
    fs::write(&path, rendered)?;

    log::info!("exported note {} to {}", note.id, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Note {
        Note {
            id: "n1".to_string(),
            workspace_id: "w1".to_string(),
            notebook_id: None,
            title: "Meeting Notes".to_string(),
            content: "Agenda for **today**:\n\n- budget\n- roadmap".to_string(),
            is_pinned: false,
            is_favorite: false,
            is_deleted: false,
            created_at: 1234567890,
            modified_at: 1234567890,
        }
    }

    #[test]
    fn test_markdown_rendering_prepends_title_heading() {
        let rendered = render_note(&note(), RenderFormat::Markdown).unwrap();
        assert!(rendered.starts_with("# Meeting Notes\n\n"));
        assert!(rendered.contains("**today**"));
    }

    #[test]
    fn test_plain_rendering_strips_markup() {
        let rendered = render_note(&note(), RenderFormat::Plain).unwrap();
        assert!(rendered.starts_with("Meeting Notes\n"));
        assert!(rendered.contains("today"));
        assert!(!rendered.contains("**"));
        assert!(!rendered.contains('-'));
    }

    #[test]
    fn test_html_rendering() {
        let rendered = render_note(&note(), RenderFormat::Html).unwrap();
        assert!(rendered.contains("<h1>Meeting Notes</h1>"));
        assert!(rendered.contains("<strong>today</strong>"));
        assert!(rendered.contains("<li>budget</li>"));
    }

    #[test]
    fn test_json_rendering_round_trips() {
        let rendered = render_note(&note(), RenderFormat::Json).unwrap();
        let parsed: Note = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, note());
    }

    #[test]
    fn test_export_note_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_note(&note(), RenderFormat::Markdown, dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), "meeting-notes.md");
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Meeting Notes"));
    }

    #[test]
    fn test_extensions() {
        assert_eq!(RenderFormat::Plain.extension(), "txt");
        assert_eq!(RenderFormat::Markdown.extension(), "md");
        assert_eq!(RenderFormat::Html.extension(), "html");
        assert_eq!(RenderFormat::Json.extension(), "json");
    }
}
