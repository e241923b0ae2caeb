//! Canonical in-app paths and small display helpers for sidebar chrome.

use crate::{Note, Notebook};

/// Returns the canonical path of a notebook.
pub fn notebook_path(notebook: &Notebook) -> String {
    format!(
        "/workspaces/{}/notebooks/{}",
        notebook.workspace_id, notebook.id
    )
}

/// Returns the canonical path of a note.
pub fn note_path(note: &Note) -> String {
    format!("/workspaces/{}/notes/{}", note.workspace_id, note.id)
}

/// Returns the canonical path of a workspace's unsorted-notes view.
pub fn unsorted_path(workspace_id: &str) -> String {
    format!("/workspaces/{workspace_id}/unsorted")
}

/// Returns up to two initials for a name, used when a workspace has no emoji.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Returns `true` when a `#rrggbb` color is dark enough to need light text.
///
/// Unparseable input counts as light, matching the neutral default chip.
pub fn color_is_dark(hex: &str) -> bool {
    let Some(rgb) = parse_hex_rgb(hex) else {
        return false;
    };
    relative_luminance(rgb) < 0.5
}

/// Parses `#rrggbb` (leading `#` optional) into an RGB triple.
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

fn relative_luminance((r, g, b): (u8, u8, u8)) -> f32 {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Converts a note title into a safe filename stem for exports.
pub fn slugify_title(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let slug: String = slug
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "note".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notebook(id: &str, workspace_id: &str) -> Notebook {
        Notebook {
            id: id.to_string(),
            workspace_id: workspace_id.to_string(),
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
    fn test_notebook_path() {
        let nb = notebook("nb1", "w1");
        assert_eq!(notebook_path(&nb), "/workspaces/w1/notebooks/nb1");
    }

    #[test]
    fn test_unsorted_path() {
        assert_eq!(unsorted_path("w1"), "/workspaces/w1/unsorted");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Personal"), "P");
        assert_eq!(initials("Side projects"), "SP");
        assert_eq!(initials("a b c"), "AB");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_color_is_dark() {
        assert!(color_is_dark("#1f2937"));
        assert!(!color_is_dark("#f9fafb"));
        assert!(!color_is_dark("not-a-color"));
    }

    #[test]
    fn test_non_ascii_color_counts_as_light() {
        // 6 bytes but not 6 ASCII hex digits; must not panic on slicing
        assert_eq!(parse_hex_rgb("aéaaa"), None);
        assert!(!color_is_dark("aéaaa"));
        assert!(!color_is_dark("#ffffé"));
    }

    #[test]
    fn test_slugify_title() {
        assert_eq!(slugify_title("Meeting Notes"), "meeting-notes");
        assert_eq!(slugify_title("Hello, World!"), "hello-world");
        assert_eq!(slugify_title("  "), "note");
    }
}
