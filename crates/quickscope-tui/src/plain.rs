//! Plain-text rendering of a preview, used by `--print`.

use std::fmt::Write;

use quickscope_core::{Body, PreviewView};

use crate::icons::fallback_for;

/// Column at which row info starts when names are short.
const INFO_COLUMN: usize = 40;

/// Renders `view` as lines of text: header, blank line, rows or placeholder,
/// then the summary.
pub fn render_plain(view: &PreviewView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.header.name);
    let _ = writeln!(out, "{}", view.header.path.display());
    out.push('\n');

    match &view.body {
        Body::Listing { rows, summary } => {
            for row in rows {
                let left = format!("{}{}", fallback_for(row.icon), row.name);
                let width = left.chars().count();
                let pad = INFO_COLUMN.saturating_sub(width).max(2);
                let _ = writeln!(out, "{left}{}{}", " ".repeat(pad), row.info);
            }
            out.push('\n');
            let _ = writeln!(out, "{}", summary.text());
        }
        Body::Placeholder(placeholder) => {
            let _ = writeln!(out, "{}", placeholder.message);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickscope_core::{generate_preview, CoreError, PreviewConfig};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn listing_text_layout() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("docs")).unwrap();
        fs::write(tmp.path().join("a.txt"), "12345").unwrap();

        let view = generate_preview(tmp.path(), &PreviewConfig::default()).unwrap();
        let text = render_plain(&view);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], tmp.path().display().to_string());
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("/ docs"));
        assert!(lines[3].contains("Folder"));
        assert!(lines[4].starts_with("  a.txt"));
        assert!(lines[4].contains("5 bytes"));
        assert_eq!(lines.last(), Some(&"2 items"));
    }

    #[test]
    fn empty_folder_prints_placeholder() {
        let tmp = TempDir::new().unwrap();
        let view = generate_preview(tmp.path(), &PreviewConfig::default()).unwrap();
        let text = render_plain(&view);
        assert_eq!(text.lines().last(), Some("This folder is empty"));
    }

    #[test]
    fn failed_view_prints_message() {
        let view = PreviewView::failed(
            Path::new("/locked"),
            &CoreError::PermissionDenied("/locked".into()),
        );
        let text = render_plain(&view);
        assert!(text.starts_with("locked\n/locked\n"));
        assert!(text.contains("Cannot read folder contents - permission denied"));
    }
}
