//! The preview view tree.
//!
//! A [`PreviewView`] is a plain, owned description of what the preview
//! panel shows: a header, then either the rows with a summary or a single
//! placeholder. Front ends render it; nothing in it refers back to the
//! filesystem.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::preview::format::summary_text;
use crate::preview::icon::Icon;

/// Icon, name and full path of the previewed folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub icon: Icon,
    pub name: String,
    pub path: PathBuf,
}

impl Header {
    /// Builds the header for `path`. The root folder is named by its path.
    pub fn for_folder(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| crate::nfc_string(&n.to_string_lossy()))
            .unwrap_or_else(|| path.display().to_string());

        Self {
            icon: Icon::Folder,
            name,
            path: path.to_path_buf(),
        }
    }
}

/// Background band of a row; rows alternate starting with `Even`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stripe {
    Even,
    Odd,
}

impl Stripe {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Stripe::Even
        } else {
            Stripe::Odd
        }
    }
}

/// One listed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub icon: Icon,
    pub name: String,
    pub info: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub stripe: Stripe,
}

/// Item-count line under the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
}

impl Summary {
    pub fn text(&self) -> String {
        summary_text(self.count)
    }
}

/// Why a placeholder stands in for the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    Empty,
    PermissionDenied,
    EnumerationFailed,
}

/// A centred message shown instead of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    pub message: String,
}

impl Placeholder {
    pub fn empty() -> Self {
        Self {
            kind: PlaceholderKind::Empty,
            message: "This folder is empty".to_string(),
        }
    }

    /// Builds the replacement shown when a request fails.
    pub fn for_error(error: &CoreError) -> Self {
        let kind = match error {
            CoreError::PermissionDenied(_) => PlaceholderKind::PermissionDenied,
            _ => PlaceholderKind::EnumerationFailed,
        };
        Self {
            kind,
            message: error.placeholder_message(),
        }
    }
}

/// What sits below the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Listing { rows: Vec<Row>, summary: Summary },
    Placeholder(Placeholder),
}

/// The complete preview of one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub header: Header,
    pub body: Body,
}

impl PreviewView {
    /// A view whose body is the placeholder for `error`.
    pub fn failed(path: &Path, error: &CoreError) -> Self {
        Self {
            header: Header::for_folder(path),
            body: Body::Placeholder(Placeholder::for_error(error)),
        }
    }

    pub fn rows(&self) -> &[Row] {
        match &self.body {
            Body::Listing { rows, .. } => rows,
            Body::Placeholder(_) => &[],
        }
    }

    pub fn summary(&self) -> Option<Summary> {
        match &self.body {
            Body::Listing { summary, .. } => Some(*summary),
            Body::Placeholder(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        match &self.body {
            Body::Placeholder(p) => Some(p),
            Body::Listing { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_uses_last_component() {
        let header = Header::for_folder(Path::new("/Users/me/Projects"));
        assert_eq!(header.name, "Projects");
        assert_eq!(header.path, PathBuf::from("/Users/me/Projects"));
        assert_eq!(header.icon, Icon::Folder);
    }

    #[test]
    fn header_for_root_uses_path() {
        let header = Header::for_folder(Path::new("/"));
        assert_eq!(header.name, "/");
    }

    #[test]
    fn stripes_alternate() {
        assert_eq!(Stripe::for_index(0), Stripe::Even);
        assert_eq!(Stripe::for_index(1), Stripe::Odd);
        assert_eq!(Stripe::for_index(2), Stripe::Even);
    }

    #[test]
    fn failed_view_has_no_rows() {
        let err = CoreError::PermissionDenied(PathBuf::from("/secret"));
        let view = PreviewView::failed(Path::new("/secret"), &err);

        assert!(view.rows().is_empty());
        assert!(view.summary().is_none());
        let placeholder = view.placeholder().unwrap();
        assert_eq!(placeholder.kind, PlaceholderKind::PermissionDenied);
        assert_eq!(
            placeholder.message,
            "Cannot read folder contents - permission denied"
        );
    }

    #[test]
    fn enumeration_failure_placeholder() {
        let err = CoreError::EnumerationFailed("gone".to_string());
        let placeholder = Placeholder::for_error(&err);
        assert_eq!(placeholder.kind, PlaceholderKind::EnumerationFailed);
        assert_eq!(placeholder.message, "Error reading folder: gone");
    }

    #[test]
    fn empty_placeholder_message() {
        let placeholder = Placeholder::empty();
        assert_eq!(placeholder.kind, PlaceholderKind::Empty);
        assert_eq!(placeholder.message, "This folder is empty");
    }

    #[test]
    fn summary_text_pluralises() {
        assert_eq!(Summary { count: 1 }.text(), "1 item");
        assert_eq!(Summary { count: 3 }.text(), "3 items");
    }
}
