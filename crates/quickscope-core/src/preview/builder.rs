//! Builds a [`PreviewView`] for a folder.

use std::path::Path;

use crate::config::settings::PreviewConfig;
use crate::error::CoreResult;
use crate::fs::listing::{list_directory, Listing};
use crate::preview::format::info_text;
use crate::preview::icon::Icon;
use crate::preview::view::{Body, Header, Placeholder, PreviewView, Row, Stripe, Summary};

/// Enumerates `path` and lays out its preview.
///
/// An empty folder is a successful preview whose body is the empty
/// placeholder.
///
/// # Errors
///
/// Propagates [`crate::CoreError::PermissionDenied`] and
/// [`crate::CoreError::EnumerationFailed`] from [`list_directory`].
pub fn generate_preview(path: &Path, config: &PreviewConfig) -> CoreResult<PreviewView> {
    let header = Header::for_folder(path);

    let body = match list_directory(path)? {
        Listing::Empty => Body::Placeholder(Placeholder::empty()),
        Listing::Entries(entries) => {
            let rows: Vec<Row> = entries
                .iter()
                .enumerate()
                .map(|(index, entry)| Row {
                    icon: Icon::for_entry(entry),
                    name: entry.name().to_string(),
                    info: info_text(entry, config),
                    path: entry.path().to_path_buf(),
                    is_dir: entry.is_dir(),
                    stripe: Stripe::for_index(index),
                })
                .collect();
            let summary = Summary { count: rows.len() };
            Body::Listing { rows, summary }
        }
    };

    Ok(PreviewView { header, body })
}
