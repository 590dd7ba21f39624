//! Folder enumeration for previews.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::{has_hidden_flag, is_hidden_name, FileEntry};
use crate::fs::sort::sort_entries;

/// The visible contents of a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// At least one visible entry, already in display order.
    Entries(Vec<FileEntry>),
    /// The folder has no visible entries.
    Empty,
}

impl Listing {
    /// Returns the entries, or an empty slice for [`Listing::Empty`].
    pub fn entries(&self) -> &[FileEntry] {
        match self {
            Listing::Entries(entries) => entries,
            Listing::Empty => &[],
        }
    }

    /// Number of visible entries.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns `true` for [`Listing::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }
}

/// Reads the visible children of `path` and returns them sorted
/// directories-first, then by case-insensitive name.
///
/// Hidden entries are skipped by name before their metadata is read;
/// entries carrying the platform hidden flag are skipped once their
/// metadata is known. An entry that disappears between `readdir` and
/// `stat` is dropped silently; one that cannot be stat'ed for lack of
/// permission is still listed, without size or date.
///
/// # Errors
///
/// - [`CoreError::PermissionDenied`] if the folder cannot be read.
/// - [`CoreError::EnumerationFailed`] for any other failure, including a
///   missing path or a path that is not a folder.
///
/// # Examples
///
/// ```no_run
/// use quickscope_core::{list_directory, Listing};
/// use std::path::Path;
///
/// match list_directory(Path::new("/Users/me/Downloads")).unwrap() {
///     Listing::Entries(entries) => println!("{} items", entries.len()),
///     Listing::Empty => println!("empty"),
/// }
/// ```
pub fn list_directory(path: &Path) -> CoreResult<Listing> {
    let read_dir = std::fs::read_dir(path).map_err(|e| map_read_error(path, e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| map_read_error(path, e))?;

        let raw_name = dir_entry.file_name();
        if is_hidden_name(&raw_name.to_string_lossy()) {
            continue;
        }

        let metadata = match dir_entry.metadata() {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(entry = ?dir_entry.path(), "entry vanished during listing");
                continue;
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                tracing::debug!(entry = ?dir_entry.path(), "entry not searchable, listing without metadata");
                entries.push(unstatable_entry(&dir_entry));
                continue;
            }
            Err(e) => return Err(map_read_error(path, e)),
        };
        if has_hidden_flag(&metadata) {
            continue;
        }

        entries.push(FileEntry::new(dir_entry.path(), &metadata));
    }

    if entries.is_empty() {
        return Ok(Listing::Empty);
    }

    Ok(Listing::Entries(sort_entries(entries)))
}

fn unstatable_entry(dir_entry: &std::fs::DirEntry) -> FileEntry {
    let is_dir = dir_entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
    FileEntry::without_metadata(dir_entry.path(), is_dir)
}

fn map_read_error(path: &Path, e: std::io::Error) -> CoreError {
    match e.kind() {
        ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
        _ => CoreError::EnumerationFailed(e.to_string()),
    }
}
