//! Directory entry representation.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use unicode_normalization::UnicodeNormalization;

/// `UF_HIDDEN` from `<sys/stat.h>`: the Finder "hidden" flag.
#[cfg(target_os = "macos")]
const UF_HIDDEN: u32 = 0x0000_8000;

/// A single child of a previewed folder.
///
/// `FileEntry` is immutable and built fresh for every preview request.
/// Directory sizes are reported as `0`.
///
/// # Examples
///
/// ```no_run
/// use quickscope_core::FileEntry;
/// use std::fs;
///
/// let metadata = fs::metadata("Cargo.toml").unwrap();
/// let entry = FileEntry::new("Cargo.toml".into(), &metadata);
/// assert_eq!(entry.name(), "Cargo.toml");
/// assert!(!entry.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
    size: u64,
    modified: Option<SystemTime>,
    is_dir: bool,
    /// `false` when the entry could be listed but not stat'ed.
    has_metadata: bool,
}

impl FileEntry {
    /// Creates a new `FileEntry` from a path and its metadata.
    ///
    /// The name is normalised to NFC so that decomposed filenames (as
    /// stored by HFS+/APFS) compare and display like their composed form.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();

        Self {
            path,
            name,
            size: if metadata.is_dir() { 0 } else { metadata.len() },
            modified: metadata.modified().ok(),
            is_dir: metadata.is_dir(),
            has_metadata: true,
        }
    }

    /// Creates a `FileEntry` from already-known attributes.
    pub fn from_parts(
        path: PathBuf,
        size: u64,
        modified: Option<SystemTime>,
        is_dir: bool,
    ) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();

        Self {
            path,
            name,
            size: if is_dir { 0 } else { size },
            modified,
            is_dir,
            has_metadata: true,
        }
    }

    /// Creates an entry whose size and date could not be read, as happens
    /// in a folder that is readable but not searchable.
    pub fn without_metadata(path: PathBuf, is_dir: bool) -> Self {
        Self {
            has_metadata: false,
            ..Self::from_parts(path, 0, None, is_dir)
        }
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the final path component.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the file size in bytes. Always `0` for directories.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the last-modified time, if available.
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns `false` if size and date are unknown.
    pub fn has_metadata(&self) -> bool {
        self.has_metadata
    }
}

/// Returns `true` for dot-prefixed names.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Returns `true` if the file carries the platform's hidden attribute.
#[cfg(target_os = "macos")]
pub fn has_hidden_flag(metadata: &std::fs::Metadata) -> bool {
    use std::os::macos::fs::MetadataExt;
    metadata.st_flags() & UF_HIDDEN != 0
}

/// Returns `true` if the file carries the platform's hidden attribute.
#[cfg(not(target_os = "macos"))]
pub fn has_hidden_flag(_metadata: &std::fs::Metadata) -> bool {
    false
}
