//! Display ordering for folder entries.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::fs::entry::FileEntry;

/// Sorts entries so that every directory precedes every file, and each
/// group is ordered by case-insensitive name.
///
/// Names that differ only in case fall back to a byte comparison so the
/// order is deterministic across calls.
pub fn sort_entries(mut entries: Vec<FileEntry>) -> Vec<FileEntry> {
    entries.sort_by(compare_entries);
    entries
}

/// The comparator behind [`sort_entries`].
pub fn compare_entries(a: &FileEntry, b: &FileEntry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| compare_names(a.name(), b.name()))
}

/// Case- and accent-insensitive name comparison.
///
/// `Éclair` sorts with `eclair`, between `apple` and `zebra`. Ties fall
/// back to the lower-cased name, then to the raw bytes.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Decomposes `name`, strips combining marks and lower-cases the rest.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
