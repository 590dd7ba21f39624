//! File system access for previews.
//!
//! [`entry::FileEntry`] describes one child of a folder,
//! [`listing::list_directory`] reads a folder's visible children, and
//! [`sort::sort_entries`] puts them in display order.

pub mod entry;
pub mod listing;
pub mod sort;
